use crate::{
    error::{PlacebookError, Result},
    model::Place,
    view::{DetailView, ListView, list},
};

/// The place collection together with the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    places: Vec<Place>,
    selected: Option<String>,
}

impl AppState {
    /// Starts with the most recently created place selected, if any.
    pub fn new(places: Vec<Place>) -> Self {
        let mut state = Self {
            places,
            selected: None,
        };
        state.selected = state.most_recent().map(|p| p.id().to_string());
        state
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id() == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&Place> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn most_recent(&self) -> Option<&Place> {
        list::newest_first(&self.places).into_iter().next()
    }

    /// Places in list order.
    pub fn newest_first(&self) -> Vec<&Place> {
        list::newest_first(&self.places)
    }

    /// Selects `id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Appends a place; ids must stay unique.
    pub fn insert(&mut self, place: Place) -> Result<()> {
        if self.get(place.id()).is_some() {
            return Err(PlacebookError::DuplicateId(place.id().to_string()));
        }
        self.places.push(place);
        Ok(())
    }

    pub fn list_view(&self) -> ListView {
        ListView::render(&self.places, self.selected_id())
    }

    pub fn detail_view(&self, date_format: &str) -> DetailView {
        DetailView::render(self.selected(), date_format)
    }
}
