use crate::model::Place;

/// Shown in place of the list when there is nothing to show.
pub const EMPTY_LIST_MESSAGE: &str = "No places saved yet... start exploring!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// `None` for the empty-collection placeholder.
    pub id: Option<String>,
    pub label: String,
    pub active: bool,
}

impl ListItem {
    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub items: Vec<ListItem>,
}

impl ListView {
    /// Builds the whole list, newest first, marking `selected` as active.
    pub fn render(places: &[Place], selected: Option<&str>) -> Self {
        if places.is_empty() {
            return Self {
                items: vec![ListItem {
                    id: None,
                    label: EMPTY_LIST_MESSAGE.to_string(),
                    active: false,
                }],
            };
        }

        let items = newest_first(places)
            .into_iter()
            .map(|place| ListItem {
                id: Some(place.id().to_string()),
                label: place.display_name(),
                active: selected == Some(place.id()),
            })
            .collect();

        Self { items }
    }

    pub fn is_placeholder(&self) -> bool {
        self.items.first().is_some_and(ListItem::is_placeholder)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }

    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.items.get(index).and_then(|item| item.id.as_deref())
    }
}

/// Sorts by `createdAt` descending; equal timestamps keep collection order.
pub fn newest_first(places: &[Place]) -> Vec<&Place> {
    let mut sorted: Vec<&Place> = places.iter().collect();
    sorted.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    sorted
}
