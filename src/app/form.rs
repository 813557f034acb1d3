use super::AppState;
use crate::{
    clock::{Clock, SystemClock},
    error::{PlacebookError, Result},
    ids::{IdGenerator, NanoIdGenerator},
    model::{Place, PlaceFields},
    storage::{BlobStore, PlaceStore},
};

/// Warning shown when a submit is rejected for a missing name.
pub const NAME_REQUIRED_WARNING: &str = "Please enter a place name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Country,
    Visit,
    Landmarks,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Country,
        FormField::Visit,
        FormField::Landmarks,
        FormField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Place name",
            FormField::Country => "Country",
            FormField::Visit => "When",
            FormField::Landmarks => "Landmarks",
            FormField::Notes => "Notes",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Required, e.g. Kyoto",
            FormField::Country => "e.g. Japan",
            FormField::Visit => "e.g. Spring 2024",
            FormField::Landmarks => "One per line",
            FormField::Notes => "Memories, tips, food...",
        }
    }

    /// Landmarks and notes accept line breaks.
    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Landmarks | FormField::Notes)
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Country,
            FormField::Country => FormField::Visit,
            FormField::Visit => FormField::Landmarks,
            FormField::Landmarks => FormField::Notes,
            FormField::Notes => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Notes,
            FormField::Country => FormField::Name,
            FormField::Visit => FormField::Country,
            FormField::Landmarks => FormField::Visit,
            FormField::Notes => FormField::Landmarks,
        }
    }
}

/// Raw values currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub country: String,
    pub visit: String,
    pub landmarks: String,
    pub notes: String,
}

impl FormInput {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Country => &self.country,
            FormField::Visit => &self.visit,
            FormField::Landmarks => &self.landmarks,
            FormField::Notes => &self.notes,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Country => &mut self.country,
            FormField::Visit => &mut self.visit,
            FormField::Landmarks => &mut self.landmarks,
            FormField::Notes => &mut self.notes,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_fields(&self) -> PlaceFields {
        PlaceFields {
            name: Some(self.name.clone()),
            country: Some(self.country.clone()),
            visit: Some(self.visit.clone()),
            landmarks: Some(self.landmarks.clone()),
            notes: Some(self.notes.clone()),
            ..PlaceFields::default()
        }
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub id: String,
    /// `false` when the place was added in memory but the write failed.
    pub saved: bool,
}

/// The only mutation path: form input in, persisted place out.
pub struct FormController<B: BlobStore> {
    store: PlaceStore<B>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl<B: BlobStore> FormController<B> {
    pub fn new(store: PlaceStore<B>) -> Self {
        Self::with_sources(
            store,
            Box::new(SystemClock),
            Box::new(NanoIdGenerator::default()),
        )
    }

    pub fn with_sources(
        store: PlaceStore<B>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self { store, clock, ids }
    }

    pub fn store(&self) -> &PlaceStore<B> {
        &self.store
    }

    pub fn load_state(&self) -> AppState {
        AppState::new(self.store.load())
    }

    /// Builds a place from `input` and appends it to `state`.
    ///
    /// Validation failures leave both `state` and `input` untouched. On
    /// success the new place is selected, the collection is written through
    /// to the store and `input` is cleared.
    pub fn submit(&self, state: &mut AppState, input: &mut FormInput) -> Result<Submitted> {
        let place = Place::new(input.to_fields(), self.clock.as_ref(), self.ids.as_ref())?;
        let id = place.id().to_string();

        state.insert(place)?;
        state.select(&id);

        let saved = match self.store.save(state.places()) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to save places");
                false
            }
        };

        tracing::info!(id = %id, saved, "Added place");
        input.clear();
        Ok(Submitted { id, saved })
    }
}

/// User-facing text for a rejected submit.
pub fn submit_warning(err: &PlacebookError) -> String {
    match err {
        PlacebookError::Validation(crate::error::ValidationError::NameRequired) => {
            NAME_REQUIRED_WARNING.to_string()
        }
        other => other.to_string(),
    }
}
