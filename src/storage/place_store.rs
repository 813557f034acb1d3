use super::blob::BlobStore;
use crate::{
    error::{PlacebookError, Result},
    model::Place,
};
use std::collections::HashSet;

/// Blob key used when the config does not name one.
pub const DEFAULT_KEY: &str = "travelPlaces";

/// Keeps the whole place collection as one JSON array under a single key.
pub struct PlaceStore<B: BlobStore> {
    blobs: B,
    key: String,
}

impl<B: BlobStore> PlaceStore<B> {
    pub fn new(blobs: B, key: impl Into<String>) -> Self {
        Self {
            blobs,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Loads the stored collection, substituting an empty one for missing or
    /// unreadable data.
    pub fn load(&self) -> Vec<Place> {
        match self.try_load() {
            Ok(places) => places,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "Failed to load places");
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<Place>> {
        let raw = match self.blobs.get(&self.key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                tracing::debug!(key = %self.key, "No stored places");
                return Ok(Vec::new());
            }
            Err(e) => return Err(PlacebookError::PersistenceRead(e.to_string())),
        };

        let places: Vec<Place> = serde_json::from_str(&raw)
            .map_err(|e| PlacebookError::PersistenceRead(e.to_string()))?;

        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(places.len());
        for place in places {
            if seen.insert(place.id().to_string()) {
                unique.push(place);
            } else {
                tracing::warn!(id = %place.id(), "Skipping stored place with duplicate id");
            }
        }

        tracing::debug!(key = %self.key, count = unique.len(), "Loaded places");
        Ok(unique)
    }

    /// Overwrites the stored blob with `places`.
    pub fn save(&self, places: &[Place]) -> Result<()> {
        let json = serde_json::to_string(places)?;
        self.blobs.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = places.len(), "Saved places");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.blobs.remove(&self.key)?;
        tracing::info!(key = %self.key, "Cleared stored places");
        Ok(())
    }
}
