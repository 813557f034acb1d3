use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::ids::{IdGenerator, NanoIdGenerator};
use crate::validation;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Loosely-typed input for building a [`Place`].
///
/// Every member is optional; this is the shape of both form input and
/// stored records before they are validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceFields {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub visit: Option<String>,
    #[serde(default)]
    pub landmarks: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PlaceFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_visit(mut self, visit: impl Into<String>) -> Self {
        self.visit = Some(visit.into());
        self
    }

    pub fn with_landmarks(mut self, landmarks: impl Into<String>) -> Self {
        self.landmarks = Some(landmarks.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// The persisted shape of a place: exactly the stored fields, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub country: String,
    pub visit: String,
    pub landmarks: String,
    pub notes: String,
    pub created_at: String,
}

impl From<PlaceRecord> for PlaceFields {
    fn from(record: PlaceRecord) -> Self {
        Self {
            id: Some(record.id),
            name: Some(record.name),
            country: Some(record.country),
            visit: Some(record.visit),
            landmarks: Some(record.landmarks),
            notes: Some(record.notes),
            created_at: Some(record.created_at),
        }
    }
}

/// A visited location.
///
/// Only constructible through validation, so `name` is never empty and
/// `created_at` is always a real timestamp. Serde goes through
/// [`PlaceFields`] on the way in and [`PlaceRecord`] on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlaceFields", into = "PlaceRecord")]
pub struct Place {
    id: String,
    name: String,
    country: String,
    visit: String,
    landmarks: String,
    notes: String,
    created_at: DateTime<Utc>,
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Place {
    /// Builds a place from loose input, trimming every field.
    ///
    /// Missing ids and timestamps are filled from `ids` and `clock`.
    pub fn new(
        fields: PlaceFields,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> Result<Self, ValidationError> {
        let name = trimmed(fields.name);
        validation::validate_name(&name)?;

        let created_at = match present(fields.created_at) {
            Some(raw) => validation::parse_created_at(&raw)?,
            None => clock.now(),
        };
        let id = present(fields.id).unwrap_or_else(|| ids.next_id());

        Ok(Self {
            id,
            name,
            country: trimmed(fields.country),
            visit: trimmed(fields.visit),
            landmarks: trimmed(fields.landmarks),
            notes: trimmed(fields.notes),
            created_at,
        })
    }

    /// Rehydrates a stored record, re-running every check `new` performs.
    pub fn from_record(fields: PlaceFields) -> Result<Self, ValidationError> {
        Self::new(fields, &SystemClock, &NanoIdGenerator::default())
    }

    pub fn to_record(&self) -> PlaceRecord {
        PlaceRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            country: self.country.clone(),
            visit: self.visit.clone(),
            landmarks: self.landmarks.clone(),
            notes: self.notes.clone(),
            created_at: self.created_at_iso(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn visit(&self) -> &str {
        &self.visit
    }

    pub fn landmarks(&self) -> &str {
        &self.landmarks
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `createdAt` as stored, e.g. `2024-01-15T10:30:00.000Z`.
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `name`, followed by ` (country)` when a country is set.
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.country)
        }
    }
}

impl TryFrom<PlaceFields> for Place {
    type Error = ValidationError;

    fn try_from(fields: PlaceFields) -> Result<Self, Self::Error> {
        Place::from_record(fields)
    }
}

impl From<Place> for PlaceRecord {
    fn from(place: Place) -> Self {
        place.to_record()
    }
}
