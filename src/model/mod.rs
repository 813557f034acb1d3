//! Data models for placebook.
//!
//! - [`Place`]: a validated visited location
//! - [`PlaceFields`]: loose, all-optional input used to build a place
//! - [`PlaceRecord`]: the persisted shape of a place

mod place;

pub use place::{Place, PlaceFields, PlaceRecord};
