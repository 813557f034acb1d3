//! Render-ready view models.
//!
//! Views are rebuilt wholesale from application state on every render; the
//! TUI and CLI only decide how to paint them.

pub mod detail;
pub mod list;

pub use detail::{DetailCard, DetailSection, DetailView};
pub use list::{ListItem, ListView};
