//! Terminal user interface for placebook.
//!
//! A master/detail view built with ratatui: the place list on the left, the
//! selected place on the right, and a form overlay for adding places.
//!
//! ## Usage
//!
//! ```bash
//! placebook        # or: placebook tui
//! ```
//!
//! ## Keybindings
//!
//! - `↑/↓`, `j/k`: Move selection
//! - `g/G`: First/last place
//! - Left click: Select a place
//! - `a` or `c`: Add a place
//! - `Tab`/`Shift+Tab`: Switch form field
//! - `Enter`: Save (line break in landmarks/notes)
//! - `Ctrl+S`: Save from any field
//! - `Esc`: Close form
//! - `J/K`: Scroll details
//! - `?`: Help
//! - `q`: Quit

pub mod app;
pub mod handlers;
pub mod theme;
mod ui;

pub use app::run_tui;
