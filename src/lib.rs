//! # Placebook - a terminal catalog of places you have visited
//!
//! Placebook keeps a single list of visited places (name, country, when,
//! landmarks, notes) in one JSON document on disk. It offers a CLI for
//! scripting and a TUI with a list pane, a detail pane and an add form.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a place
//! placebook add "Kyoto" -c Japan -w "Spring 2024"
//!
//! # List places, newest first
//! placebook list
//!
//! # Show the most recent place
//! placebook show
//!
//! # Browse interactively
//! placebook
//! ```
//!
//! ## Modules
//!
//! - [`model`]: The `Place` entity and its normalization rules
//! - [`storage`]: Key/value blob stores and the `PlaceStore`
//! - [`view`]: Pure list and detail renderings
//! - [`app`]: Selection state and the add-place form controller
//! - [`tui`]: Terminal user interface
//! - [`cli`]: Command-line interface definitions

/// Selection state and the form controller that adds places.
pub mod app;

/// Command-line interface definitions using clap.
pub mod cli;

/// Time source abstraction.
pub mod clock;

/// Configuration loading and management.
///
/// Reads an optional YAML file from the platform config directory.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PlacebookError`, `ValidationError` and the `Result<T>` alias.
pub mod error;

/// Place id generation.
pub mod ids;

pub mod logging;

/// Data model: `Place`, `PlaceFields` and `PlaceRecord`.
pub mod model;

/// Persistence of the place collection under a single key.
pub mod storage;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui for browsing and adding places.
pub mod tui;

/// Input validation utilities.
pub mod validation;

/// Read-only list and detail views.
pub mod view;
