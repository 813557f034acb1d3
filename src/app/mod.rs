//! Application state and the form controller.
//!
//! [`AppState`] owns the collection and the selection. Handlers receive it
//! explicitly; there is no global state.

mod form;
mod state;

pub use form::{
    FormController, FormField, FormInput, NAME_REQUIRED_WARNING, Submitted, submit_warning,
};
pub use state::AppState;
