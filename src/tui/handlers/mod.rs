mod form_mode;
mod mouse;
mod normal_mode;

pub use form_mode::handle_form_mode;
pub use mouse::handle_mouse;
pub use normal_mode::handle_normal_mode;
