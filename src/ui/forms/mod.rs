//! Form rendering module
//!
//! - `field_renderer`: text and select field boxes with inline errors
//! - `signup_form`: the sign-up form layout, drawing and hit testing

mod field_renderer;
mod signup_form;

pub use signup_form::{draw as draw_signup, row_at};
