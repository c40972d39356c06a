//! Form domain layer
//!
//! Owned values, touched flags and derived errors for the sign-up form,
//! updated through reducer-style methods on [`SignUpForm`].

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FormValues, Gender};
pub use form_state::{Form, SignUpForm, SubmitOutcome, BUTTON_ROW};
pub use validation::{FieldError, FieldErrorKind};
