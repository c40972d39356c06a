//! Field constraint evaluation
//!
//! Every rule is a pure function of the current [`FormValues`]. Verdicts do not
//! depend on touched state; that only decides whether an error is shown.

use super::field::{FieldName, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use thiserror::Error;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$",
    )
        .expect("email pattern compiles")
});

/// Number of digits expected in phone-like fields
pub const PHONE_DIGITS: usize = 10;

/// Broad class of a field error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Value is absent or blank
    Required,
    /// Value is present but has the wrong shape
    Format,
}

/// Why a single field fails its constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(FieldName),
    #[error("{}", .0.format_message())]
    Format(FieldName),
}

impl FieldError {
    pub fn kind(&self) -> FieldErrorKind {
        match self {
            FieldError::Required(_) => FieldErrorKind::Required,
            FieldError::Format(_) => FieldErrorKind::Format,
        }
    }
}

impl FieldName {
    fn format_message(self) -> &'static str {
        match self {
            FieldName::Email => "Invalid email address",
            FieldName::PhoneNumber => "Phone number must be exactly 10 digits",
            FieldName::EmergencyContact => "Emergency Contact must be exactly 10 digits",
            _ => "Invalid value",
        }
    }
}

/// Errors keyed by field, in display order
pub type FieldErrors = BTreeMap<FieldName, FieldError>;

/// Evaluate every field of the record
pub fn evaluate(values: &FormValues) -> FieldErrors {
    FieldName::iter()
        .filter_map(|field| validate_field(field, values).err().map(|e| (field, e)))
        .collect()
}

/// Evaluate a single field against its rule
pub fn validate_field(field: FieldName, values: &FormValues) -> Result<(), FieldError> {
    let value = values.get(field);
    match field {
        FieldName::FullName | FieldName::Class | FieldName::Section => require_text(field, value),
        FieldName::Email => {
            require(field, value)?;
            if is_valid_email(value) {
                Ok(())
            } else {
                Err(FieldError::Format(field))
            }
        }
        FieldName::PhoneNumber | FieldName::EmergencyContact => {
            require(field, value)?;
            if is_ten_digits(value) {
                Ok(())
            } else {
                Err(FieldError::Format(field))
            }
        }
        FieldName::Gender => match values.gender() {
            Some(_) => Ok(()),
            None => Err(FieldError::Required(field)),
        },
    }
}

/// Free text must contain something other than whitespace
fn require_text(field: FieldName, value: &str) -> Result<(), FieldError> {
    require(field, value.trim())
}

/// Shaped fields are only missing when empty; blanks fail the format check
fn require(field: FieldName, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required(field))
    } else {
        Ok(())
    }
}

/// `local@domain.tld` shape: RFC 5322 atext and dots in the local part, an
/// alphabetic top-level domain
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Exactly ten ASCII digits, no separators or country code
pub fn is_ten_digits(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}
