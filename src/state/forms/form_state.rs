//! Sign-up form state and the submission gate

use super::field::{FieldName, FormValues, Gender};
use super::validation::{evaluate, FieldError, FieldErrors};
use crate::sink::SubmissionSink;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

/// Row index of the submit button, after the last field
pub const BUTTON_ROW: usize = FieldName::COUNT;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Every field was valid and the sink accepted the record
    Submitted,
    /// At least one field failed; the sink was not called
    Rejected { invalid: Vec<FieldName> },
    /// Every field was valid but the sink reported an error
    SinkFailed(anyhow::Error),
}

/// Values, touched flags and derived errors of the sign-up form.
///
/// `errors` always mirrors `evaluate(&values)`; it is recomputed on every
/// change and never edited directly.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    values: FormValues,
    touched: BTreeSet<FieldName>,
    errors: FieldErrors,
    /// Focused row: a field index, or [`BUTTON_ROW`]
    pub active_row: usize,
}

impl SignUpForm {
    pub fn new() -> Self {
        let values = FormValues::default();
        let errors = evaluate(&values);
        Self {
            values,
            touched: BTreeSet::new(),
            errors,
            active_row: 0,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current error for a field, shown or not
    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display next to the field: only once it has been touched
    pub fn visible_error(&self, field: FieldName) -> Option<&FieldError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Replace a field's value and re-run validation
    pub fn on_field_change(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.errors = evaluate(&self.values);
        tracing::debug!(
            field = field.key(),
            valid = !self.errors.contains_key(&field),
            "field changed"
        );
    }

    /// Record that the user has interacted with a field
    pub fn on_field_touched(&mut self, field: FieldName) {
        self.touched.insert(field);
    }

    /// Gate a submit attempt.
    ///
    /// Re-evaluates every field; the sink sees the record only when all pass.
    /// A rejected attempt marks every field touched so all errors become visible.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        self.errors = evaluate(&self.values);
        if !self.is_valid() {
            self.touched.extend(FieldName::iter());
            let invalid: Vec<FieldName> = self.errors.keys().copied().collect();
            tracing::debug!(?invalid, "submission blocked");
            return SubmitOutcome::Rejected { invalid };
        }

        match sink.submit(&self.values) {
            Ok(()) => {
                tracing::info!("form submitted");
                self.reset();
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::warn!("submission sink failed: {err:#}");
                SubmitOutcome::SinkFailed(err)
            }
        }
    }

    /// Back to the empty, untouched initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Field under focus, `None` on the button row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_row)
    }

    pub fn is_button_row_active(&self) -> bool {
        self.active_row == BUTTON_ROW
    }

    /// Append a typed character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_name().filter(|f| !f.is_select()) {
            let mut value = self.values.get(field).to_string();
            value.push(c);
            self.on_field_change(field, value);
        }
    }

    /// Remove the last character of the focused field (clears a select)
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field_name() else {
            return;
        };
        if field.is_select() {
            self.on_field_change(field, String::new());
            return;
        }
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            self.on_field_change(field, value);
        }
    }

    /// Step the gender select forward or backward; an unset select starts at
    /// the first or last option
    pub fn cycle_gender(&mut self, forward: bool) {
        let next = match (self.values.gender(), forward) {
            (Some(g), true) => g.next(),
            (Some(g), false) => g.prev(),
            (None, true) => Gender::Male,
            (None, false) => Gender::Other,
        };
        self.on_field_change(FieldName::Gender, next.to_string());
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        FieldName::COUNT + 1 // seven fields, button row
    }
    fn active_field(&self) -> usize {
        self.active_row
    }
    /// Moving focus off a field counts as touching it
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(BUTTON_ROW);
        if index != self.active_row {
            if let Some(field) = self.active_field_name() {
                self.on_field_touched(field);
            }
        }
        self.active_row = index;
    }
}
