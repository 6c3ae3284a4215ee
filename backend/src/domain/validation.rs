//! Field-level validation results shared by every form-backed use case.
//!
//! Validation collects every failing field before anything is written, so a
//! rejected form reports all of its problems at once and leaves storage
//! untouched.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use super::Error;

/// Key used for errors that belong to the whole form rather than one field.
pub const NON_FIELD_ERRORS: &str = "form";

/// Ordered map of field name to validation messages.
///
/// # Examples
/// ```
/// use garden_journal::domain::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.add("name", "This field is required.");
/// let err = errors.into_result().expect_err("invalid form");
/// let details = err.details().expect("details");
/// assert_eq!(details["fieldErrors"]["name"][0], "This field is required.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Record a whole-form message.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    /// Whether no field has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Whether `field` has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Record the error of a fallible field parse and return the parsed value.
    pub fn check<T, E: std::fmt::Display>(
        &mut self,
        field: &str,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.add(field, err.to_string());
                None
            }
        }
    }

    /// `Ok(())` when empty, otherwise the equivalent invalid-request error.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    /// Convert into an invalid-request error carrying `details.fieldErrors`.
    pub fn into_error(self) -> Error {
        Error::invalid_request("submitted form is invalid").with_details(json!({
            "fieldErrors": self,
        }))
    }

    /// Build a single-field error directly.
    pub fn single(field: &str, message: impl Into<String>) -> Error {
        let mut errors = Self::new();
        errors.add(field, message);
        errors.into_error()
    }
}

/// Trim free text and treat blank input as absent.
pub fn optional_text(raw: Option<String>) -> Option<String> {
    raw.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    })
}
