//! Findings reported against a submitted batch
//!
//! Each finding pairs an item position with what was wrong with it. These are
//! collected, never propagated with `?`.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use super::event::EventType;

/// Index reported when the whole input, not one item, is malformed
pub const WHOLE_INPUT_INDEX: i64 = -1;

/// What was wrong with an item or the input
///
/// The display text of each kind is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Input is not a sequence
    #[error("Input must be a JSON array")]
    NotAnArray,

    /// Item is not a key-value record
    #[error("Event must be an object")]
    NotAnObject,

    /// Timestamp missing, not a string, or not a date-time
    #[error("Invalid ISO-8601 timestamp")]
    InvalidTimestamp,

    /// Vehicle id missing, not a string, or outside the length bounds
    #[error("vehicleId must be 5–40 chars")]
    InvalidVehicleId,

    /// Type missing or not one of the known labels
    #[error("type must be one of: {}", EventType::expected_labels())]
    InvalidEventType,

    /// Value missing or not a JSON number
    #[error("value must be a number")]
    InvalidValue,
}

/// A validation failure located in the input batch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Zero-based position of the item, or [`WHOLE_INPUT_INDEX`]
    pub index: i64,
    /// What went wrong
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// Create an error for the item at `index`
    pub fn new(index: usize, kind: ValidationErrorKind) -> Self {
        Self {
            index: index as i64,
            kind,
        }
    }

    /// Create the error reported when the input is not an array
    pub fn whole_input() -> Self {
        Self {
            index: WHOLE_INPUT_INDEX,
            kind: ValidationErrorKind::NotAnArray,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Check if the error is about the whole input
    pub fn is_whole_input(&self) -> bool {
        self.index == WHOLE_INPUT_INDEX
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item {}: {}", self.index, self.kind)
    }
}

/// Serialized as `{"index": n, "message": "..."}`
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Findings for one batch, in input order
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Unwrap into the underlying list
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}
