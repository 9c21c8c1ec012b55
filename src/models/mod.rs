//! Data models for the event validator
//!
//! This module contains the domain models: the event contract, the field
//! decoders that enforce it, validation errors and the batch summary.

pub mod error;
pub mod event;
pub mod summary;
pub mod validation;

// Re-export commonly used types
pub use error::{ValidationError, ValidationErrorKind, ValidationErrors, WHOLE_INPUT_INDEX};
pub use event::{Event, EventType};
pub use summary::Summary;
pub use validation::{canonical_timestamp, parse_timestamp};
