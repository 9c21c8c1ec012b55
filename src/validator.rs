//! Batch validation and summarisation
//!
//! [`validate_and_summarise`] is the single entry point: it takes an already
//! parsed JSON value, checks every item against the event contract and, only
//! when nothing failed, summarises the batch.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::validation::{
    validate_event_type, validate_timestamp, validate_value, validate_vehicle_id,
};
use crate::models::{Event, Summary, ValidationError, ValidationErrorKind, ValidationErrors};

/// Result of validating one batch
///
/// Exactly one side is populated: `errors` is non-empty, or `summary` is
/// present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    /// Every problem found, in input order
    pub errors: Vec<ValidationError>,

    /// Present only when `errors` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl ValidationOutcome {
    fn rejected(errors: ValidationErrors) -> Self {
        Self {
            errors: errors.into_vec(),
            summary: None,
        }
    }

    fn accepted(summary: Summary) -> Self {
        Self {
            errors: Vec::new(),
            summary: Some(summary),
        }
    }

    /// Check if the batch passed validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert to a Result
    pub fn into_result(self) -> Result<Summary, Vec<ValidationError>> {
        match self.summary {
            Some(summary) if self.errors.is_empty() => Ok(summary),
            _ => Err(self.errors),
        }
    }
}

/// Validate a batch of events and summarise it when every item is valid
pub fn validate_and_summarise(input: &Value) -> ValidationOutcome {
    let Some(items) = input.as_array() else {
        debug!("Rejected input that is not an array");
        return ValidationOutcome::rejected(ValidationError::whole_input().into());
    };

    let mut errors = ValidationErrors::new();
    let mut events = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(fields) = item.as_object() else {
            errors.add(ValidationError::new(index, ValidationErrorKind::NotAnObject));
            continue;
        };

        match decode_event(fields) {
            Ok(event) => events.push(event),
            Err(kinds) => {
                for kind in kinds {
                    errors.add(ValidationError::new(index, kind));
                }
            },
        }
    }

    debug!(
        items = items.len(),
        valid = events.len(),
        errors = errors.len(),
        "Batch validated"
    );

    if !errors.is_empty() {
        return ValidationOutcome::rejected(errors);
    }

    ValidationOutcome::accepted(Summary::from_events(&events))
}

/// Decode one record, running every field check
fn decode_event(fields: &Map<String, Value>) -> Result<Event, Vec<ValidationErrorKind>> {
    let timestamp = validate_timestamp(fields.get("timestamp"));
    let vehicle_id = validate_vehicle_id(fields.get("vehicleId"));
    let event_type = validate_event_type(fields.get("type"));
    let value = validate_value(fields.get("value"));

    match (timestamp, vehicle_id, event_type, value) {
        (Ok((timestamp, occurred_at)), Ok(vehicle_id), Ok(event_type), Ok(value)) => Ok(Event {
            timestamp,
            occurred_at,
            vehicle_id,
            event_type,
            value,
        }),
        (timestamp, vehicle_id, event_type, value) => Err([
            timestamp.err(),
            vehicle_id.err(),
            event_type.err(),
            value.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}
