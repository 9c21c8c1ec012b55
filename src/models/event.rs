//! Event data models for the validator
//!
//! This module defines the telemetry event contract: the closed set of event
//! types and the typed event produced once a raw item passes every check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ValidationErrorKind;

/// Event types supported by the system
///
/// Declaration order is significant: it drives the order of the expected-label
/// list in error messages and of `countPerType` in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Engine switched on
    #[serde(rename = "IGNITION_ON")]
    IgnitionOn,
    /// Engine switched off
    #[serde(rename = "IGNITION_OFF")]
    IgnitionOff,
    /// Speed reading
    #[serde(rename = "SPEED")]
    Speed,
    /// Position report
    #[serde(rename = "LOCATION")]
    Location,
    /// Fuel gauge reading
    #[serde(rename = "FUEL_LEVEL")]
    FuelLevel,
}

impl EventType {
    /// Every event type, in declaration order
    pub const ALL: [EventType; 5] = [
        EventType::IgnitionOn,
        EventType::IgnitionOff,
        EventType::Speed,
        EventType::Location,
        EventType::FuelLevel,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::IgnitionOn => "IGNITION_ON",
            EventType::IgnitionOff => "IGNITION_OFF",
            EventType::Speed => "SPEED",
            EventType::Location => "LOCATION",
            EventType::FuelLevel => "FUEL_LEVEL",
        }
    }

    /// All labels joined with ", ", as shown in validation messages
    pub fn expected_labels() -> String {
        Self::ALL
            .iter()
            .map(EventType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for EventType {
    type Err = ValidationErrorKind;

    /// Labels are matched exactly; `speed` is not `SPEED`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IGNITION_ON" => Ok(EventType::IgnitionOn),
            "IGNITION_OFF" => Ok(EventType::IgnitionOff),
            "SPEED" => Ok(EventType::Speed),
            "LOCATION" => Ok(EventType::Location),
            "FUEL_LEVEL" => Ok(EventType::FuelLevel),
            _ => Err(ValidationErrorKind::InvalidEventType),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A telemetry event that passed every field check
///
/// Only the validator builds these; the raw item it came from is discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Timestamp exactly as supplied
    pub timestamp: String,

    /// The instant `timestamp` resolves to
    #[serde(skip)]
    pub occurred_at: DateTime<Utc>,

    /// Reporting vehicle
    pub vehicle_id: String,

    /// Event category
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Reading attached to the event
    pub value: f64,
}
