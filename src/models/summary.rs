//! Aggregate statistics over a validated batch

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::event::{Event, EventType};
use super::validation::canonical_timestamp;

/// Summary of a batch in which every item was valid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of events in the batch
    pub total_events: usize,

    /// Count for every event type, zero counts included
    ///
    /// Keys iterate (and serialize) in declaration order.
    pub count_per_type: BTreeMap<EventType, usize>,

    /// Earliest instant in canonical form; `None` for an empty batch
    pub earliest_timestamp: Option<String>,

    /// Latest instant in canonical form; `None` for an empty batch
    pub latest_timestamp: Option<String>,

    /// Number of distinct vehicle ids (case-sensitive)
    pub unique_vehicle_count: usize,
}

impl Summary {
    /// Build a summary from validated events
    pub fn from_events(events: &[Event]) -> Self {
        let mut count_per_type: BTreeMap<EventType, usize> =
            EventType::ALL.iter().map(|t| (*t, 0)).collect();
        for event in events {
            *count_per_type.entry(event.event_type).or_insert(0) += 1;
        }

        let earliest = events.iter().map(|e| e.occurred_at).min();
        let latest = events.iter().map(|e| e.occurred_at).max();

        let unique_vehicles: HashSet<&str> =
            events.iter().map(|e| e.vehicle_id.as_str()).collect();

        Self {
            total_events: events.len(),
            count_per_type,
            earliest_timestamp: earliest.as_ref().map(canonical_timestamp),
            latest_timestamp: latest.as_ref().map(canonical_timestamp),
            unique_vehicle_count: unique_vehicles.len(),
        }
    }

    /// Count for a single event type
    pub fn count_for(&self, event_type: EventType) -> usize {
        self.count_per_type.get(&event_type).copied().unwrap_or(0)
    }

    /// Check if the summary covers no events
    pub fn is_empty(&self) -> bool {
        self.total_events == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::parse_timestamp;

    fn event(timestamp: &str, vehicle_id: &str, event_type: EventType) -> Event {
        Event {
            timestamp: timestamp.to_string(),
            occurred_at: parse_timestamp(timestamp).unwrap(),
            vehicle_id: vehicle_id.to_string(),
            event_type,
            value: 1.0,
        }
    }

    #[test]
    fn test_summary_counts() {
        let events = vec![
            event("2026-01-28T10:20:00Z", "VEHICLE-1", EventType::Speed),
            event("2026-01-28T10:15:00Z", "VEHICLE-1", EventType::IgnitionOn),
            event("2026-01-28T10:30:00Z", "VEHICLE-2", EventType::Speed),
        ];

        let summary = Summary::from_events(&events);

        assert_eq!(summary.total_events, 3);
        assert_eq!(summary.unique_vehicle_count, 2);
        assert_eq!(summary.count_for(EventType::Speed), 2);
        assert_eq!(summary.count_for(EventType::IgnitionOn), 1);
        assert_eq!(summary.count_for(EventType::FuelLevel), 0);
        assert_eq!(summary.count_per_type.len(), 5);
        assert_eq!(
            summary.earliest_timestamp.as_deref(),
            Some("2026-01-28T10:15:00.000Z")
        );
        assert_eq!(
            summary.latest_timestamp.as_deref(),
            Some("2026-01-28T10:30:00.000Z")
        );
    }

    #[test]
    fn test_summary_compares_instants_not_strings() {
        // Lexically "10:00+02:00" sorts after "09:30Z", but it is the earlier instant.
        let events = vec![
            event("2026-01-28T09:30:00Z", "VEHICLE-1", EventType::Location),
            event("2026-01-28T10:00:00+02:00", "VEHICLE-2", EventType::Location),
        ];

        let summary = Summary::from_events(&events);
        assert_eq!(
            summary.earliest_timestamp.as_deref(),
            Some("2026-01-28T08:00:00.000Z")
        );
        assert_eq!(
            summary.latest_timestamp.as_deref(),
            Some("2026-01-28T09:30:00.000Z")
        );
    }

    #[test]
    fn test_vehicle_ids_are_case_sensitive() {
        let events = vec![
            event("2026-01-28T10:00:00Z", "truck-001", EventType::Speed),
            event("2026-01-28T10:00:00Z", "TRUCK-001", EventType::Speed),
            event("2026-01-28T10:00:00Z", "truck-001", EventType::Speed),
        ];

        assert_eq!(Summary::from_events(&events).unique_vehicle_count, 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_events(&[]);

        assert!(summary.is_empty());
        assert_eq!(summary.unique_vehicle_count, 0);
        assert!(summary.earliest_timestamp.is_none());
        assert!(summary.latest_timestamp.is_none());
        assert!(summary.count_per_type.values().all(|c| *c == 0));
    }

    #[test]
    fn test_summary_json_key_order() {
        let summary = Summary::from_events(&[event(
            "2026-01-28T10:15:00Z",
            "ABC12345",
            EventType::FuelLevel,
        )]);

        let json = serde_json::to_string(&summary).unwrap();
        let positions: Vec<usize> = EventType::ALL
            .iter()
            .map(|t| json.find(&format!("\"{}\"", t.as_str())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\"totalEvents\":1"));
        assert!(json.contains("\"uniqueVehicleCount\":1"));
    }
}
