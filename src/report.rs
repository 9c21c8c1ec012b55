//! Plain-text rendering of validation outcomes

use crate::models::{Summary, ValidationError};
use crate::validator::ValidationOutcome;

/// Line shown when the submitted text is not JSON at all
pub const INVALID_JSON_LINE: &str = "Invalid JSON";

/// One `Item <index>: <message>` line per error
pub fn render_errors(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Summary scalars followed by the per-type counts in declaration order
pub fn render_summary(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        format!("Total events: {}", summary.total_events),
        format!("Unique vehicles: {}", summary.unique_vehicle_count),
        format!(
            "Earliest: {}",
            summary.earliest_timestamp.as_deref().unwrap_or("-")
        ),
        format!(
            "Latest: {}",
            summary.latest_timestamp.as_deref().unwrap_or("-")
        ),
        "Count per type".to_string(),
    ];

    lines.extend(
        summary
            .count_per_type
            .iter()
            .map(|(event_type, count)| format!("  {}: {}", event_type, count)),
    );

    lines
}

/// Render whichever side of the outcome is populated
pub fn render(outcome: &ValidationOutcome) -> Vec<String> {
    match &outcome.summary {
        Some(summary) if outcome.errors.is_empty() => render_summary(summary),
        _ => render_errors(&outcome.errors),
    }
}
