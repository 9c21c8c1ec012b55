//! Demonstration of batch validation and summarisation
//!
//! Run with: cargo run --example validate_demo

use anyhow::Context;
use event_validator::report::{render, INVALID_JSON_LINE};
use event_validator::validate_and_summarise;
use serde_json::Value;

fn main() -> anyhow::Result<()> {
    println!("=== Event Validator Demo ===\n");

    run_demo(
        "Demo 1: Valid Batch",
        r#"[
            {"timestamp": "2026-01-28T10:15:00Z", "vehicleId": "ABC12345", "type": "IGNITION_ON", "value": 1},
            {"timestamp": "2026-01-28T10:20:00Z", "vehicleId": "XYZ98765", "type": "SPEED", "value": 45},
            {"timestamp": "2026-01-28T11:20:00+01:00", "vehicleId": "ABC12345", "type": "FUEL_LEVEL", "value": 0.62}
        ]"#,
    )?;

    run_demo(
        "Demo 2: Invalid Batch",
        r#"[
            {"timestamp": "2026-01-28T10:15:00Z", "vehicleId": "ABC12345", "type": "IGNITION_ON", "value": 1},
            {"timestamp": "not-a-date", "vehicleId": "123", "type": "INVALID_TYPE", "value": "oops"},
            null
        ]"#,
    )?;

    run_demo("Demo 3: Not An Array", r#"{"foo": "bar"}"#)?;

    run_demo("Demo 4: Unparsable Text", r#"[{"timestamp": "#)?;

    Ok(())
}

fn run_demo(title: &str, text: &str) -> anyhow::Result<()> {
    println!("{}", title);
    println!("{}", "-".repeat(title.len()));

    match serde_json::from_str::<Value>(text) {
        Ok(input) => {
            let outcome = validate_and_summarise(&input);
            for line in render(&outcome) {
                println!("  {}", line);
            }

            println!("\nAs JSON:");
            let json =
                serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
            println!("{}", json);
        },
        Err(_) => println!("  {}", INVALID_JSON_LINE),
    }

    println!();
    Ok(())
}
