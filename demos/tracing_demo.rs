//! Demonstrates tracing of rejected assertions
//!
//! Run with: cargo run --example tracing_demo --features tracing

use plumbline::Subject;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Passing checks emit nothing
    let _ = plumbline::n(5).is_greater_than(3, "must exceed three");

    // Each rejection emits one TRACE event with kind and polarity
    let _ = plumbline::is_defined(&Subject::<u8>::Undefined, "field is required");
    let _ = plumbline::not().n(15).exclusive_between(10, 20, "inside forbidden band");

    tracing::info!("Tracing demo finished");
}
