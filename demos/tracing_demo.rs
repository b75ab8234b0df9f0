//! Demonstrates the trace events emitted while deriving views
//!
//! Run with: cargo run --example tracing_demo --features tracing

use sieve::predicate::*;
use sieve::{compose, split, substr, FilteredView};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let log = "ts=1 level=WARN msg=disk; ts=2 level=INFO msg=ok; ts=3 level=WARN msg=cpu";
    let records = split(&FilteredView::new(log), &FilteredView::new("; "));

    for record in &records {
        let fields = record.split(&FilteredView::new(" "));
        let message = substr(&fields[2], 4, 0);
        tracing::info!(record = %record, message = %message, "parsed record");
    }

    // A filter borrowing a table built at runtime
    let noise = String::from("=0123456789");
    let compact = compose(
        &records[0],
        [Filter::new(|c: &u8| !noise.as_bytes().contains(c)), not_whitespace().boxed()],
    );
    tracing::info!(compact = %compact, "composed record");

    // Out-of-range lookups are reported at debug level
    if let Err(e) = compact.at(100) {
        tracing::warn!("Lookup failed: {}", e);
    }
}
