//! Cascading selection example for pinloc-rs
//!
//! This example demonstrates the selection coordinator: forward cascading
//! selection, the reverse pincode path, and reset propagation.

use pinloc_rs::prelude::*;

fn sample_records() -> RecordsRaw {
    vec![
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560100")
            .with_locality("Electronic City"),
        PlaceRecordRaw::new("Karnataka", "Mysuru", "Mysuru", "570001"),
        PlaceRecordRaw::new("Maharashtra", "Pune", "Pune", "411001"),
    ]
}

fn print_selection(selection: &Selection<DefaultBackend>) {
    println!(
        "  [{:?}] state={:?} district={:?} city={:?} pincode={:?}",
        selection.stage(),
        selection.state(),
        selection.district(),
        selection.city(),
        selection.pincode()
    );
}

fn main() -> Result<()> {
    println!("=== pinloc-rs Cascading Selection Example ===\n");

    let engine = DefaultEngine::new(MemorySource::new(sample_records()));
    engine.initialize()?;

    let mut coordinator = engine.coordinator();
    coordinator.subscribe(|selection| {
        println!("  (observer) selection changed:");
        print_selection(selection);
    });

    // Example 1: Forward cascade, one level at a time
    println!("--- Example 1: Forward cascade ---");
    coordinator.set_state("Karnataka")?;
    coordinator.set_district("Bengaluru Urban")?;
    coordinator.set_city("Bengaluru")?;
    println!();

    // Example 2: The reverse path fills all four fields at once
    println!("--- Example 2: Reverse resolution from a pincode ---");
    let hits = engine.search("560100")?;
    coordinator.set_from_pincode(hits[0]);
    println!();

    // Example 3: Changing an upstream field resets everything below it
    println!("--- Example 3: Reset propagation ---");
    coordinator.set_state("Maharashtra")?;
    println!();

    // Example 4: Inconsistent child values are rejected
    println!("--- Example 4: Validation ---");
    match coordinator.set_district("Mysuru") {
        Ok(()) => println!("  unexpected: Mysuru accepted under Maharashtra"),
        Err(e) => println!("  ✓ rejected as expected: {e}"),
    }

    Ok(())
}
