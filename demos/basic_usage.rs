//! Basic usage example for pinloc-rs
//!
//! This example demonstrates how to:
//! - Feed the engine a record source and initialize it
//! - Walk the hierarchy level by level
//! - Resolve full and partial pincodes

use pinloc_rs::prelude::*;

fn sample_records() -> RecordsRaw {
    vec![
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560100")
            .with_locality("Electronic City"),
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Yelahanka", "560064"),
        PlaceRecordRaw::new("Karnataka", "Mysuru", "Mysuru", "570001"),
        PlaceRecordRaw::new("Maharashtra", "Pune", "Pune", "411001"),
        PlaceRecordRaw::new("Tamil Nadu", "Chennai", "Chennai", "600001")
            .with_locality("Anna Salai"),
    ]
}

fn main() -> Result<()> {
    println!("=== pinloc-rs Basic Usage Example ===\n");

    // Build the engine from an in-memory source; real applications would
    // point a JsonFileSource at a dataset dump instead.
    println!("Loading location dataset...");
    let engine = DefaultEngine::new(MemorySource::new(sample_records()));
    engine.initialize()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: List all states
    println!("--- Example 1: List all states ---");
    for (i, state) in engine.states().iter().enumerate() {
        println!("{}. {state}", i + 1);
    }
    println!();

    // Example 2: Districts of a state
    println!("--- Example 2: List districts of a state ---");
    for district in engine.districts("Karnataka") {
        println!("- {district}");
    }
    println!();

    // Example 3: Cities of a (state, district) pair
    println!("--- Example 3: List cities of a district ---");
    for city in engine.cities("Karnataka", "Bengaluru Urban") {
        println!("- {city}");
    }
    println!();

    // Example 4: Partial pincode lookup (autocomplete)
    println!("--- Example 4: Suggestions for a partial pincode ---");
    for record in engine.search("5600")? {
        println!(
            "{} — {}, {}, {}",
            record.pincode(),
            record.city(),
            record.district(),
            record.state()
        );
    }
    println!();

    // Example 5: Exact pincode lookup
    println!("--- Example 5: Exact pincode lookup ---");
    let hits = engine.search("560100")?;
    for record in &hits {
        println!(
            "{} — {} ({})",
            record.pincode(),
            record.city(),
            record.locality().unwrap_or("no locality label")
        );
    }

    Ok(())
}
