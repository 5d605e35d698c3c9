//! Error handling example for pinloc-rs
//!
//! This example demonstrates proper error handling and edge cases

use pinloc_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== pinloc-rs Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Initializing with a broken source ---");
    let broken = DefaultEngine::new(|| Err(LocationError::NotFound("source offline".into())));
    match broken.initialize() {
        Ok(()) => println!("✗ unexpected success"),
        Err(e) => println!("✓ initialize failed as expected: {e}"),
    }
    // The engine stays in its explicit uninitialized state: queries answer
    // empty rather than failing.
    println!(
        "  states() while uninitialized: {} entries",
        broken.states().len()
    );
    println!();

    // Example 2: A malformed record poisons the whole load
    println!("--- Example 2: Malformed dataset ---");
    let malformed = DefaultEngine::new(MemorySource::new(vec![PlaceRecordRaw::new(
        "Karnataka",
        "Mysuru",
        "Mysuru",
        "57001", // five digits
    )]));
    match malformed.initialize() {
        Ok(()) => println!("✗ unexpected success"),
        Err(e) => println!("✓ rejected: {e}"),
    }
    println!();

    let engine = DefaultEngine::new(MemorySource::new(vec![
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
        PlaceRecordRaw::new("Karnataka", "Mysuru", "Mysuru", "570001"),
    ]));
    engine.initialize()?;

    // Example 3: Malformed pincode queries fail fast
    println!("--- Example 3: Invalid queries ---");
    for bad in ["", "0000000", "56a001"] {
        match engine.search(bad) {
            Ok(_) => println!("✗ {bad:?} unexpectedly accepted"),
            Err(e) => println!("✓ {bad:?} rejected: {e}"),
        }
    }
    println!();

    // Example 4: Unknown keys are empty results, never errors
    println!("--- Example 4: 'No match' is not an error ---");
    println!(
        "  districts(\"Atlantis\"): {} entries",
        engine.districts("Atlantis").len()
    );
    println!(
        "  search(\"999999\"): {} hits",
        engine.search("999999")?.len()
    );
    println!();

    // Example 5: Selection consistency violations
    println!("--- Example 5: Inconsistent selections ---");
    let mut coordinator = engine.coordinator();
    match coordinator.set_district("Mysuru") {
        Ok(()) => println!("✗ district accepted without a state"),
        Err(e) => println!("✓ rejected: {e}"),
    }
    coordinator.set_state("Karnataka")?;
    match coordinator.set_city("Bengaluru") {
        Ok(()) => println!("✗ city accepted without a district"),
        Err(e) => println!("✓ rejected: {e}"),
    }

    Ok(())
}
