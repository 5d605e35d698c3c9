//! End-to-end coverage of the engine surface: forward cascade, reverse
//! pincode resolution, and the consistency rules binding them.

use pinloc_core::prelude::*;

fn bengaluru_records() -> RecordsRaw {
    vec![
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560100")
            .with_locality("Electronic City"),
    ]
}

fn engine_with(records: RecordsRaw) -> DefaultEngine {
    let engine = DefaultEngine::new(MemorySource::new(records));
    engine.initialize().expect("sample dataset loads");
    engine
}

#[test]
fn bengaluru_walkthrough() {
    let engine = engine_with(bengaluru_records());

    let hits = engine.search("5600").unwrap();
    let codes: Vec<&str> = hits.iter().map(|r| r.pincode()).collect();
    assert_eq!(codes, ["560001", "560100"]);

    let exact = engine.search("560001").unwrap();
    assert_eq!(exact.len(), 1);
    assert!(exact[0].is_named("Bengaluru"));

    let districts: Vec<&str> = engine
        .districts("Karnataka")
        .iter()
        .map(|d| d.as_str())
        .collect();
    assert!(districts.contains(&"Bengaluru Urban"));

    let electronic_city = engine.search("560100").unwrap()[0];
    let mut coordinator = engine.coordinator();
    coordinator.set_from_pincode(electronic_city);

    let s = coordinator.selection();
    assert_eq!(s.state(), Some("Karnataka"));
    assert_eq!(s.district(), Some("Bengaluru Urban"));
    assert_eq!(s.city(), Some("Bengaluru"));
    assert_eq!(s.pincode(), Some("560100"));
}

#[test]
fn every_district_and_city_traces_to_a_record() {
    let engine = engine_with(vec![
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
        PlaceRecordRaw::new("Karnataka", "Mysuru", "Mysuru", "570001"),
        PlaceRecordRaw::new("Maharashtra", "Pune", "Pune", "411001"),
        PlaceRecordRaw::new("Maharashtra", "Mumbai City", "Mumbai", "400001"),
    ]);
    let db = engine.db().unwrap();

    for state in engine.states() {
        for district in engine.districts(state) {
            let backed = db
                .records()
                .iter()
                .any(|r| equals_folded(r.state(), state) && equals_folded(r.district(), district));
            assert!(backed, "district {district} not derivable from any record");

            for city in engine.cities(state, district) {
                let backed = db.records().iter().any(|r| {
                    equals_folded(r.state(), state)
                        && equals_folded(r.district(), district)
                        && equals_folded(r.city(), city)
                });
                assert!(backed, "city {city} not derivable from any record");
            }
        }
    }
}

#[test]
fn forward_selection_stays_consistent() {
    let engine = engine_with(vec![
        PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
        PlaceRecordRaw::new("Karnataka", "Mysuru", "Mysuru", "570001"),
        PlaceRecordRaw::new("Maharashtra", "Pune", "Pune", "411001"),
    ]);
    let mut coordinator = engine.coordinator();

    coordinator.set_state("Karnataka").unwrap();
    coordinator.set_district("Mysuru").unwrap();
    coordinator.set_city("Mysuru").unwrap();
    coordinator.set_state("Maharashtra").unwrap();
    coordinator.set_district("Pune").unwrap();

    // After any non-failing sequence, set fields are reachable from their
    // parents.
    let s = coordinator.selection();
    let state = s.state().unwrap();
    let district = s.district().unwrap();
    assert!(engine
        .districts(state)
        .iter()
        .any(|d| equals_folded(d, district)));
    assert_eq!(s.city(), None);
}

#[test]
fn reset_propagates_from_fully_resolved() {
    let engine = engine_with(bengaluru_records());
    let mut coordinator = engine.coordinator();

    let hits = engine.search("560100").unwrap();
    coordinator.set_from_pincode(hits[0]);
    assert_eq!(coordinator.stage(), SelectionStage::Pincode);

    coordinator.set_state("Karnataka").unwrap();
    let s = coordinator.selection();
    assert_eq!(s.state(), Some("Karnataka"));
    assert_eq!(s.district(), None);
    assert_eq!(s.city(), None);
    assert_eq!(s.pincode(), None);
}

#[test]
fn double_initialize_is_a_no_op() {
    let engine = engine_with(bengaluru_records());
    let before = engine.stats();
    engine.initialize().unwrap();
    let after = engine.stats();
    assert_eq!(before.records, after.records);
    assert_eq!(before.states, after.states);
}

#[test]
fn query_boundaries() {
    let engine = engine_with(bengaluru_records());

    for bad in ["", "0000000"] {
        assert!(matches!(
            engine.search(bad),
            Err(LocationError::InvalidQuery { .. })
        ));
    }

    // Unknown codes are a normal empty outcome.
    assert!(engine.search("110001").unwrap().is_empty());
}
