// crates/pinloc-core/src/model/load.rs
use crate::model::domain::LocationDb;
use crate::traits::GeoBackend;
use bincode::Options;

/// Upper bound for snapshot deserialization, to keep a corrupted or
/// malicious snapshot from ballooning memory. Pincode datasets are a few
/// hundred thousand records at most; 64 MiB is generous.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

impl<B: GeoBackend> LocationDb<B> {
    /// Reconstructs the index from a serialized binary snapshot.
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)
    }

    /// Serializes the built index to a binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_LIMIT)
            .serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::convert::from_raw;
    use crate::model::domain::LocationDb;
    use crate::raw::PlaceRecordRaw;
    use crate::traits::DefaultBackend;

    #[test]
    fn snapshot_round_trip_preserves_indices() {
        let db: LocationDb<DefaultBackend> = from_raw(vec![
            PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
            PlaceRecordRaw::new("Kerala", "Ernakulam", "Kochi", "682001")
                .with_locality("Fort Kochi"),
        ])
        .unwrap();

        let bytes = db.to_bytes().unwrap();
        let restored = LocationDb::<DefaultBackend>::from_bytes(&bytes).unwrap();

        assert_eq!(restored.record_count(), db.record_count());
        let states: Vec<&str> = restored.states().iter().map(|s| s.as_str()).collect();
        assert_eq!(states, ["Karnataka", "Kerala"]);
        let hits = restored.search("682001").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].locality(), Some("Fort Kochi"));
    }
}
