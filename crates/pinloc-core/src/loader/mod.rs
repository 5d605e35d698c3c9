// crates/pinloc-core/src/loader/mod.rs

//! # Record sources
//!
//! Handles the physical layer (I/O, decompression) and hands the engine its
//! flat record sequence. Which source to use is the embedding application's
//! choice; the engine itself never touches the filesystem or the network.

use crate::engine::RecordSource;
use crate::error::{LocationError, Result};
use crate::model::LocationDb;
use crate::raw::RecordsRaw;
use crate::traits::GeoBackend;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "fetch")]
mod fetch;
#[cfg(feature = "fetch")]
pub use fetch::RemoteJsonSource;

/// Public catalog page of the All India Pincode Directory dataset.
pub const DATA_REPO_URL: &str =
    "https://www.data.gov.in/catalog/all-india-pincode-directory";

/// Records already held in memory. The go-to source for tests and for
/// applications that bundle the dataset themselves.
pub struct MemorySource {
    records: RecordsRaw,
}

impl MemorySource {
    pub fn new(records: RecordsRaw) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn fetch(&self) -> Result<RecordsRaw> {
        Ok(self.records.clone())
    }
}

/// A JSON array of flat place records on disk. Reads `.json`, and `.json.gz`
/// when the `compact` feature is enabled.
#[cfg(feature = "json")]
pub struct JsonFileSource {
    path: PathBuf,
}

#[cfg(feature = "json")]
impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "json")]
impl RecordSource for JsonFileSource {
    fn fetch(&self) -> Result<RecordsRaw> {
        let reader = open_stream(&self.path)?;
        let records: RecordsRaw = serde_json::from_reader(reader)?;
        Ok(records)
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER (DRY)
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension says so. Returns a generic reader so the caller doesn't care
/// about the compression.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        LocationError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(LocationError::DatasetLoad(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Load a binary snapshot previously written by [`save_snapshot`].
pub fn load_snapshot<B: GeoBackend>(path: impl AsRef<Path>) -> Result<LocationDb<B>> {
    let mut reader = open_stream(path.as_ref())?;
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(LocationDb::from_bytes(&data)?)
}

/// Write a built index to disk as a binary snapshot, gzip-compressed when
/// both the `compact` feature is on and the target path ends in `.gz`.
pub fn save_snapshot<B: GeoBackend>(path: impl AsRef<Path>, db: &LocationDb<B>) -> Result<()> {
    let path = path.as_ref();
    let bytes = db.to_bytes()?;
    let file = File::create(path)?;
    let mut writer: Box<dyn Write> = if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            Box::new(flate2::write::GzEncoder::new(
                file,
                flate2::Compression::default(),
            ))
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(LocationError::DatasetLoad(
                "gzip snapshot requested but the 'compact' feature is disabled".into(),
            ));
        }
    } else {
        Box::new(file)
    };
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DefaultEngine;
    use crate::model::convert::from_raw;
    use crate::raw::PlaceRecordRaw;
    use crate::traits::DefaultBackend;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pinloc-{}-{}", std::process::id(), name))
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_file_source_feeds_the_engine() {
        let path = temp_path("records.json");
        std::fs::write(
            &path,
            r#"[
                {"state": "Karnataka", "district": "Bengaluru Urban",
                 "city": "Bengaluru", "pincode": "560001"},
                {"statename": "Kerala", "districtname": "Ernakulam",
                 "taluk": "Kochi", "pincode": "682001", "officename": "Fort Kochi"}
            ]"#,
        )
        .unwrap();

        let engine = DefaultEngine::new(JsonFileSource::new(&path));
        engine.initialize().unwrap();
        assert_eq!(engine.stats().records, 2);
        assert_eq!(
            engine.search("682001").unwrap()[0].locality(),
            Some("Fort Kochi")
        );

        std::fs::remove_file(&path).ok();
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let engine = DefaultEngine::new(JsonFileSource::new("/definitely/not/here.json"));
        let err = engine.initialize().unwrap_err();
        assert!(matches!(err, LocationError::NotFound(_)));
    }

    #[test]
    fn snapshot_survives_disk_round_trip() {
        let db = from_raw::<DefaultBackend>(vec![PlaceRecordRaw::new(
            "Karnataka",
            "Mysuru",
            "Mysuru",
            "570001",
        )])
        .unwrap();

        let path = temp_path("snapshot.bin");
        save_snapshot(&path, &db).unwrap();
        let restored = load_snapshot::<DefaultBackend>(&path).unwrap();
        assert_eq!(restored.record_count(), 1);
        assert_eq!(restored.districts("Karnataka").len(), 1);

        std::fs::remove_file(&path).ok();
    }
}
