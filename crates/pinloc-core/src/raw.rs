// crates/pinloc-core/src/raw.rs

//! Raw input records shared by all loaders.
//!
//! The engine consumes the source dataset as a flat sequence of these
//! records; where they come from (file, download, embedded asset) is the
//! record source's business.

use serde::Deserialize;

/// Raw place record as it comes from the source dataset.
///
/// Field aliases cover the spellings used by the common pincode directory
/// dumps ("statename", "officename", ...). NOTE: this type mirrors the
/// external dataset and is not part of the public query API.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRecordRaw {
    #[serde(alias = "statename", alias = "state_name")]
    pub state: String,
    #[serde(alias = "districtname", alias = "district_name")]
    pub district: String,
    #[serde(alias = "cityname", alias = "taluk")]
    pub city: String,
    pub pincode: String,
    /// Free-text locality/area label, e.g. a post office name.
    #[serde(default, alias = "officename", alias = "area")]
    pub locality: Option<String>,
}

pub type RecordsRaw = Vec<PlaceRecordRaw>;

impl PlaceRecordRaw {
    /// Convenience constructor, mostly for tests and in-memory sources.
    pub fn new(
        state: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            district: district.into(),
            city: city.into(),
            pincode: pincode.into(),
            locality: None,
        }
    }

    /// Attach a locality label.
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }
}
