// crates/pinloc-core/src/model/domain.rs
use crate::traits::{GeoBackend, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of suggestions returned for a partial pincode query.
///
/// Exact 6-digit queries are never capped; a full code maps to a handful of
/// localities at most.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 25;

pub(crate) fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

/// One postal record: a 6-digit pincode and the location tuple it belongs to.
///
/// A single pincode may appear in many records (multiple localities sharing
/// a postal code); the resolver keeps them separate rather than collapsing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "B::Str: Serialize", deserialize = "B::Str: Deserialize<'de>"))]
pub struct PincodeRecord<B: GeoBackend> {
    pub state: B::Str,
    pub district: B::Str,
    pub city: B::Str,
    /// Always 6 ASCII digits once the record has passed index construction.
    pub pincode: B::Str,
    /// Free-text locality/area label, e.g. "Electronic City".
    pub locality: Option<B::Str>,
}

/// The master location index.
///
/// Built once from raw records and immutable afterwards. Three lookup
/// structures sit next to the record list:
///
/// - `states`: display names sorted on folded key
/// - `districts`: folded state name → sorted district display names
/// - `cities`: (folded state, folded district) → sorted city display names
///
/// `records` is sorted by (pincode, folded city, locality) so that prefix
/// queries reduce to one contiguous slice of the vector.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "B::Str: Serialize", deserialize = "B::Str: Deserialize<'de>"))]
pub struct LocationDb<B: GeoBackend> {
    pub(crate) records: Vec<PincodeRecord<B>>,
    pub(crate) states: Vec<B::Str>,
    pub(crate) districts: HashMap<String, Vec<B::Str>>,
    pub(crate) cities: HashMap<(String, String), Vec<B::Str>>,
    #[serde(default = "default_suggestion_limit")]
    pub(crate) suggestion_limit: usize,
}

/// Simple aggregate statistics for the index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub states: usize,
    pub districts: usize,
    pub cities: usize,
    pub records: usize,
}

impl<B: GeoBackend> PincodeRecord<B> {
    pub fn state(&self) -> &str {
        self.state.as_ref()
    }

    pub fn district(&self) -> &str {
        self.district.as_ref()
    }

    pub fn city(&self) -> &str {
        self.city.as_ref()
    }

    pub fn pincode(&self) -> &str {
        self.pincode.as_ref()
    }

    pub fn locality(&self) -> Option<&str> {
        self.locality.as_ref().map(|s| s.as_ref())
    }
}

impl<B: GeoBackend> NameMatch for PincodeRecord<B> {
    fn name_str(&self) -> &str {
        self.city.as_ref()
    }
}

impl<B: GeoBackend> LocationDb<B> {
    /// Total number of records in the index.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// All records, in pincode order.
    pub fn records(&self) -> &[PincodeRecord<B>] {
        &self.records
    }

    /// The cap applied to partial-prefix suggestion lists.
    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    pub fn set_suggestion_limit(&mut self, limit: usize) {
        self.suggestion_limit = limit.max(1);
    }

    /// Aggregate statistics for the index.
    pub fn stats(&self) -> DbStats {
        DbStats {
            states: self.states.len(),
            districts: self.districts.values().map(Vec::len).sum(),
            cities: self.cities.values().map(Vec::len).sum(),
            records: self.records.len(),
        }
    }
}
