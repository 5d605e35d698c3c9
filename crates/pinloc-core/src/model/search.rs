// crates/pinloc-core/src/model/search.rs
use crate::error::{LocationError, Result};
use crate::model::domain::{LocationDb, PincodeRecord};
use crate::text::fold_key;
use crate::traits::GeoBackend;

/// Check a pincode query for shape before touching the index.
///
/// Accepts 1 to 6 ASCII digits. Anything else is the caller's bug to fix,
/// not something to silently truncate.
pub fn validate_query(query: &str) -> Result<()> {
    if query.is_empty() {
        return Err(LocationError::InvalidQuery {
            query: query.to_string(),
            reason: "query must not be empty",
        });
    }
    if query.len() > 6 {
        return Err(LocationError::InvalidQuery {
            query: query.to_string(),
            reason: "query is longer than 6 digits",
        });
    }
    if !query.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LocationError::InvalidQuery {
            query: query.to_string(),
            reason: "query contains non-digit characters",
        });
    }
    Ok(())
}

impl<B: GeoBackend> LocationDb<B> {
    /// All state names, lexicographically sorted (on folded key).
    pub fn states(&self) -> &[B::Str] {
        &self.states
    }

    /// Districts of `state`, sorted. Empty slice if `state` is unknown or
    /// empty — never an error.
    pub fn districts(&self, state: &str) -> &[B::Str] {
        self.districts
            .get(&fold_key(state))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cities of `(state, district)`, sorted. Empty slice if either key is
    /// unrecognized.
    pub fn cities(&self, state: &str, district: &str) -> &[B::Str] {
        self.cities
            .get(&(fold_key(state), fold_key(district)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a full or partial pincode to ranked location suggestions.
    ///
    /// - 1–5 digits: all records whose code starts with `query`, pincode
    ///   ascending, capped at [`suggestion_limit`](Self::suggestion_limit).
    /// - 6 digits: every record sharing that exact code (one code, many
    ///   localities), ordered by city then locality so the first hit is a
    ///   deterministic "best single suggestion".
    /// - No match: empty Vec. Unknown pincodes are a normal outcome; the
    ///   caller leaves dependent fields untouched.
    ///
    /// Fails fast with [`LocationError::InvalidQuery`] on empty, over-length
    /// or non-digit input.
    pub fn search(&self, query: &str) -> Result<Vec<&PincodeRecord<B>>> {
        self.search_limited(query, self.suggestion_limit)
    }

    /// [`search`](Self::search) with an explicit cap for partial queries.
    pub fn search_limited(&self, query: &str, limit: usize) -> Result<Vec<&PincodeRecord<B>>> {
        validate_query(query)?;

        let hits = self.prefix_range(query);
        if query.len() == 6 {
            // Exact code: the one-to-many case is returned whole.
            Ok(hits.iter().collect())
        } else {
            Ok(hits.iter().take(limit).collect())
        }
    }

    /// The contiguous run of records whose pincode starts with `prefix`.
    ///
    /// Relies on `records` being sorted by pincode: all matches sit between
    /// two binary-searched partition points.
    fn prefix_range(&self, prefix: &str) -> &[PincodeRecord<B>] {
        let start = self
            .records
            .partition_point(|r| r.pincode.as_ref() < prefix);
        let len = self.records[start..]
            .partition_point(|r| r.pincode.as_ref().starts_with(prefix));
        &self.records[start..start + len]
    }
}
