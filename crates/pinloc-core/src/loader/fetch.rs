// crates/pinloc-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::engine::RecordSource;
use crate::error::Result;
use crate::raw::RecordsRaw;

/// Downloads a JSON array of flat place records over HTTP.
///
/// Blocking client; meant for CLI tooling and one-shot setup, not for
/// request paths. See [`DATA_REPO_URL`](super::DATA_REPO_URL) for the
/// public dataset catalog.
pub struct RemoteJsonSource {
    url: String,
}

impl RemoteJsonSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RecordSource for RemoteJsonSource {
    fn fetch(&self) -> Result<RecordsRaw> {
        let body = reqwest::blocking::get(&self.url)?
            .error_for_status()?
            .text()?;
        let records: RecordsRaw = serde_json::from_str(&body)?;
        Ok(records)
    }
}
