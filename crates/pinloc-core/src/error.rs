// crates/pinloc-core/src/error.rs

use thiserror::Error;

/// Unified error type for the location engine.
///
/// The variants fall into three families:
///
/// - **Dataset loading** ([`NotFound`](LocationError::NotFound),
///   [`DatasetLoad`](LocationError::DatasetLoad), [`Io`](LocationError::Io),
///   [`Json`](LocationError::Json), [`Snapshot`](LocationError::Snapshot),
///   [`Fetch`](LocationError::Fetch)) — surfaced only by
///   [`initialize`](crate::LocationEngine::initialize) and the record
///   sources. Until a load succeeds the engine answers queries with empty
///   results; it never throws these from the read path.
/// - **Query validation** ([`InvalidQuery`](LocationError::InvalidQuery)) —
///   a malformed pincode query. Recoverable: fix the input and call again.
/// - **Selection consistency**
///   ([`InvalidSelection`](LocationError::InvalidSelection)) — a child field
///   was set to a value unreachable from its parent. Indicates a caller bug:
///   option lists should always come from
///   [`districts`](crate::LocationEngine::districts) /
///   [`cities`](crate::LocationEngine::cities).
///
/// "No match" is *not* an error anywhere in the crate — hierarchy and
/// pincode lookups return empty sequences instead.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The dataset file or resource does not exist / is unreachable.
    #[error("{0}")]
    NotFound(String),

    /// The source was readable but its content is unusable
    /// (e.g. a record with a malformed pincode or a missing name).
    #[error("malformed dataset: {0}")]
    DatasetLoad(String),

    /// Underlying I/O failure while reading a source.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The source JSON could not be parsed into flat place records.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A binary snapshot could not be decoded.
    #[error(transparent)]
    Snapshot(#[from] bincode::Error),

    /// HTTP download of a remote dataset failed.
    #[cfg(feature = "fetch")]
    #[error(transparent)]
    Fetch(#[from] reqwest::Error),

    /// A pincode query that is empty, over-length or contains non-digits.
    #[error("invalid pincode query {query:?}: {reason}")]
    InvalidQuery {
        query: String,
        reason: &'static str,
    },

    /// A selection update that would break the parent/child invariant.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LocationError>;
