// crates/pinloc-core/src/lib.rs

//! # pinloc-core
//!
//! A hierarchical postal location index (state → district → city → pincode)
//! with forward cascading lookups, reverse resolution from a full or partial
//! pincode, and a selection coordinator that keeps an in-progress address
//! consistent across both paths.
//!
//! The dataset is supplied once through a [`RecordSource`] and is immutable
//! afterwards; see [`LocationEngine`] for the lifecycle.

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod raw;
pub mod selection;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::engine::{DefaultEngine, LocationEngine, RecordSource};
pub use crate::error::{LocationError, Result};
pub use crate::model::{DbStats, LocationDb, PincodeRecord, DEFAULT_SUGGESTION_LIMIT};
pub use crate::raw::{PlaceRecordRaw, RecordsRaw};
pub use crate::selection::{Selection, SelectionCoordinator, SelectionStage, SubscriptionId};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch, StandardBackend};
