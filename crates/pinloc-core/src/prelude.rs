//! pinloc prelude: bring common types and traits into scope for examples.

#![allow(unused_imports)]

pub use crate::engine::{DefaultEngine, LocationEngine, RecordSource};
pub use crate::error::{LocationError, Result};
#[cfg(feature = "json")]
pub use crate::loader::JsonFileSource;
pub use crate::loader::MemorySource;
pub use crate::model::{DbStats, LocationDb, PincodeRecord, DEFAULT_SUGGESTION_LIMIT};
pub use crate::raw::{PlaceRecordRaw, RecordsRaw};
pub use crate::selection::{Selection, SelectionCoordinator, SelectionStage, SubscriptionId};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, GeoBackend, NameMatch, StandardBackend};
