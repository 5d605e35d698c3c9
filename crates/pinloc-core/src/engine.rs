// crates/pinloc-core/src/engine.rs

//! The engine facade: dataset lifecycle plus the query surface.
//!
//! A [`LocationEngine`] owns a [`RecordSource`] and lazily builds the
//! [`LocationDb`] index from it, exactly once. Until [`initialize`]
//! succeeds the engine is in an explicit "not yet loaded" state: every
//! read query answers with an empty result instead of failing.
//!
//! [`initialize`]: LocationEngine::initialize

use crate::error::Result;
use crate::model::{convert, search, DbStats, LocationDb, PincodeRecord, DEFAULT_SUGGESTION_LIMIT};
use crate::raw::RecordsRaw;
use crate::selection::SelectionCoordinator;
use crate::traits::{DefaultBackend, GeoBackend};
use once_cell::sync::OnceCell;

/// Anything that can yield the flat record sequence the index is built from.
///
/// The loading mechanism (file read, network fetch, bundled asset) is the
/// source's business; the engine only needs the records. Closures work too:
///
/// ```rust
/// use pinloc_core::{LocationEngine, DefaultBackend, RecordsRaw};
///
/// let engine = LocationEngine::<DefaultBackend>::new(|| Ok(RecordsRaw::new()));
/// assert!(engine.initialize().is_ok());
/// ```
pub trait RecordSource {
    fn fetch(&self) -> Result<RecordsRaw>;
}

impl<F> RecordSource for F
where
    F: Fn() -> Result<RecordsRaw>,
{
    fn fetch(&self) -> Result<RecordsRaw> {
        self()
    }
}

/// Process-local, read-only location resolution engine.
///
/// Construction is cheap; the expensive part is [`initialize`], which pulls
/// the records from the source and builds the index. Initialization is
/// idempotent: the second and later calls are no-ops returning `Ok(())`,
/// backed by a `OnceCell` (a failed attempt leaves the cell empty, so the
/// caller may retry).
///
/// [`initialize`]: LocationEngine::initialize
pub struct LocationEngine<B: GeoBackend = DefaultBackend> {
    source: Box<dyn RecordSource>,
    db: OnceCell<LocationDb<B>>,
    suggestion_limit: usize,
}

/// Convenient alias for the default backend.
pub type DefaultEngine = LocationEngine<DefaultBackend>;

impl<B: GeoBackend> LocationEngine<B> {
    pub fn new(source: impl RecordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            db: OnceCell::new(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Override the cap on partial-pincode suggestion lists.
    ///
    /// Takes effect at index build time, so call it before
    /// [`initialize`](Self::initialize).
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit.max(1);
        self
    }

    /// Wrap an already-built index, e.g. one restored from a snapshot.
    ///
    /// The engine starts out initialized; [`initialize`](Self::initialize)
    /// becomes a no-op.
    pub fn preloaded(db: LocationDb<B>) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(db);
        Self {
            source: Box::new(|| Ok(RecordsRaw::new())),
            db: cell,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Fetch the records and build the index, once.
    ///
    /// Fails with a dataset-load error if the source is unreachable or a
    /// record is malformed; the engine then stays uninitialized and the
    /// call may be retried. On success every later call returns `Ok(())`
    /// without rebuilding anything.
    pub fn initialize(&self) -> Result<()> {
        self.db
            .get_or_try_init(|| {
                let raw = self.source.fetch()?;
                let mut db = convert::from_raw::<B>(raw)?;
                db.set_suggestion_limit(self.suggestion_limit);
                Ok(db)
            })
            .map(|_| ())
    }

    /// Whether a successful [`initialize`](Self::initialize) has completed.
    pub fn is_initialized(&self) -> bool {
        self.db.get().is_some()
    }

    /// Direct access to the built index, if any.
    pub fn db(&self) -> Option<&LocationDb<B>> {
        self.db.get()
    }

    /// All state names, sorted. Empty before initialization.
    pub fn states(&self) -> &[B::Str] {
        self.db.get().map(|db| db.states()).unwrap_or(&[])
    }

    /// Districts of `state`, sorted. Empty for unknown states or before
    /// initialization.
    pub fn districts(&self, state: &str) -> &[B::Str] {
        self.db.get().map(|db| db.districts(state)).unwrap_or(&[])
    }

    /// Cities of `(state, district)`, sorted. Empty on any unknown key or
    /// before initialization.
    pub fn cities(&self, state: &str, district: &str) -> &[B::Str] {
        self.db
            .get()
            .map(|db| db.cities(state, district))
            .unwrap_or(&[])
    }

    /// Full or partial pincode lookup; see [`LocationDb::search`].
    ///
    /// Query validation applies even before initialization — a malformed
    /// query is a caller bug either way. A well-formed query against an
    /// uninitialized engine returns the empty list.
    pub fn search(&self, query: &str) -> Result<Vec<&PincodeRecord<B>>> {
        match self.db.get() {
            Some(db) => db.search(query),
            None => {
                search::validate_query(query)?;
                Ok(Vec::new())
            }
        }
    }

    /// Index statistics; all zeros before initialization.
    pub fn stats(&self) -> DbStats {
        self.db.get().map(|db| db.stats()).unwrap_or(DbStats {
            states: 0,
            districts: 0,
            cities: 0,
            records: 0,
        })
    }

    /// Start a fresh address selection bound to this engine.
    pub fn coordinator(&self) -> SelectionCoordinator<'_, B> {
        SelectionCoordinator::new(self)
    }
}
