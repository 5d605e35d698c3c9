// crates/pinloc-core/src/selection.rs

//! The in-progress address selection and its consistency rules.
//!
//! Forms bind one [`SelectionCoordinator`] per address being edited. The
//! coordinator is the single write path for the four fields and guarantees
//! that no observable combination is ever inconsistent: changing an
//! upstream field clears everything downstream, child values are validated
//! against the hierarchy, and the reverse pincode path fills all four
//! fields in one step.

use crate::engine::LocationEngine;
use crate::error::{LocationError, Result};
use crate::model::PincodeRecord;
use crate::text::equals_folded;
use crate::traits::GeoBackend;

/// Snapshot of an in-progress address selection.
///
/// Values always carry the dataset's display casing: validated setters
/// canonicalize case-insensitively against the hierarchy.
#[derive(Clone, Debug)]
pub struct Selection<B: GeoBackend> {
    state: Option<B::Str>,
    district: Option<B::Str>,
    city: Option<B::Str>,
    pincode: Option<B::Str>,
}

impl<B: GeoBackend> Default for Selection<B> {
    fn default() -> Self {
        Self {
            state: None,
            district: None,
            city: None,
            pincode: None,
        }
    }
}

impl<B: GeoBackend> Selection<B> {
    pub fn state(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.as_ref())
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_ref().map(|s| s.as_ref())
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_ref().map(|s| s.as_ref())
    }

    pub fn pincode(&self) -> Option<&str> {
        self.pincode.as_ref().map(|s| s.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    /// Which of the five consistency levels this selection sits at.
    pub fn stage(&self) -> SelectionStage {
        if self.pincode.is_some() {
            SelectionStage::Pincode
        } else if self.city.is_some() {
            SelectionStage::City
        } else if self.district.is_some() {
            SelectionStage::District
        } else if self.state.is_some() {
            SelectionStage::State
        } else {
            SelectionStage::Empty
        }
    }
}

/// The five consistency levels a selection moves through.
///
/// Ordered: every mutating operation either steps the selection down to the
/// level of the field it changed, or jumps straight to `Pincode` via the
/// reverse path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SelectionStage {
    Empty,
    State,
    District,
    City,
    Pincode,
}

/// Handle returned by [`SelectionCoordinator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer<'e, B> = Box<dyn FnMut(&Selection<B>) + 'e>;

/// Reconciles forward (cascading) and reverse (pincode) resolution against
/// one in-progress selection.
///
/// Exactly one caller mutates a coordinator; `&mut self` on every setter
/// enforces that at compile time. Observers run synchronously after each
/// mutation, receiving the new selection.
///
/// ```rust
/// use pinloc_core::prelude::*;
///
/// let records = vec![
///     PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
/// ];
/// let engine = DefaultEngine::new(MemorySource::new(records));
/// engine.initialize()?;
///
/// let mut coordinator = engine.coordinator();
/// coordinator.set_state("Karnataka")?;
/// coordinator.set_district("Bengaluru Urban")?;
/// coordinator.set_city("Bengaluru")?;
/// assert_eq!(coordinator.selection().city(), Some("Bengaluru"));
/// # Ok::<(), LocationError>(())
/// ```
pub struct SelectionCoordinator<'e, B: GeoBackend> {
    engine: &'e LocationEngine<B>,
    selection: Selection<B>,
    observers: Vec<(SubscriptionId, Observer<'e, B>)>,
    next_id: u64,
}

impl<'e, B: GeoBackend> SelectionCoordinator<'e, B> {
    pub(crate) fn new(engine: &'e LocationEngine<B>) -> Self {
        Self {
            engine,
            selection: Selection::default(),
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection<B> {
        &self.selection
    }

    /// Shorthand for `selection().stage()`.
    pub fn stage(&self) -> SelectionStage {
        self.selection.stage()
    }

    /// Set the state field; district, city and pincode are cleared since
    /// they are no longer guaranteed reachable.
    ///
    /// The value is not validated against the hierarchy (an unknown state
    /// simply yields empty district lists downstream), but it is
    /// canonicalized to the dataset's casing when it does match.
    pub fn set_state(&mut self, state: &str) -> Result<()> {
        let state = state.trim();
        if state.is_empty() {
            return Err(LocationError::InvalidSelection(
                "state must not be empty; use clear() to reset".into(),
            ));
        }

        let canonical = self
            .engine
            .states()
            .iter()
            .find(|s| equals_folded(s.as_ref(), state))
            .cloned()
            .unwrap_or_else(|| B::str_from(state));

        self.selection.state = Some(canonical);
        self.selection.district = None;
        self.selection.city = None;
        self.selection.pincode = None;
        self.notify();
        Ok(())
    }

    /// Set the district field; city and pincode are cleared.
    ///
    /// Valid only if a state is set and `district` is one of its districts.
    pub fn set_district(&mut self, district: &str) -> Result<()> {
        let state = self.selection.state.clone().ok_or_else(|| {
            LocationError::InvalidSelection("cannot set district: no state selected".into())
        })?;

        let canonical = self
            .engine
            .districts(state.as_ref())
            .iter()
            .find(|d| equals_folded(d.as_ref(), district))
            .cloned()
            .ok_or_else(|| {
                LocationError::InvalidSelection(format!(
                    "district {district:?} is not part of state {:?}",
                    state.as_ref()
                ))
            })?;

        self.selection.district = Some(canonical);
        self.selection.city = None;
        self.selection.pincode = None;
        self.notify();
        Ok(())
    }

    /// Set the city field; pincode is cleared.
    ///
    /// Valid only if state and district are set and `city` belongs to that
    /// pair.
    pub fn set_city(&mut self, city: &str) -> Result<()> {
        let (state, district) = match (&self.selection.state, &self.selection.district) {
            (Some(s), Some(d)) => (s.clone(), d.clone()),
            _ => {
                return Err(LocationError::InvalidSelection(
                    "cannot set city: state and district must be selected first".into(),
                ))
            }
        };

        let canonical = self
            .engine
            .cities(state.as_ref(), district.as_ref())
            .iter()
            .find(|c| equals_folded(c.as_ref(), city))
            .cloned()
            .ok_or_else(|| {
                LocationError::InvalidSelection(format!(
                    "city {city:?} is not part of {:?} / {:?}",
                    state.as_ref(),
                    district.as_ref()
                ))
            })?;

        self.selection.city = Some(canonical);
        self.selection.pincode = None;
        self.notify();
        Ok(())
    }

    /// The reverse path: adopt a record chosen from a pincode search.
    ///
    /// Sets state, district, city and pincode together, atomically from the
    /// observers' point of view (one notification, after all four fields are
    /// in place). No cascading validation: a record out of the index is
    /// consistent by construction.
    pub fn set_from_pincode(&mut self, record: &PincodeRecord<B>) {
        self.selection.state = Some(record.state.clone());
        self.selection.district = Some(record.district.clone());
        self.selection.city = Some(record.city.clone());
        self.selection.pincode = Some(record.pincode.clone());
        self.notify();
    }

    /// Reset all four fields.
    pub fn clear(&mut self) {
        self.selection = Selection::default();
        self.notify();
    }

    /// Register an observer; it fires after every mutating call.
    pub fn subscribe(&mut self, observer: impl FnMut(&Selection<B>) + 'e) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(o, _)| *o != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DefaultEngine;
    use crate::loader::MemorySource;
    use crate::raw::PlaceRecordRaw;
    use std::cell::RefCell;

    fn engine() -> DefaultEngine {
        let engine = DefaultEngine::new(MemorySource::new(vec![
            PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560001"),
            PlaceRecordRaw::new("Karnataka", "Bengaluru Urban", "Bengaluru", "560100")
                .with_locality("Electronic City"),
            PlaceRecordRaw::new("Karnataka", "Mysuru", "Mysuru", "570001"),
            PlaceRecordRaw::new("Maharashtra", "Pune", "Pune", "411001"),
        ]));
        engine.initialize().unwrap();
        engine
    }

    #[test]
    fn forward_cascade_steps_through_stages() {
        let engine = engine();
        let mut c = engine.coordinator();
        assert_eq!(c.stage(), SelectionStage::Empty);

        c.set_state("Karnataka").unwrap();
        assert_eq!(c.stage(), SelectionStage::State);
        c.set_district("Bengaluru Urban").unwrap();
        assert_eq!(c.stage(), SelectionStage::District);
        c.set_city("Bengaluru").unwrap();
        assert_eq!(c.stage(), SelectionStage::City);

        let selection = c.selection();
        assert_eq!(selection.state(), Some("Karnataka"));
        assert_eq!(selection.district(), Some("Bengaluru Urban"));
        assert_eq!(selection.city(), Some("Bengaluru"));
        assert_eq!(selection.pincode(), None);
    }

    #[test]
    fn setters_canonicalize_casing() {
        let engine = engine();
        let mut c = engine.coordinator();
        c.set_state("karnataka").unwrap();
        c.set_district("BENGALURU URBAN").unwrap();
        assert_eq!(c.selection().state(), Some("Karnataka"));
        assert_eq!(c.selection().district(), Some("Bengaluru Urban"));
    }

    #[test]
    fn district_requires_matching_state() {
        let engine = engine();
        let mut c = engine.coordinator();

        let err = c.set_district("Pune").unwrap_err();
        assert!(matches!(err, LocationError::InvalidSelection(_)));

        c.set_state("Karnataka").unwrap();
        let err = c.set_district("Pune").unwrap_err();
        assert!(matches!(err, LocationError::InvalidSelection(_)));
        // Failed attempts leave the selection untouched.
        assert_eq!(c.stage(), SelectionStage::State);
    }

    #[test]
    fn city_requires_state_and_district() {
        let engine = engine();
        let mut c = engine.coordinator();
        c.set_state("Karnataka").unwrap();
        assert!(c.set_city("Bengaluru").is_err());

        c.set_district("Mysuru").unwrap();
        let err = c.set_city("Bengaluru").unwrap_err();
        assert!(matches!(err, LocationError::InvalidSelection(_)));
        c.set_city("Mysuru").unwrap();
        assert_eq!(c.selection().city(), Some("Mysuru"));
    }

    #[test]
    fn upstream_change_clears_downstream() {
        let engine = engine();
        let mut c = engine.coordinator();
        let hits = engine.search("560100").unwrap();
        c.set_from_pincode(hits[0]);
        assert_eq!(c.stage(), SelectionStage::Pincode);

        c.set_state("Maharashtra").unwrap();
        let s = c.selection();
        assert_eq!(s.state(), Some("Maharashtra"));
        assert_eq!(s.district(), None);
        assert_eq!(s.city(), None);
        assert_eq!(s.pincode(), None);
    }

    #[test]
    fn reverse_path_round_trips_search_hits() {
        let engine = engine();
        let mut c = engine.coordinator();
        let hits = engine.search("560100").unwrap();
        assert_eq!(hits.len(), 1);
        let record = hits[0];
        c.set_from_pincode(record);

        let s = c.selection();
        assert_eq!(s.state(), Some(record.state()));
        assert_eq!(s.district(), Some(record.district()));
        assert_eq!(s.city(), Some(record.city()));
        assert_eq!(s.pincode(), Some("560100"));
    }

    #[test]
    fn unknown_state_is_accepted_but_leads_nowhere() {
        let engine = engine();
        let mut c = engine.coordinator();
        c.set_state("Atlantis").unwrap();
        assert!(c.set_district("Bengaluru Urban").is_err());
    }

    #[test]
    fn empty_setter_input_is_rejected() {
        let engine = engine();
        let mut c = engine.coordinator();
        assert!(c.set_state("  ").is_err());
        assert_eq!(c.stage(), SelectionStage::Empty);
    }

    #[test]
    fn observers_fire_per_mutation_and_can_unsubscribe() {
        let engine = engine();
        let seen: RefCell<Vec<SelectionStage>> = RefCell::new(Vec::new());
        let mut c = engine.coordinator();
        let id = c.subscribe(|s| seen.borrow_mut().push(s.stage()));

        c.set_state("Karnataka").unwrap();
        c.set_district("Mysuru").unwrap();
        let hits = engine.search("560001").unwrap();
        c.set_from_pincode(hits[0]);
        c.clear();

        assert!(c.unsubscribe(id));
        assert!(!c.unsubscribe(id));
        c.set_state("Karnataka").unwrap();

        assert_eq!(
            *seen.borrow(),
            [
                SelectionStage::State,
                SelectionStage::District,
                SelectionStage::Pincode,
                SelectionStage::Empty,
            ]
        );
    }
}
