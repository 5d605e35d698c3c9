// crates/pinloc-core/src/model/convert.rs
use crate::error::{LocationError, Result};
use crate::model::domain::{default_suggestion_limit, LocationDb, PincodeRecord};
use crate::raw::RecordsRaw;
use crate::text::fold_key;
use crate::traits::GeoBackend;
use std::collections::{BTreeMap, HashMap};

/// **Standard Converter:** Raw -> indexed.
///
/// Validates every record and builds all three lookup structures in a single
/// pass over the input, then sorts the master record list by
/// (pincode, folded city, locality) so prefix queries are contiguous slices.
///
/// Rejects the whole dataset on the first malformed record: a pincode that
/// is not exactly 6 ASCII digits, or an empty state/district/city name.
/// Skipping bad rows silently would leave the hierarchy indices claiming
/// entries no record can back.
pub fn from_raw<B: GeoBackend>(raw: RecordsRaw) -> Result<LocationDb<B>> {
    // BTreeMaps keyed by folded name give canonical (case-insensitive)
    // ordering for free; the first display spelling seen wins.
    let mut states: BTreeMap<String, B::Str> = BTreeMap::new();
    let mut districts: HashMap<String, BTreeMap<String, B::Str>> = HashMap::new();
    let mut cities: HashMap<(String, String), BTreeMap<String, B::Str>> = HashMap::new();
    let mut records: Vec<PincodeRecord<B>> = Vec::with_capacity(raw.len());

    for (i, r) in raw.into_iter().enumerate() {
        let pincode = r.pincode.trim();
        if pincode.len() != 6 || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LocationError::DatasetLoad(format!(
                "record {i}: pincode {:?} is not a 6-digit code",
                r.pincode
            )));
        }

        let state_key = fold_key(&r.state);
        let district_key = fold_key(&r.district);
        let city_key = fold_key(&r.city);
        if state_key.is_empty() || district_key.is_empty() || city_key.is_empty() {
            return Err(LocationError::DatasetLoad(format!(
                "record {i}: empty state, district or city name"
            )));
        }

        states
            .entry(state_key.clone())
            .or_insert_with(|| B::str_from(r.state.trim()));
        districts
            .entry(state_key.clone())
            .or_default()
            .entry(district_key.clone())
            .or_insert_with(|| B::str_from(r.district.trim()));
        cities
            .entry((state_key, district_key))
            .or_default()
            .entry(city_key)
            .or_insert_with(|| B::str_from(r.city.trim()));

        records.push(PincodeRecord {
            state: B::str_from(r.state.trim()),
            district: B::str_from(r.district.trim()),
            city: B::str_from(r.city.trim()),
            pincode: B::str_from(pincode),
            locality: r
                .locality
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(B::str_from),
        });
    }

    // Deterministic global order: pincode ascending, then city on folded
    // key, then locality (records without a label first). This is what makes
    // "first hit" a stable answer for the one-to-many pincode case.
    records.sort_by(|a, b| {
        a.pincode
            .as_ref()
            .cmp(b.pincode.as_ref())
            .then_with(|| fold_key(a.city.as_ref()).cmp(&fold_key(b.city.as_ref())))
            .then_with(|| {
                let la = a.locality.as_ref().map(|s| s.as_ref());
                let lb = b.locality.as_ref().map(|s| s.as_ref());
                la.cmp(&lb)
            })
    });

    Ok(LocationDb {
        records,
        states: states.into_values().collect(),
        districts: districts
            .into_iter()
            .map(|(k, v)| (k, v.into_values().collect()))
            .collect(),
        cities: cities
            .into_iter()
            .map(|(k, v)| (k, v.into_values().collect()))
            .collect(),
        suggestion_limit: default_suggestion_limit(),
    })
}
