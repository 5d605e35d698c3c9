// crates/pinloc-core/src/text.rs

//! Text normalization for index keys and lookups.
//!
//! All name matching in this crate is case-insensitive and
//! accent/diacritic-insensitive. Display casing is whatever the source
//! dataset provides; folded keys are used only for indexing and comparison.

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1. Transliterate Unicode to ASCII (e.g. `Delhī` -> `Delhi`)
/// 2. Normalize to lowercase
/// 3. Trim surrounding whitespace
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```rust
/// use pinloc_core::text::fold_key;
///
/// assert_eq!(fold_key("Bengaluru"), "bengaluru");
/// assert_eq!(fold_key("  PONDICHERRY "), "pondicherry");
/// assert_eq!(fold_key("Delhī"), "delhi");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// # Examples
///
/// ```rust
/// use pinloc_core::text::equals_folded;
///
/// assert!(equals_folded("Karnataka", "KARNATAKA"));
/// assert!(equals_folded("Delhī", "delhi"));
/// assert!(!equals_folded("Mysuru", "Mandya"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
