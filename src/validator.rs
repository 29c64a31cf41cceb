//! Reference Validator
//!
//! Only well-formed citations may reach the selector. A citation is
//! malformed when it mentions `doi.org` without the canonical
//! `https://doi.org/` prefix, or when it carries plain `http://` links and
//! no secure one.
//!
//! Selection falls back in two levels: theme candidates, then the whole
//! valid table, then the first raw entry. The last level should never be
//! reached with the shipped catalog and is logged as an error when it is.

use crate::catalog::ContentCatalog;
use crate::selector::select_by_hash;
use crate::types::ReferenceEntry;
use tracing::{error, warn};

/// Check DOI and URL formatting of one citation
pub fn is_valid_reference(entry: &ReferenceEntry) -> bool {
    let text = &entry.text;
    let lower = text.to_lowercase();

    if lower.contains("doi.org") && !text.contains("https://doi.org/") {
        return false;
    }

    let has_link = lower.contains("http://") || lower.contains("https://");
    if has_link && text.contains("http://") && !text.contains("https://") {
        return false;
    }

    true
}

/// Keep only valid entries, preserving order
pub fn filter_valid(entries: &[ReferenceEntry]) -> Vec<ReferenceEntry> {
    entries
        .iter()
        .filter(|e| is_valid_reference(e))
        .cloned()
        .collect()
}

/// All valid references of the catalog, in display order
pub fn valid_references(catalog: &ContentCatalog) -> Vec<ReferenceEntry> {
    filter_valid(catalog.references())
}

/// Pick a valid reference for `input` from `candidate_keys`.
///
/// Unknown keys are dropped silently. Malformed citations are dropped with
/// a data-quality warning. If nothing usable remains the whole valid table
/// is used instead.
///
/// Returns `None` only when the catalog has no references at all.
pub fn select_valid_reference_by_hash(
    catalog: &ContentCatalog,
    input: &str,
    candidate_keys: &[String],
) -> Option<ReferenceEntry> {
    let candidates: Vec<ReferenceEntry> = catalog
        .references_by_keys(candidate_keys)
        .into_iter()
        .filter(|entry| {
            let ok = is_valid_reference(entry);
            if !ok {
                warn!(key = %entry.key, "dropping malformed citation from candidate pool");
            }
            ok
        })
        .cloned()
        .collect();

    if let Some(picked) = select_by_hash(input, &candidates) {
        return Some(picked.clone());
    }

    let valid = valid_references(catalog);
    if let Some(picked) = select_by_hash(input, &valid) {
        return Some(picked.clone());
    }

    let first = catalog.references().first().cloned();
    if let Some(entry) = &first {
        error!(
            key = %entry.key,
            "no valid reference in catalog; serving first raw entry"
        );
    }
    first
}
