#![forbid(unsafe_code)]

//! Key coverage reporting across bundles.
//!
//! Answers "which keys of the reference bundle does this translation still
//! miss?" — the number a localization pass actually wants. Lookup itself
//! never needs this; missing keys already degrade to the path text.

use crate::language::Language;

/// Coverage of one bundle against the reference key set.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleCoverage {
    /// The bundle's language name.
    pub name: String,
    /// Reference keys the bundle resolves.
    pub present: usize,
    /// Reference keys the bundle misses, in deterministic order.
    pub missing: Vec<String>,
    /// `present` as a percentage of the reference key set, in `[0, 100]`.
    pub coverage_percent: f64,
}

/// Coverage of a set of bundles against one reference bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageReport {
    /// Leaf key count of the reference bundle.
    pub total_keys: usize,
    /// One entry per checked bundle, in input order.
    pub locales: Vec<LocaleCoverage>,
}

/// Check each of `targets` against the leaf key set of `reference`.
///
/// An empty reference counts every target as fully covered.
#[must_use]
pub fn coverage_report(reference: &Language, targets: &[&Language]) -> CoverageReport {
    let keys = reference.root().leaf_paths();
    let total_keys = keys.len();
    let locales = targets
        .iter()
        .map(|target| {
            let missing: Vec<String> = keys
                .iter()
                .filter(|key| target.resolve(key).is_none())
                .cloned()
                .collect();
            let present = total_keys - missing.len();
            let coverage_percent = if total_keys == 0 {
                100.0
            } else {
                present as f64 * 100.0 / total_keys as f64
            };
            LocaleCoverage {
                name: target.name().to_string(),
                present,
                missing,
                coverage_percent,
            }
        })
        .collect();
    CoverageReport {
        total_keys,
        locales,
    }
}
