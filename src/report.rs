//! Cleanup results.

use crate::catalog::CatalogEntry;
use serde::Serialize;

/// Occurrence statistics for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// The matched code point.
    pub codepoint: char,
    /// Catalog label, e.g. "Em Dash".
    pub label: &'static str,
    /// `U+XXXX`, uppercase, zero-padded to 4 digits.
    pub hex_code: String,
    /// Number of occurrences in the input (always > 0).
    pub occurrence_count: usize,
}

impl MatchRecord {
    pub(crate) fn new(entry: &CatalogEntry, occurrence_count: usize) -> Self {
        Self {
            codepoint: entry.codepoint,
            label: entry.label,
            hex_code: entry.hex_code(),
            occurrence_count,
        }
    }
}

/// Output of a single cleaning call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CleanupResult {
    /// Text after every pipeline stage.
    pub cleaned_text: String,
    /// One record per catalog entry found, in catalog order.
    pub matches: Vec<MatchRecord>,
    /// Sum of all occurrence counts.
    ///
    /// Only catalog substitutions are counted; characters dropped by the
    /// option-driven filters are not.
    pub total_removed: usize,
}

impl CleanupResult {
    /// Returns true if no catalog character was found.
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the record for a code point, if it matched.
    pub fn match_for(&self, codepoint: char) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.codepoint == codepoint)
    }
}

/// Builds match records from per-entry counters indexed by catalog position.
pub(crate) fn collect_matches(entries: &[CatalogEntry], counts: &[usize]) -> Vec<MatchRecord> {
    entries
        .iter()
        .zip(counts)
        .filter(|(_, count)| **count > 0)
        .map(|(entry, &count)| MatchRecord::new(entry, count))
        .collect()
}
