//! Visible rendering of catalog characters.
//!
//! Presentation only: nothing here feeds back into
//! [`CleanupResult::cleaned_text`](crate::CleanupResult).

use crate::catalog::{self, CatalogEntry};

/// A run of plain text or a single catalog character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text containing no catalog characters.
    Text(&'a str),
    /// One catalog character.
    Marker(&'static CatalogEntry),
}

/// Splits text into plain runs and catalog markers, in input order.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut run_start = 0;

    for (idx, c) in text.char_indices() {
        if let Some(entry) = catalog::lookup(c) {
            if run_start < idx {
                segments.push(Segment::Text(&text[run_start..idx]));
            }
            segments.push(Segment::Marker(entry));
            run_start = idx + c.len_utf8();
        }
    }

    if run_start < text.len() {
        segments.push(Segment::Text(&text[run_start..]));
    }

    segments
}

/// Renders catalog characters as `[ABBR]` markers.
///
/// # Example
///
/// ```
/// let shown = uncloak::visualize::visualize("a\u{200B}b\u{00A0}c");
/// assert_eq!(shown, "a[ZWSP]b[NBSP]c");
/// ```
pub fn visualize(text: &str) -> String {
    visualize_with(text, |entry| format!("[{}]", entry.abbreviation))
}

/// Renders catalog characters with a custom marker.
pub fn visualize_with<F>(text: &str, mut marker: F) -> String
where
    F: FnMut(&CatalogEntry) -> String,
{
    let mut out = String::with_capacity(text.len());
    for segment in segments(text) {
        match segment {
            Segment::Text(run) => out.push_str(run),
            Segment::Marker(entry) => out.push_str(&marker(entry)),
        }
    }
    out
}
