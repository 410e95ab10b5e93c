//! # Character Catalog
//!
//! The fixed, ordered table of code points the cleaner detects. Order is
//! significant: it is the order in which [`MatchRecord`](crate::MatchRecord)s
//! are reported.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// What happens to a catalog character when it is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementPolicy {
    /// Replace with ASCII `-`.
    ToHyphen,
    /// Replace with ASCII `'`.
    ToSingleQuote,
    /// Replace with ASCII `"`.
    ToDoubleQuote,
    /// Replace with ASCII `...`.
    ToEllipsis,
    /// Replace with a regular space.
    ToSpace,
    /// Remove the character.
    Delete,
}

impl ReplacementPolicy {
    /// Returns the text that replaces a matched character.
    pub const fn replacement(self) -> &'static str {
        match self {
            ReplacementPolicy::ToHyphen => "-",
            ReplacementPolicy::ToSingleQuote => "'",
            ReplacementPolicy::ToDoubleQuote => "\"",
            ReplacementPolicy::ToEllipsis => "...",
            ReplacementPolicy::ToSpace => " ",
            ReplacementPolicy::Delete => "",
        }
    }
}

/// Coarse grouping of catalog entries, used for listings and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterCategory {
    /// Zero-width marks and typographic spaces.
    Invisible,
    /// Bidirectional control marks.
    Directional,
    /// Typographic punctuation with an ASCII equivalent.
    Typographic,
}

impl std::fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterCategory::Invisible => write!(f, "invisible"),
            CharacterCategory::Directional => write!(f, "directional"),
            CharacterCategory::Typographic => write!(f, "typographic"),
        }
    }
}

/// A single registered code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// The Unicode scalar value.
    pub codepoint: char,
    /// Human-readable name shown in reports.
    pub label: &'static str,
    /// Short form used by the visualizer, e.g. `ZWSP`.
    pub abbreviation: &'static str,
    /// How the character is rewritten.
    pub policy: ReplacementPolicy,
    /// Which family the character belongs to.
    pub category: CharacterCategory,
}

impl CatalogEntry {
    const fn new(
        codepoint: char,
        label: &'static str,
        abbreviation: &'static str,
        policy: ReplacementPolicy,
        category: CharacterCategory,
    ) -> Self {
        Self {
            codepoint,
            label,
            abbreviation,
            policy,
            category,
        }
    }

    /// Formats the code point as `U+XXXX` (uppercase, at least 4 hex digits).
    pub fn hex_code(&self) -> String {
        format!("U+{:04X}", self.codepoint as u32)
    }

    /// Returns the replacement text for this entry.
    pub fn replacement(&self) -> &'static str {
        self.policy.replacement()
    }
}

use CharacterCategory::{Directional, Invisible, Typographic};
use ReplacementPolicy::{Delete, ToDoubleQuote, ToEllipsis, ToHyphen, ToSingleQuote, ToSpace};

/// Catalog table, in report order.
const CATALOG: &[CatalogEntry] = &[
    // Zero-width and spacing marks
    CatalogEntry::new('\u{200B}', "Zero-Width Space", "ZWSP", Delete, Invisible),
    CatalogEntry::new('\u{200C}', "Zero-Width Non-Joiner", "ZWNJ", Delete, Invisible),
    CatalogEntry::new('\u{200D}', "Zero-Width Joiner", "ZWJ", Delete, Invisible),
    CatalogEntry::new('\u{FEFF}', "Zero-Width No-Break Space (BOM)", "BOM", Delete, Invisible),
    CatalogEntry::new('\u{2060}', "Word Joiner", "WJ", Delete, Invisible),
    CatalogEntry::new('\u{00AD}', "Soft Hyphen", "SHY", Delete, Invisible),
    CatalogEntry::new('\u{202F}', "Narrow No-Break Space", "NNBSP", ToSpace, Invisible),
    CatalogEntry::new('\u{00A0}', "Non-Breaking Space", "NBSP", ToSpace, Invisible),
    CatalogEntry::new('\u{2003}', "Em Space", "EMSP", ToSpace, Invisible),
    CatalogEntry::new('\u{2002}', "En Space", "ENSP", ToSpace, Invisible),
    CatalogEntry::new('\u{2009}', "Thin Space", "THSP", ToSpace, Invisible),
    CatalogEntry::new('\u{200A}', "Hair Space", "HSP", ToSpace, Invisible),
    CatalogEntry::new('\u{180E}', "Mongolian Vowel Separator", "MVS", Delete, Invisible),
    CatalogEntry::new('\u{2028}', "Line Separator", "LSEP", Delete, Invisible),
    CatalogEntry::new('\u{2029}', "Paragraph Separator", "PSEP", Delete, Invisible),
    // Bidirectional controls
    CatalogEntry::new('\u{061C}', "Arabic Letter Mark", "ALM", Delete, Directional),
    CatalogEntry::new('\u{200E}', "Left-to-Right Mark", "LRM", Delete, Directional),
    CatalogEntry::new('\u{200F}', "Right-to-Left Mark", "RLM", Delete, Directional),
    CatalogEntry::new('\u{202A}', "Left-to-Right Embedding", "LRE", Delete, Directional),
    CatalogEntry::new('\u{202B}', "Right-to-Left Embedding", "RLE", Delete, Directional),
    CatalogEntry::new('\u{202C}', "Pop Directional Formatting", "PDF", Delete, Directional),
    CatalogEntry::new('\u{202D}', "Left-to-Right Override", "LRO", Delete, Directional),
    CatalogEntry::new('\u{202E}', "Right-to-Left Override", "RLO", Delete, Directional),
    CatalogEntry::new('\u{2066}', "Left-to-Right Isolate", "LRI", Delete, Directional),
    CatalogEntry::new('\u{2067}', "Right-to-Left Isolate", "RLI", Delete, Directional),
    CatalogEntry::new('\u{2068}', "First Strong Isolate", "FSI", Delete, Directional),
    CatalogEntry::new('\u{2069}', "Pop Directional Isolate", "PDI", Delete, Directional),
    // Typographic punctuation
    CatalogEntry::new('\u{2014}', "Em Dash", "EMDASH", ToHyphen, Typographic),
    CatalogEntry::new('\u{2013}', "En Dash", "ENDASH", ToHyphen, Typographic),
    CatalogEntry::new(
        '\u{2018}',
        "Left Single Quotation Mark",
        "LSQUO",
        ToSingleQuote,
        Typographic,
    ),
    CatalogEntry::new(
        '\u{2019}',
        "Right Single Quotation Mark",
        "RSQUO",
        ToSingleQuote,
        Typographic,
    ),
    CatalogEntry::new('\u{2032}', "Prime", "PRIME", ToSingleQuote, Typographic),
    CatalogEntry::new('\u{2035}', "Reversed Prime", "RPRIME", ToSingleQuote, Typographic),
    CatalogEntry::new(
        '\u{201C}',
        "Left Double Quotation Mark",
        "LDQUO",
        ToDoubleQuote,
        Typographic,
    ),
    CatalogEntry::new(
        '\u{201D}',
        "Right Double Quotation Mark",
        "RDQUO",
        ToDoubleQuote,
        Typographic,
    ),
    CatalogEntry::new(
        '\u{00AB}',
        "Left-Pointing Double Angle Quotation Mark",
        "LAQUO",
        ToDoubleQuote,
        Typographic,
    ),
    CatalogEntry::new(
        '\u{00BB}',
        "Right-Pointing Double Angle Quotation Mark",
        "RAQUO",
        ToDoubleQuote,
        Typographic,
    ),
    CatalogEntry::new(
        '\u{201E}',
        "Double Low-9 Quotation Mark",
        "BDQUO",
        ToDoubleQuote,
        Typographic,
    ),
    CatalogEntry::new('\u{2033}', "Double Prime", "DPRIME", ToDoubleQuote, Typographic),
    CatalogEntry::new('\u{2036}', "Reversed Double Prime", "RDPRIME", ToDoubleQuote, Typographic),
    CatalogEntry::new('\u{2026}', "Horizontal Ellipsis", "HELLIP", ToEllipsis, Typographic),
];

// Code point -> position in CATALOG
static INDEX: LazyLock<HashMap<char, usize>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .enumerate()
        .map(|(pos, entry)| (entry.codepoint, pos))
        .collect()
});

/// Returns the full catalog in report order.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Looks up a character in the catalog.
pub fn lookup(c: char) -> Option<&'static CatalogEntry> {
    position(c).map(|pos| &CATALOG[pos])
}

/// Returns the catalog position of a character, if registered.
pub(crate) fn position(c: char) -> Option<usize> {
    // Everything below U+00A0 is plain ASCII/Latin-1 control space.
    if (c as u32) < 0xA0 {
        return None;
    }
    INDEX.get(&c).copied()
}

/// Returns true if the character is registered in the catalog.
pub fn is_cataloged(c: char) -> bool {
    position(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codepoints_unique() {
        let unique: HashSet<char> = catalog().iter().map(|e| e.codepoint).collect();
        assert_eq!(unique.len(), catalog().len());
    }

    #[test]
    fn test_abbreviations_unique() {
        let unique: HashSet<&str> = catalog().iter().map(|e| e.abbreviation).collect();
        assert_eq!(unique.len(), catalog().len());
    }

    #[test]
    fn test_hex_code_padding() {
        let nbsp = lookup('\u{00A0}').unwrap();
        assert_eq!(nbsp.hex_code(), "U+00A0");

        let em_dash = lookup('\u{2014}').unwrap();
        assert_eq!(em_dash.hex_code(), "U+2014");

        let bom = lookup('\u{FEFF}').unwrap();
        assert_eq!(bom.hex_code(), "U+FEFF");
    }

    #[test]
    fn test_lookup_misses_plain_text() {
        for c in "Hello, world! -'\"... café Привет".chars() {
            assert!(lookup(c).is_none(), "{c:?} should not be cataloged");
        }
    }

    #[test]
    fn test_policies() {
        assert_eq!(lookup('\u{2014}').unwrap().policy, ReplacementPolicy::ToHyphen);
        assert_eq!(lookup('\u{2013}').unwrap().policy, ReplacementPolicy::ToHyphen);
        assert_eq!(lookup('\u{2019}').unwrap().policy, ReplacementPolicy::ToSingleQuote);
        assert_eq!(lookup('\u{00AB}').unwrap().policy, ReplacementPolicy::ToDoubleQuote);
        assert_eq!(lookup('\u{2026}').unwrap().policy, ReplacementPolicy::ToEllipsis);
        assert_eq!(lookup('\u{2009}').unwrap().policy, ReplacementPolicy::ToSpace);
        assert_eq!(lookup('\u{200B}').unwrap().policy, ReplacementPolicy::Delete);
        assert_eq!(lookup('\u{202E}').unwrap().policy, ReplacementPolicy::Delete);
        assert_eq!(lookup('\u{2029}').unwrap().policy, ReplacementPolicy::Delete);
    }

    #[test]
    fn test_replacements() {
        assert_eq!(ReplacementPolicy::ToHyphen.replacement(), "-");
        assert_eq!(ReplacementPolicy::ToSingleQuote.replacement(), "'");
        assert_eq!(ReplacementPolicy::ToDoubleQuote.replacement(), "\"");
        assert_eq!(ReplacementPolicy::ToEllipsis.replacement(), "...");
        assert_eq!(ReplacementPolicy::ToSpace.replacement(), " ");
        assert_eq!(ReplacementPolicy::Delete.replacement(), "");
    }

    #[test]
    fn test_directional_marks_grouped() {
        let directional: Vec<_> = catalog()
            .iter()
            .filter(|e| e.category == CharacterCategory::Directional)
            .collect();
        assert_eq!(directional.len(), 12);
        assert!(directional
            .iter()
            .all(|e| e.policy == ReplacementPolicy::Delete));
    }
}
