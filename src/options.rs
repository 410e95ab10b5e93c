//! Cleaning options.

use serde::{Deserialize, Serialize};

/// Options for the auxiliary transforms applied after catalog substitution.
///
/// Every field is optional when deserialized; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Case transform applied near the end of the pipeline.
    pub text_case: TextCase,

    /// Collapse runs of horizontal whitespace to one space and trim the ends.
    pub remove_extra_spaces: bool,

    /// Strip all whitespace. Wins over `remove_extra_spaces`.
    pub remove_all_spaces: bool,

    /// Replace every line break with a single space.
    pub remove_line_breaks: bool,

    /// Collapse 2+ consecutive line breaks to one blank line.
    /// Ignored when `remove_line_breaks` is set.
    pub normalize_line_breaks: bool,

    /// Delete ASCII digits.
    pub remove_numbers: bool,

    /// Delete everything but word characters, whitespace and Cyrillic.
    pub remove_punctuation: bool,

    /// Same filter as `remove_punctuation`.
    pub remove_special_chars: bool,

    /// Delete everything outside 7-bit ASCII.
    pub remove_non_ascii: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            text_case: TextCase::Original,
            remove_extra_spaces: true,
            remove_all_spaces: false,
            remove_line_breaks: false,
            normalize_line_breaks: false,
            remove_numbers: false,
            remove_punctuation: false,
            remove_special_chars: false,
            remove_non_ascii: false,
        }
    }
}

impl CleaningOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog substitution only; every auxiliary transform disabled.
    pub fn minimal() -> Self {
        Self {
            remove_extra_spaces: false,
            ..Self::default()
        }
    }

    /// Flattens text to a single ASCII line with collapsed spacing.
    pub fn aggressive() -> Self {
        Self {
            remove_extra_spaces: true,
            remove_line_breaks: true,
            remove_non_ascii: true,
            ..Self::default()
        }
    }

    /// Sets the case transform.
    pub fn with_case(mut self, case: TextCase) -> Self {
        self.text_case = case;
        self
    }

    /// Enables or disables horizontal whitespace collapsing.
    pub fn with_extra_spaces_removed(mut self, enabled: bool) -> Self {
        self.remove_extra_spaces = enabled;
        self
    }

    /// Strips all whitespace.
    pub fn remove_all_spaces(mut self) -> Self {
        self.remove_all_spaces = true;
        self
    }

    /// Replaces line breaks with spaces.
    pub fn remove_line_breaks(mut self) -> Self {
        self.remove_line_breaks = true;
        self
    }

    /// Collapses runs of blank lines.
    pub fn normalize_line_breaks(mut self) -> Self {
        self.normalize_line_breaks = true;
        self
    }

    /// Deletes digits.
    pub fn remove_numbers(mut self) -> Self {
        self.remove_numbers = true;
        self
    }

    /// Deletes punctuation and symbols.
    pub fn remove_punctuation(mut self) -> Self {
        self.remove_punctuation = true;
        self
    }

    /// Deletes special characters (same filter as punctuation).
    pub fn remove_special_chars(mut self) -> Self {
        self.remove_special_chars = true;
        self
    }

    /// Deletes non-ASCII characters.
    pub fn remove_non_ascii(mut self) -> Self {
        self.remove_non_ascii = true;
        self
    }

    /// Returns true if the symbol filter should run.
    pub fn strips_symbols(&self) -> bool {
        self.remove_punctuation || self.remove_special_chars
    }

    /// Returns true if horizontal whitespace collapsing is in effect.
    pub fn collapses_spaces(&self) -> bool {
        self.remove_extra_spaces && !self.remove_all_spaces
    }

    /// Returns a copy with the mutually exclusive pairs resolved.
    ///
    /// `remove_all_spaces` clears `remove_extra_spaces`, and
    /// `remove_line_breaks` clears `normalize_line_breaks`. Cleaning with the
    /// resolved options gives the same output as cleaning with `self`.
    pub fn resolved(&self) -> Self {
        let mut resolved = self.clone();
        if resolved.remove_all_spaces {
            resolved.remove_extra_spaces = false;
        }
        if resolved.remove_line_breaks {
            resolved.normalize_line_breaks = false;
        }
        resolved
    }
}

/// Case transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    /// Leave case untouched.
    #[default]
    Original,
    /// Full lowercase.
    Lowercase,
    /// Full uppercase.
    Uppercase,
    /// Lowercase, then capitalize the start of the text and of each sentence.
    SentenceCase,
}

impl std::fmt::Display for TextCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextCase::Original => write!(f, "original"),
            TextCase::Lowercase => write!(f, "lowercase"),
            TextCase::Uppercase => write!(f, "uppercase"),
            TextCase::SentenceCase => write!(f, "sentence case"),
        }
    }
}
