//! # uncloak
//!
//! A deterministic engine that finds "problematic" Unicode characters in text
//! (zero-width and typographic spaces, bidirectional controls, typographic
//! punctuation) and produces a cleaned copy plus a report of what it replaced.
//!
//! ## Quick Start
//!
//! ```
//! use uncloak::{clean, CleaningOptions};
//!
//! let result = clean("Test\u{00A0}\u{00A0}text\u{200B}", &CleaningOptions::default());
//! assert_eq!(result.cleaned_text, "Test text");
//! assert_eq!(result.total_removed, 3);
//! ```
//!
//! The engine is a pure function: no I/O, no shared mutable state. It can be
//! called from any number of threads at once. Files, clipboard and persisted
//! settings live in separate boundary modules.
//!
//! ## Features
//!
//! - `async`: Async file helpers with Tokio
//! - `python`: Python bindings via pyo3

pub mod catalog;
pub mod cleanup;
pub mod clipboard;
pub mod device;
pub mod error;
pub mod export;
pub mod options;
pub mod report;
pub mod settings;
pub mod visualize;

#[cfg(feature = "async")]
pub mod async_api;

#[cfg(feature = "python")]
mod python;

// Re-exports
pub use catalog::{catalog, lookup, CatalogEntry, CharacterCategory, ReplacementPolicy};
pub use cleanup::{clean, clean_default, scan};
pub use device::DeviceClass;
pub use error::{Error, Result};
pub use options::{CleaningOptions, TextCase};
pub use report::{CleanupResult, MatchRecord};
pub use settings::{JsonFileStore, MemoryStore, SettingsStore};
pub use visualize::{visualize, Segment};

use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Cleans independent inputs in parallel. Output order matches input order.
///
/// # Example
///
/// ```
/// use uncloak::{clean_batch, CleaningOptions};
///
/// let results = clean_batch(&["a\u{2019}b", "plain"], &CleaningOptions::default());
/// assert_eq!(results[0].cleaned_text, "a'b");
/// assert_eq!(results[1].total_removed, 0);
/// ```
pub fn clean_batch<S>(inputs: &[S], options: &CleaningOptions) -> Vec<CleanupResult>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|input| clean(input.as_ref(), options))
        .collect()
}

/// Cleans the contents of a plain-text file.
pub fn clean_file(path: impl AsRef<Path>, options: &CleaningOptions) -> Result<CleanupResult> {
    let text = export::read_text_file(path)?;
    Ok(clean(&text, options))
}

/// Builder for cleaning with options.
///
/// # Example
///
/// ```
/// use uncloak::{TextCase, Uncloak};
///
/// let result = Uncloak::new()
///     .with_case(TextCase::SentenceCase)
///     .normalize_line_breaks()
///     .clean("hello.  world\n\n\n\u{201C}ok\u{201D}");
/// assert_eq!(result.cleaned_text, "Hello. World\n\n\"ok\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Uncloak {
    options: CleaningOptions,
}

impl Uncloak {
    /// Creates a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the options saved in a settings store (defaults on failure).
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        Self {
            options: settings::load_or_default(store),
        }
    }

    /// Replaces all options.
    pub fn with_options(mut self, options: CleaningOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the case transform.
    pub fn with_case(mut self, case: TextCase) -> Self {
        self.options.text_case = case;
        self
    }

    /// Disables horizontal whitespace collapsing.
    pub fn keep_spaces(mut self) -> Self {
        self.options.remove_extra_spaces = false;
        self
    }

    /// Strips all whitespace.
    pub fn remove_all_spaces(mut self) -> Self {
        self.options.remove_all_spaces = true;
        self
    }

    /// Replaces line breaks with spaces.
    pub fn remove_line_breaks(mut self) -> Self {
        self.options.remove_line_breaks = true;
        self
    }

    /// Collapses runs of blank lines.
    pub fn normalize_line_breaks(mut self) -> Self {
        self.options.normalize_line_breaks = true;
        self
    }

    /// Returns the current options.
    pub fn options(&self) -> &CleaningOptions {
        &self.options
    }

    /// Saves the current options to a store (best effort).
    pub fn remember(&self, store: &dyn SettingsStore) -> bool {
        settings::save_best_effort(store, &self.options)
    }

    /// Cleans text.
    pub fn clean(&self, text: &str) -> CleanupResult {
        clean(text, &self.options)
    }

    /// Cleans a file.
    pub fn clean_file(&self, path: impl AsRef<Path>) -> Result<CleanupResult> {
        clean_file(path, &self.options)
    }

    /// Cleans a file and writes `cleaned_text.txt` into `dir`.
    pub fn clean_file_to(
        &self,
        path: impl AsRef<Path>,
        dir: impl AsRef<Path>,
    ) -> Result<(CleanupResult, PathBuf)> {
        let result = self.clean_file(path)?;
        let written = export::write_cleaned(dir, &result.cleaned_text)?;
        Ok((result, written))
    }
}
