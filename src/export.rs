//! Plain-text file input and output.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File name used when exporting cleaned text to a directory.
pub const DEFAULT_EXPORT_NAME: &str = "cleaned_text.txt";

/// Reads a plain-text file. Invalid UTF-8 is an [`Error::Encoding`](crate::Error::Encoding).
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

/// Reads UTF-8 text from any reader (stdin, sockets, ...).
pub fn read_text<R: std::io::Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes cleaned text as `cleaned_text.txt` inside `dir`, creating `dir`
/// if needed. Returns the written path.
pub fn write_cleaned(dir: impl AsRef<Path>, text: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(DEFAULT_EXPORT_NAME);
    std::fs::write(&path, text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "exported cleaned text");
    Ok(path)
}
