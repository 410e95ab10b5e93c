//! Async API for non-blocking file cleaning.
//!
//! Enable the `async` feature to use these APIs:
//!
//! ```toml
//! [dependencies]
//! uncloak = { version = "0.1", features = ["async"] }
//! ```

use crate::error::{Error, Result};
use crate::export::DEFAULT_EXPORT_NAME;
use crate::options::CleaningOptions;
use crate::report::CleanupResult;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Asynchronously cleans a plain-text file.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> uncloak::Result<()> {
/// use uncloak::CleaningOptions;
///
/// let result = uncloak::async_api::clean_file("notes.txt", &CleaningOptions::default()).await?;
/// println!("{} characters replaced", result.total_removed);
/// # Ok(())
/// # }
/// ```
pub async fn clean_file(
    path: impl AsRef<Path>,
    options: &CleaningOptions,
) -> Result<CleanupResult> {
    let data = fs::read(path).await?;
    clean_bytes(data, options).await
}

/// Asynchronously cleans text read from an async reader.
pub async fn clean_reader<R: AsyncRead + Unpin>(
    mut reader: R,
    options: &CleaningOptions,
) -> Result<CleanupResult> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).await?;
    clean_bytes(data, options).await
}

/// Decodes and cleans bytes on the blocking pool.
pub async fn clean_bytes(data: Vec<u8>, options: &CleaningOptions) -> Result<CleanupResult> {
    // Cleaning is CPU-bound; keep it off the async workers
    let options = options.clone();
    tokio::task::spawn_blocking(move || -> Result<CleanupResult> {
        let text = String::from_utf8(data)?;
        Ok(crate::clean(&text, &options))
    })
    .await
    .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?
}

/// Asynchronously writes `cleaned_text.txt` into `dir`.
pub async fn export(dir: impl AsRef<Path>, text: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).await?;
    let path = dir.join(DEFAULT_EXPORT_NAME);
    fs::write(&path, text).await?;
    Ok(path)
}
