//! Async loading in front of the synchronous decoder.
//!
//! Cookie stores are small (kilobytes), so the decode itself runs inline;
//! only the file read suspends. Callers that already hold the bytes should
//! use [`crate::parse`] directly.

use std::path::Path;

use thiserror::Error;

use crate::base::error::ParseError;
use crate::cookie::Cookie;
use crate::decode;

/// Errors from loading and decoding a cookie store file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read cookie store: {0}")]
    Io(#[from] std::io::Error),
    /// The file was read but its contents are not a valid cookie store.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Read a `Cookies.binarycookies` file and decode it.
pub async fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Cookie>, LoadError> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    let cookies = decode::parse(&data)?;
    tracing::debug!(path = %path.display(), count = cookies.len(), "loaded cookie store");
    Ok(cookies)
}
