//! The binary cookie store decode pipeline.
//!
//! Decoding composes three stages, each consuming the previous stage's
//! slices:
//!
//! 1. `container` - validates the `cook` file magic and splits the buffer
//!    into page byte ranges via the big-endian page table.
//! 2. `page` - validates each page's header, walks the little-endian
//!    cookie-offset table, and slices out length-prefixed cookie records.
//! 3. `record` - extracts the fixed-layout fields of one cookie record
//!    and resolves its NUL-terminated strings.
//!
//! The stages are synchronous and purely functional over the input buffer.
//! The first structural error anywhere aborts the whole decode; the format
//! carries no per-record checksums, so a corrupt page invalidates the file.

pub(crate) mod container;
pub(crate) mod page;
pub(crate) mod record;

use crate::base::error::ParseError;
use crate::cookie::Cookie;

/// Decode a complete binary cookie store.
///
/// `data` must hold the entire store; trailing bytes after the last page
/// (checksum, footer, and embedded policy plist) are ignored. Cookies are
/// returned in page order, then offset-table order within each page.
pub fn parse(data: &[u8]) -> Result<Vec<Cookie>, ParseError> {
    let pages = container::split_pages(data)?;

    let mut cookies = Vec::new();
    for page_data in pages {
        for cookie_data in page::cookie_slices(page_data)? {
            cookies.push(record::parse_cookie(cookie_data)?);
        }
    }

    tracing::debug!(count = cookies.len(), "decoded binary cookie store");
    Ok(cookies)
}
