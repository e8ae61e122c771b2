//! Page layer: page header, cookie-offset table, record slicing.

use crate::base::error::ParseError;
use crate::base::reader::BinaryReader;

/// Value every page section starts with (big-endian `0x00000100`).
const PAGE_HEADER: u32 = 256;

/// Resolve one page into its cookie byte ranges, in offset-table order.
///
/// Offsets in the table are relative to the start of the page slice; each
/// cookie record begins with its own little-endian byte length, which also
/// covers the length field itself.
pub(crate) fn cookie_slices(page: &[u8]) -> Result<Vec<&[u8]>, ParseError> {
    let mut reader = BinaryReader::new(page);

    if reader.read_u32_be()? != PAGE_HEADER {
        return Err(ParseError::UnexpectedCookieHeaderValue);
    }

    let num_cookies = reader.read_u32_le()? as usize;
    // same shape as the container's page table: 4 bytes per entry
    if num_cookies > reader.remaining() / 4 {
        return Err(ParseError::OutOfBounds);
    }

    let mut offsets = Vec::with_capacity(num_cookies);
    for _ in 0..num_cookies {
        offsets.push(reader.read_u32_le()? as usize);
    }

    let mut cookies = Vec::with_capacity(num_cookies);
    for offset in offsets {
        let size = reader.read_u32_le_at(offset)?;
        cookies.push(reader.slice(offset, size as usize)?);
    }

    Ok(cookies)
}
