//! Container layer: file magic, page table, page slicing.

use crate::base::error::ParseError;
use crate::base::reader::BinaryReader;

/// Magic bytes at the start of a binary cookie store.
const MAGIC: &[u8; 4] = b"cook";

/// Split a cookie store into its page byte ranges.
///
/// The header declares a page count followed by one big-endian length per
/// page; the pages themselves follow the table back to back. Slicing walks
/// the buffer in exactly the declared order, so page boundaries are
/// established here and nowhere else. Bytes past the last page are left
/// untouched.
pub(crate) fn split_pages(data: &[u8]) -> Result<Vec<&[u8]>, ParseError> {
    let mut reader = BinaryReader::new(data);

    if reader.read_slice(4)? != MAGIC {
        return Err(ParseError::BadFileHeader);
    }

    let num_pages = reader.read_u32_be()? as usize;
    // each table entry is 4 bytes, so a count the remaining buffer cannot
    // hold is corrupt; checked before allocating
    if num_pages > reader.remaining() / 4 {
        return Err(ParseError::OutOfBounds);
    }

    let mut page_sizes = Vec::with_capacity(num_pages);
    for _ in 0..num_pages {
        page_sizes.push(reader.read_u32_be()?);
    }

    let mut pages = Vec::with_capacity(num_pages);
    for size in page_sizes {
        pages.push(reader.read_slice(size as usize)?);
    }

    Ok(pages)
}
