//! Record layer: fixed-layout cookie field extraction.
//!
//! A cookie record is a 56-byte little-endian header followed by a string
//! region. The header stores four offsets (relative to the record start)
//! into that region; each string is NUL-terminated. Layout:
//!
//! | offset | field |
//! |--------|------------------------------|
//! | 0      | record byte length           |
//! | 4      | unknown                      |
//! | 8      | flags                        |
//! | 12     | unknown                      |
//! | 16     | domain offset                |
//! | 20     | name offset                  |
//! | 24     | path offset                  |
//! | 28     | value offset                 |
//! | 32     | end-of-record marker, always 0 |
//! | 40     | expiration (f64, Mac epoch)  |
//! | 48     | creation (f64, Mac epoch)    |

use crate::base::error::ParseError;
use crate::base::reader::BinaryReader;
use crate::cookie::Cookie;

/// Seconds between the Unix epoch and one second before the Mac reference
/// epoch (2001-01-01T00:00:00Z). The format's stored timestamps line up
/// with this off-by-one constant, not the canonical 978307200.
const MAC_EPOCH_OFFSET: i64 = 978_307_199;

/// Decode one cookie record slice.
pub(crate) fn parse_cookie(data: &[u8]) -> Result<Cookie, ParseError> {
    let reader = BinaryReader::new(data);

    let flags = reader.read_u32_le_at(8)?;
    let domain_offset = reader.read_u32_le_at(16)?;
    let name_offset = reader.read_u32_le_at(20)?;
    let path_offset = reader.read_u32_le_at(24)?;
    let value_offset = reader.read_u32_le_at(28)?;

    if reader.read_u32_le_at(32)? != 0 {
        return Err(ParseError::InvalidEndOfCookieData);
    }

    let expiration = mac_time_to_unix_millis(reader.read_f64_le_at(40)?);
    let creation = mac_time_to_unix_millis(reader.read_f64_le_at(48)?);

    let domain = read_string(data, domain_offset as usize)?;
    let name = read_string(data, name_offset as usize)?;
    let path = read_string(data, path_offset as usize)?;
    let value = read_string(data, value_offset as usize)?;

    // flags are a discrete enumeration, not a bitfield; values outside the
    // known set decode as neither secure nor http-only
    let (secure, http_only) = match flags {
        1 => (true, false),
        4 => (false, true),
        5 => (true, true),
        _ => (false, false),
    };

    Ok(Cookie {
        domain,
        name,
        path,
        value,
        expiration,
        creation,
        secure,
        http_only,
    })
}

/// Stored Mac-epoch seconds to Unix milliseconds, integer arithmetic after
/// the float read.
fn mac_time_to_unix_millis(seconds: f64) -> i64 {
    (seconds as i64 + MAC_EPOCH_OFFSET) * 1000
}

/// Extract the NUL-terminated string starting at `offset` in the record.
///
/// The format guarantees termination inside the record, so a missing NUL
/// means the slice is corrupt. Field text is ASCII-compatible; anything
/// else is carried through lossily rather than failing the decode.
fn read_string(data: &[u8], offset: usize) -> Result<String, ParseError> {
    let tail = data.get(offset..).ok_or(ParseError::OutOfBounds)?;
    let end = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or(ParseError::OutOfBounds)?;
    Ok(String::from_utf8_lossy(&tail[..end]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a record the way Safari lays one out: header, then domain,
    /// name, path, value as consecutive NUL-terminated strings.
    fn record(flags: u32, end_marker: u32, expiration: f64, creation: f64) -> Vec<u8> {
        let strings: [&[u8]; 4] = [b"example.com", b"session", b"/", b"abc123"];
        let mut data = Vec::new();
        let total = 56 + strings.iter().map(|s| s.len() + 1).sum::<usize>();
        data.extend_from_slice(&(total as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&flags.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        let mut offset = 56u32;
        for s in strings {
            data.extend_from_slice(&offset.to_le_bytes());
            offset += s.len() as u32 + 1;
        }
        data.extend_from_slice(&end_marker.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&expiration.to_le_bytes());
        data.extend_from_slice(&creation.to_le_bytes());
        for s in strings {
            data.extend_from_slice(s);
            data.push(0);
        }
        data
    }

    #[test]
    fn test_parse_record_fields() {
        let cookie = parse_cookie(&record(0, 0, 461_599_847.0, 461_513_447.0)).unwrap();
        assert_eq!(cookie.domain, "example.com");
        assert_eq!(cookie.name, "session");
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.value, "abc123");
        assert_eq!(cookie.expiration, 1_439_907_046_000);
        assert_eq!(cookie.creation, 1_439_820_646_000);
    }

    #[test]
    fn test_flag_mapping() {
        for (flags, secure, http_only) in [
            (0, false, false),
            (1, true, false),
            (4, false, true),
            (5, true, true),
            // unknown values are tolerated and decode as neither
            (2, false, false),
            (3, false, false),
            (0xdead_beef, false, false),
        ] {
            let cookie = parse_cookie(&record(flags, 0, 0.0, 0.0)).unwrap();
            assert_eq!(cookie.secure, secure, "flags {flags}");
            assert_eq!(cookie.http_only, http_only, "flags {flags}");
        }
    }

    #[test]
    fn test_nonzero_end_marker() {
        let data = record(0, 7, 0.0, 0.0);
        assert_eq!(parse_cookie(&data), Err(ParseError::InvalidEndOfCookieData));
    }

    #[test]
    fn test_timestamp_conversion_truncates_seconds() {
        let cookie = parse_cookie(&record(0, 0, 1.75, -1.0)).unwrap();
        assert_eq!(cookie.expiration, (1 + MAC_EPOCH_OFFSET) * 1000);
        assert_eq!(cookie.creation, (-1 + MAC_EPOCH_OFFSET) * 1000);
    }

    #[test]
    fn test_string_offset_out_of_bounds() {
        let mut data = record(0, 0, 0.0, 0.0);
        let bad = (data.len() as u32).to_le_bytes();
        data[16..20].copy_from_slice(&bad);
        assert_eq!(parse_cookie(&data), Err(ParseError::OutOfBounds));
    }

    #[test]
    fn test_missing_nul_terminator() {
        let mut data = record(0, 0, 0.0, 0.0);
        // strip the final NUL so the value string runs to the slice end
        assert_eq!(data.pop(), Some(0));
        assert_eq!(parse_cookie(&data), Err(ParseError::OutOfBounds));
    }

    #[test]
    fn test_record_shorter_than_header() {
        assert_eq!(parse_cookie(&[0u8; 40]), Err(ParseError::OutOfBounds));
    }

    #[test]
    fn test_non_utf8_bytes_do_not_abort() {
        let mut data = record(0, 0, 0.0, 0.0);
        let value_offset = u32::from_le_bytes(data[28..32].try_into().unwrap()) as usize;
        data[value_offset] = 0xff;
        let cookie = parse_cookie(&data).unwrap();
        assert_eq!(cookie.value.chars().next(), Some(char::REPLACEMENT_CHARACTER));
    }
}
