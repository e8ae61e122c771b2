use thiserror::Error;

/// Structural errors raised while decoding a binary cookie store.
///
/// Every variant is fatal to the decode call that raised it: the pipeline
/// aborts at the first error and returns no partial cookie list. Retrying
/// with the same bytes cannot succeed, so callers should treat these as
/// permanent for a given buffer.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    /// The buffer does not start with the `cook` magic bytes.
    #[error("File header is not `cook`")]
    BadFileHeader,
    /// A page section does not start with the expected header value 256.
    #[error("Unexpected cookie page header value")]
    UnexpectedCookieHeaderValue,
    /// A cookie record's end-of-record field is nonzero.
    #[error("Invalid end of cookie data")]
    InvalidEndOfCookieData,
    /// A read, slice, or string scan would run past its containing buffer.
    /// Covers truncated files, corrupt length/offset fields, and missing
    /// NUL terminators.
    #[error("Read out of bounds")]
    OutOfBounds,
}
