//! # binarycookies
//!
//! A decoder for Apple's binary cookie store format, the on-disk
//! representation Safari and other WebKit-based browsers use to persist
//! HTTP cookies (`Cookies.binarycookies`).
//!
//! The crate is a pure decoder: given the complete bytes of a cookie store
//! it produces typed [`Cookie`] records or a structural [`ParseError`]. It
//! performs no network I/O, applies no cookie matching or expiry policy,
//! and has no write path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let data = std::fs::read("Cookies.binarycookies")?;
//! for cookie in binarycookies::parse(&data)? {
//!     println!("{}={} ({})", cookie.name, cookie.value, cookie.domain);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Or asynchronously, straight from a file:
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), binarycookies::LoadError> {
//! let cookies = binarycookies::parse_file("Cookies.binarycookies").await?;
//! println!("found {} cookies", cookies.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Byte cursor and error definitions
//! - [`cookie`] - The decoded cookie record type
//! - [`decode`] - The container/page/record decode pipeline
//! - [`load`] - Async file loading in front of the synchronous core
//!
//! ## Guarantees
//!
//! - Every read is bounds-checked; malformed or truncated input fails with
//!   an error, never a panic or out-of-bounds access.
//! - Decoding is all-or-nothing: the first structural error aborts the call
//!   and no partial cookie list is returned.
//! - Cookies come back in page order, then offset-table order within each
//!   page. No other ordering is implied.
//! - A decode call holds no shared state; concurrent calls over independent
//!   buffers are safe.

pub mod base;
pub mod cookie;
pub mod decode;
pub mod load;

pub use base::error::ParseError;
pub use cookie::Cookie;
pub use decode::parse;
pub use load::{parse_file, LoadError};
