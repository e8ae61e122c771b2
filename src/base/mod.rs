//! Base types for the decode pipeline.
//!
//! - [`error::ParseError`]: structural decode failures
//! - [`reader::BinaryReader`]: bounds-checked endian-aware byte cursor

pub mod error;
pub mod reader;
