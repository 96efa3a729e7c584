//! apt.dat parser for X-Plane airport scenery files
//!
//! This module turns row-coded apt.dat text into [`Airport`] records. Lines are
//! positional and whitespace-delimited; the leading integer of each line names
//! the record type and which airport a row belongs to depends on the header
//! and section rows before it.
//!
//! ## Architecture
//!
//! - [`reader`] - Newline-stripping, lossy UTF-8 line reader
//! - [`tokens`] - Field-at-index and rest-of-line extraction
//! - [`row_code`] - Row code decoding and per-code field schema
//! - [`state`] - Explicit parser state and transition table
//! - [`parser`] - Two-pass orchestration across files
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use aptmap::app::services::apt_dat_parser::AptDatParser;
//!
//! # fn example() -> aptmap::Result<()> {
//! let result = AptDatParser::new().parse_str(
//!     "1 433 1 0 KSEA Seattle Tacoma Intl\n1302 city Seattle\n",
//! )?;
//!
//! assert_eq!(result.airports.len(), 1);
//! assert_eq!(result.airports[0].city.as_deref(), Some("Seattle"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`Airport`]: crate::app::models::Airport

mod builder;
pub mod parser;
pub mod reader;
pub mod row_code;
pub mod state;
pub mod stats;
pub mod tokens;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::AptDatParser;
pub use row_code::RowCode;
pub use state::{ParserState, RowAction};
pub use stats::{ParseResult, ParseStats};
