//! vCard parsing.
//!
//! A lenient deserializer for vCard 2.1, 3.0, and 4.0 documents, used to
//! check that translated output is accepted as contact records.
//!
//! ## Usage
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! item0.X-ABRELATEDNAMES:Jane Doe\r\n\
//! item0.X-ABLabel:_$!<Spouse>!$_\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! assert_eq!(cards[0].labeled_items()[0].label, Some("_$!<Spouse>!$_"));
//! ```
//!
//! ## Features
//!
//! - Handles line folding/unfolding and quoted-printable soft line breaks
//! - Parses property groups (item1.TEL)
//! - Accepts vCard 2.1 bare parameters (TEL;CELL)
//! - RFC 6868 caret encoding for parameters

mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod error_tests;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_single};
