//! vCard serialization.
//!
//! Writes parsed cards back out, e.g. to store normalized contacts after an
//! Android import.
//!
//! ## Usage
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//! card.add_property(VCardProperty::grouped_text("item0", "X-ABDATE", "2010-06-21"));
//! card.add_property(VCardProperty::grouped_text("item0", "X-ABLabel", "_$!<Anniversary>!$_"));
//!
//! let output = serialize(&[card]);
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Doe\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Quoted-printable values folded with `=` soft line breaks
//! - RFC 6868 caret encoding for parameters
//! - Document order kept, so `item`N label pairs stay together

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_raw_value};
pub use fold::{fold_line, fold_quoted_printable};
pub use serializer::{serialize, serialize_single};
