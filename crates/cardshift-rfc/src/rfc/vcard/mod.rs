//! vCard support for Android-to-Apple contact transfer.
//!
//! ## Overview
//!
//! Android exports vCard 2.1/3.0 with its own extensions; Apple's
//! contact-card parser expects grouped `itemN.X-AB*` label pairs and plain
//! `TEL`/`EMAIL`/`PHOTO` fields. This module translates between the two and
//! reads the result back as contact records.
//!
//! ## Usage
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::{Translator, import_android};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! FN:Jane Doe\r\n\
//! X-ANDROID-CUSTOM:vnd.android.cursor.item/contact_event;1999-09-09;1\r\n\
//! END:VCARD\r\n";
//!
//! let cards = import_android(&Translator::default(), input).unwrap();
//! let items = cards[0].labeled_items();
//! assert_eq!(items[0].property.value, "1999-09-09");
//! assert_eq!(items[0].label, Some("_$!<Anniversary>!$_"));
//! ```
//!
//! ## Submodules
//!
//! - [`android`] - Dialect translator
//! - [`build`] - Serialization functions
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardParameter`)
//! - [`parse`] - Parsing functions and error types

pub mod android;
pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use android::{Translation, Translator, TranslatorOptions, translate_android_vcard};
pub use build::{serialize, serialize_single};
pub use core::{LabeledItem, VCard, VCardParameter, VCardProperty, VCardVersion};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};

use crate::error::RfcResult;

/// Translates an Android export and reads it back as contact records.
///
/// ## Errors
/// Returns [`crate::error::RfcError::ParseError`] if the translated text is
/// not an acceptable vCard document.
#[tracing::instrument(skip(translator, input), fields(input_len = input.len()))]
pub fn import_android(translator: &Translator, input: &str) -> RfcResult<Vec<VCard>> {
    let translated = translator.translate(input);
    let cards = parse(&translated)?;

    tracing::debug!(count = cards.len(), "Imported Android vCards");

    Ok(cards)
}
