//! vCard serialization.

use super::escape::{escape_param_value, escape_raw_value};
use super::fold::{fold_line, fold_quoted_printable};
use crate::rfc::vcard::core::{VCard, VCardParameter, VCardProperty};

/// Serializes one or more vCards to a string.
///
/// ## Summary
/// Each card is written as `BEGIN`, `VERSION`, its properties in document
/// order, then `END`, with CRLF line endings and folding applied.
#[must_use]
#[tracing::instrument(skip(cards), fields(count = cards.len()))]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for card in cards {
        serialize_vcard(card, &mut output);
    }

    tracing::debug!(output_len = output.len(), "Serialized vCards");

    output
}

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD\r\n");

    // VERSION must be first after BEGIN
    output.push_str("VERSION:");
    output.push_str(card.version.as_str());
    output.push_str("\r\n");

    for prop in &card.properties {
        serialize_property(prop, output);
    }

    output.push_str("END:VCARD\r\n");
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    let mut head = String::new();

    if let Some(group) = &prop.group {
        head.push_str(group);
        head.push('.');
    }

    head.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, &mut head);
    }

    let quoted_printable = prop.is_quoted_printable();
    let value = escape_raw_value(&prop.value, quoted_printable);

    let line = if quoted_printable {
        fold_quoted_printable(&head, &value)
    } else {
        fold_line(&format!("{head}:{value}"))
    };

    output.push_str(&line);
    output.push_str("\r\n");
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);

    // vCard 2.1 bare parameter, e.g. the CELL in TEL;CELL
    if param.is_bare() {
        return;
    }

    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}
