//! Normalizes Android encodings of phone, email, and photo fields.
//!
//! Android writes custom phone and email labels as quoted-printable
//! parameters:
//!
//! ```text
//! TEL;X-=E5=AE=B6;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:+1 555 0100
//! ```
//!
//! and line-wraps base64 photo payloads. Both are rewritten into the form
//! Apple's parser accepts. A field whose decoded text cannot be written
//! without its encoding is left as it is.

use std::fmt;
use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::{Captures, Regex};

use super::compile;
use super::diagnostic::{DiagnosticKind, Diagnostics};
use super::quoted_printable::{self, SOFT_WRAPPED_VALUE};
use super::splice::{Edit, apply_reversed};

const QP_MARKERS: &str =
    "(?:CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE|ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8)";

/// Group 1 is the encoded parameter text ahead of the markers, group 2 the
/// value with any soft line breaks.
static TEL: LazyLock<Option<Regex>> = LazyLock::new(|| compile(&labeled_pattern("TEL")));

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| compile(&labeled_pattern("EMAIL")));

/// Group 1 is the encoding prefix, group 2 the payload and its base64
/// continuation lines, group 3 the line ending closing the block.
///
/// A continuation line holds only base64 text and blanks, so the block stops
/// at a blank line or at the next property.
static IMAGE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r"PHOTO;ENCODING=([^:\r\n]*?)JPEG:([^\r\n]*(?:\r?\n[ \t]*[A-Za-z0-9+/=][A-Za-z0-9+/= \t]*)*)(\r?\n|\z)",
    )
});

fn labeled_pattern(property: &str) -> String {
    format!(r"{property};([^:\r\n]+?){QP_MARKERS}:({SOFT_WRAPPED_VALUE})")
}

/// Field kinds the normalizer rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoFieldKind {
    Tel,
    Email,
    Image,
}

impl InfoFieldKind {
    /// Order the translator applies the kinds in.
    pub const PIPELINE: [Self; 3] = [Self::Tel, Self::Email, Self::Image];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Image => "image",
        }
    }

    fn pattern(self) -> Option<&'static Regex> {
        match self {
            Self::Tel => TEL.as_ref(),
            Self::Email => EMAIL.as_ref(),
            Self::Image => IMAGE.as_ref(),
        }
    }

    const fn property(self) -> &'static str {
        match self {
            Self::Tel => "TEL",
            Self::Email => "EMAIL",
            Self::Image => "PHOTO",
        }
    }
}

impl fmt::Display for InfoFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrites every occurrence of the `kind` field encoding in `text`.
#[must_use]
#[tracing::instrument(skip(text, diagnostics), fields(input_len = text.len()))]
pub fn normalize_field(text: &str, kind: InfoFieldKind, diagnostics: &mut Diagnostics) -> String {
    let Some(pattern) = kind.pattern() else {
        return text.to_string();
    };

    let edits: Vec<Edit> = pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let replacement = match kind {
                InfoFieldKind::Tel | InfoFieldKind::Email => {
                    labeled_field(kind, &caps, whole.start(), diagnostics)?
                }
                InfoFieldKind::Image => flattened_photo(&caps, whole.start(), diagnostics)?,
            };
            tracing::trace!(%kind, offset = whole.start(), "Normalizing field");
            Some(Edit::new(whole.range(), replacement))
        })
        .collect();

    tracing::debug!(%kind, count = edits.len(), "Normalized fields");

    apply_reversed(text, edits)
}

/// Builds `TEL;<label>:<value>` from a quoted-printable line, or `None` when
/// the line has to keep its encoding.
fn labeled_field(
    kind: InfoFieldKind,
    caps: &Captures<'_>,
    offset: usize,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    let encoded = caps.get(1)?.as_str();
    let encoded_value = caps.get(2)?.as_str();
    let label = encoded.split(';').next().unwrap_or_default().replace(')', "");

    let label = decode_or_report(&label, quoted_printable::try_decode, offset, diagnostics)?;
    if !is_parameter_text(&label) {
        diagnostics.push(offset, || DiagnosticKind::UnsafeFieldText {
            field: kind,
            text: label.clone(),
        });
        return None;
    }

    let value = decode_or_report(
        encoded_value,
        quoted_printable::try_decode_value,
        offset,
        diagnostics,
    )?;
    if value.contains(['\r', '\n']) {
        diagnostics.push(offset, || DiagnosticKind::UnsafeFieldText {
            field: kind,
            text: value.clone(),
        });
        return None;
    }

    let property = kind.property();
    Some(if label.is_empty() {
        format!("{property}:{value}")
    } else {
        format!("{property};{label}:{value}")
    })
}

fn decode_or_report(
    segment: &str,
    decode: fn(&str) -> Option<String>,
    offset: usize,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    let decoded = decode(segment);
    if decoded.is_none() {
        diagnostics.push(offset, || DiagnosticKind::UndecodableSegment {
            segment: segment.to_string(),
        });
    }
    decoded
}

/// Whether `text` can stand as a bare parameter without quoting or escaping.
fn is_parameter_text(text: &str) -> bool {
    !text
        .chars()
        .any(|c| matches!(c, ':' | ';' | ',' | '=' | '"') || c.is_control())
}

fn flattened_photo(
    caps: &Captures<'_>,
    offset: usize,
    diagnostics: &mut Diagnostics,
) -> Option<String> {
    let payload = caps.get(2)?.as_str();
    let terminator = caps.get(3)?.as_str();

    let flattened: String = payload
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
        .collect();

    if diagnostics.is_enabled() {
        let decoded = STANDARD.decode(&flattened);
        if let Err(e) = decoded {
            diagnostics.push(offset, || DiagnosticKind::InvalidPhotoPayload {
                reason: e.to_string(),
            });
        }
    }

    Some(format!("PHOTO;ENCODING=BASE64;JPEG:{flattened}{terminator}"))
}
