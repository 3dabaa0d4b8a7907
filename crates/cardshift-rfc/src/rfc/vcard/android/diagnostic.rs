//! Constructs the translator left untouched or could only partly map.

use std::fmt;

use super::cursor::CursorItemKind;
use super::field::InfoFieldKind;

/// Something worth reporting about a translated input.
///
/// Diagnostics never influence the translated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte offset of the construct in the text handed to the stage that found it.
    pub offset: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A cursor-item line whose item type has no rewrite; the line is kept.
    UnknownCursorItem { item_type: String },
    /// A relation or event label that was not an integer code.
    CustomLabel { item: CursorItemKind, label: String },
    /// A quoted-printable segment that could not be decoded and was kept raw.
    UndecodableSegment { segment: String },
    /// A contact-event date that is neither `YYYY-MM-DD` nor `--MM-DD`.
    InvalidEventDate { value: String },
    /// A photo payload that is not valid base64 after flattening.
    InvalidPhotoPayload { reason: String },
    /// Decoded field text that would not survive unencoded; the field is kept.
    UnsafeFieldText { field: InfoFieldKind, text: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}: {}", self.offset, self.kind)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCursorItem { item_type } => {
                write!(f, "unrecognized cursor item type: {item_type}")
            }
            Self::CustomLabel { item, label } => write!(f, "custom {item} label: {label}"),
            Self::UndecodableSegment { segment } => {
                write!(f, "undecodable quoted-printable segment: {segment}")
            }
            Self::InvalidEventDate { value } => write!(f, "unrecognized event date: {value}"),
            Self::InvalidPhotoPayload { reason } => write!(f, "invalid photo payload: {reason}"),
            Self::UnsafeFieldText { field, text } => {
                write!(f, "decoded {field} text needs its encoding: {text:?}")
            }
        }
    }
}

/// Sink the translation stages report into.
///
/// When disabled, checks that exist only for reporting are skipped.
#[derive(Debug, Default)]
pub struct Diagnostics {
    enabled: bool,
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn push(&mut self, offset: usize, kind: impl FnOnce() -> DiagnosticKind) {
        if self.enabled {
            let kind = kind();
            tracing::debug!(offset, %kind, "Translator diagnostic");
            self.items.push(Diagnostic { offset, kind });
        }
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.items
    }
}
