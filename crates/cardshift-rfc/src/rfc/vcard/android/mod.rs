//! Android-to-Apple vCard dialect translation.
//!
//! Android contact exports carry constructs Apple's contact-card parser
//! does not understand: `X-ANDROID-CUSTOM` cursor-item lines, custom
//! phone/email labels encoded as quoted-printable parameters, and
//! line-wrapped photo payloads. [`Translator`] rewrites them in a fixed
//! pipeline over the whole text:
//!
//! 1. cursor items ([`cursor`])
//! 2. `TEL`, then `EMAIL`, then `PHOTO` fields ([`field`])
//!
//! Everything else passes through byte for byte. Translation never fails;
//! constructs it cannot map are left as they are and can be listed with
//! [`Translator::translate_with_report`].
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::android::translate_android_vcard;
//!
//! let input = "\
//! BEGIN:VCARD\n\
//! VERSION:2.1\n\
//! X-ANDROID-CUSTOM:vnd.android.cursor.item/relation;John;5\n\
//! END:VCARD\n";
//!
//! let output = translate_android_vcard(input);
//! assert!(output.contains("item0.X-ABRELATEDNAMES:John\n"));
//! assert!(output.contains("item0.X-ABLabel:_$!<Father>!$_\n"));
//! ```

pub mod cursor;
pub mod diagnostic;
pub mod field;
pub mod label;
pub mod quoted_printable;
pub mod splice;

use cardshift_core::config::TranslatorConfig;
use cardshift_core::types::CounterMode;
use regex::Regex;

pub use cursor::{CursorItemKind, rewrite_cursor_items};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use field::{InfoFieldKind, normalize_field};
pub use label::{EventLabel, LabelTable, RelationLabel, ResolvedLabel};

/// Options for a [`Translator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub counter_mode: CounterMode,
}

impl From<&TranslatorConfig> for TranslatorOptions {
    fn from(config: &TranslatorConfig) -> Self {
        Self {
            counter_mode: config.counter_mode,
        }
    }
}

/// Result of [`Translator::translate_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Stateless Android-to-Apple vCard translator.
///
/// Safe to share across threads; every call works on its own input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    options: TranslatorOptions,
}

impl Translator {
    #[must_use]
    pub const fn new(options: TranslatorOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> TranslatorOptions {
        self.options
    }

    /// Translates `input` into Apple's dialect.
    #[must_use]
    #[tracing::instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn translate(&self, input: &str) -> String {
        self.run(input, &mut Diagnostics::disabled())
    }

    /// Translates `input` and lists the constructs that were left unmapped.
    ///
    /// The text is identical to what [`Translator::translate`] returns.
    #[must_use]
    #[tracing::instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn translate_with_report(&self, input: &str) -> Translation {
        let mut diagnostics = Diagnostics::enabled();
        let text = self.run(input, &mut diagnostics);

        Translation {
            text,
            diagnostics: diagnostics.into_inner(),
        }
    }

    fn run(&self, input: &str, diagnostics: &mut Diagnostics) -> String {
        tracing::debug!(counter_mode = %self.options.counter_mode, "Translating Android vCard");

        let rewritten = rewrite_cursor_items(input, self.options.counter_mode, diagnostics);

        InfoFieldKind::PIPELINE
            .iter()
            .fold(rewritten, |text, &kind| normalize_field(&text, kind, diagnostics))
    }
}

/// Translates `input` with default options.
#[must_use]
pub fn translate_android_vcard(input: &str) -> String {
    Translator::default().translate(input)
}

/// Compiles a translator pattern; a failure disables the stage using it.
fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!(error = %e, pattern, "Invalid translator pattern, stage disabled");
            None
        }
    }
}

/// Line break used by `text`: CRLF if it contains any, otherwise LF.
fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}
