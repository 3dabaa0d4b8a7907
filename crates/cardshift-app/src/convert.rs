//! File-level conversion of Android exports.

use std::fs;
use std::path::Path;

use cardshift_rfc::error::RfcError;
use cardshift_rfc::rfc::vcard::android::Diagnostic;
use cardshift_rfc::rfc::vcard::{Translator, VCard, parse, serialize};

use crate::error::{AppError, AppResult};

/// Outcome of [`translate_file`].
#[derive(Debug)]
pub struct ConvertSummary {
    /// Cards the translated output parsed into.
    pub cards: usize,
    /// Unmapped constructs, empty unless a report was requested.
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads a vCard export.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
///
/// ## Errors
/// Returns an error if the file cannot be read.
pub fn read_export(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path).map_err(|e| AppError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes vCard text to `path`, creating missing parent directories.
///
/// ## Errors
/// Returns an error if a directory or the file cannot be written.
pub fn save_contacts(data: &str, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    fs::write(path, data).map_err(|e| AppError::io(path, e))
}

/// How [`translate_file`] translates and what it writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Collect constructs the translator could not map.
    pub report: bool,
    /// Write the parsed cards re-serialized rather than the translated text.
    pub normalize: bool,
}

/// Translates the export at `input` and writes the result to `output`.
///
/// The translated text must parse as a vCard document before it is
/// written.
///
/// ## Errors
/// Returns an error if reading or writing fails or the translated text
/// does not parse.
#[tracing::instrument(skip(translator))]
pub fn translate_file(
    translator: &Translator,
    input: &Path,
    output: &Path,
    options: ConvertOptions,
) -> AppResult<ConvertSummary> {
    let source = read_export(input)?;

    let (text, diagnostics) = if options.report {
        let translation = translator.translate_with_report(&source);
        (translation.text, translation.diagnostics)
    } else {
        (translator.translate(&source), Vec::new())
    };

    let cards = parse(&text).map_err(RfcError::from)?;

    if options.normalize {
        save_contacts(&serialize(&cards), output)?;
    } else {
        save_contacts(&text, output)?;
    }

    tracing::info!(
        cards = cards.len(),
        diagnostics = diagnostics.len(),
        output = %output.display(),
        "Translated contacts written"
    );

    Ok(ConvertSummary {
        cards: cards.len(),
        diagnostics,
    })
}

/// Parses the vCard file at `path`.
///
/// ## Errors
/// Returns an error if the file cannot be read or does not parse.
#[tracing::instrument]
pub fn check_file(path: &Path) -> AppResult<Vec<VCard>> {
    let source = read_export(path)?;
    parse(&source).map_err(|e| AppError::from(RfcError::from(e)))
}
