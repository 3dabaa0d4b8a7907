//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use crate::rfc::vcard::core::{VCard, VCardProperty, VCardVersion, names};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found.
/// Content outside `BEGIN:VCARD`/`END:VCARD` is skipped.
///
/// ## Errors
/// Returns a parse error if a card is not closed, a content line is
/// malformed, or a card declares an unsupported version.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for parsing a document with exactly one vCard.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(
            ParseErrorKind::UnexpectedEof,
            1,
            "no vCard found in document",
        )
    })
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
}

impl Parser {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            let line_num = self.current_line();
            self.pos += 1;

            if line.eq_ignore_ascii_case("BEGIN:VCARD") {
                cards.push(self.parse_vcard(line_num)?);
            } else if line.eq_ignore_ascii_case("END:VCARD") {
                return Err(ParseError::unexpected(line_num, "BEGIN:VCARD", "END:VCARD"));
            } else {
                tracing::trace!(line = line_num, "Skipping content outside vCard");
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self, begin_line: usize) -> ParseResult<VCard> {
        let mut card = VCard::new();

        while self.pos < self.lines.len() {
            let line_num = self.current_line();
            let line = &self.lines[self.pos];
            self.pos += 1;

            if line.trim().eq_ignore_ascii_case("END:VCARD") {
                return Ok(card);
            }

            let content_line = parse_content_line(line, line_num)?;

            if content_line.name == names::VERSION {
                card.version = VCardVersion::parse(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content_line.value),
                    )
                })?;
            } else {
                card.add_property(into_property(content_line));
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            begin_line,
            "vCard not closed with END:VCARD",
        ))
    }
}

fn into_property(line: ContentLine) -> VCardProperty {
    VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value: line.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_android_export() {
        let input = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=E7=8E=8B;=E5=B0=8F=\r\n\
=E6=98=8E;;;\r\n\
TEL;CELL:5550100\r\n\
END:VCARD\r\n";

        let card = parse_single(input).unwrap();
        assert_eq!(card.version, VCardVersion::V21);
        assert_eq!(card.properties.len(), 2);

        let name = &card.properties[0];
        assert!(name.is_quoted_printable());
        assert_eq!(name.value, "=E7=8E=8B;=E5=B0=8F=E6=98=8E;;;");

        let tel = &card.properties[1];
        assert!(tel.has_type("cell"));
    }

    #[test]
    fn parse_multiple_cards() {
        let input = "\
BEGIN:VCARD\nVERSION:3.0\nFN:A\nEND:VCARD\n\
BEGIN:VCARD\nVERSION:3.0\nFN:B\nEND:VCARD\n";

        let cards = parse(input).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].formatted_name(), Some("B"));
    }

    #[test]
    fn parse_skips_blank_lines_and_preamble() {
        let input = "garbage\n\nBEGIN:VCARD\nFN:A\n\nEND:VCARD\n";
        let cards = parse(input).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].version, VCardVersion::V30);
    }

    #[test]
    fn parse_single_empty_document() {
        let err = parse_single("").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    }
}
