//! vCard escaping for serialization.

use std::borrow::Cow;

/// Escapes a parameter value for vCard serialization.
///
/// Uses RFC 6868 caret encoding for special characters.
/// Returns `(value, needs_quotes)`.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => {
                result.push_str("^'");
                needs_quotes = true;
            }
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {
                // Skip other control characters
            }
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}

/// Makes a stored property value safe to write on one content line.
///
/// Values are kept in wire form, so only line breaks need attention:
/// quoted-printable values encode them as octets, others use `\n`.
#[must_use]
pub fn escape_raw_value(value: &str, quoted_printable: bool) -> Cow<'_, str> {
    if !value.contains(['\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut result = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match (c, quoted_printable) {
            ('\r', true) => result.push_str("=0D"),
            ('\n', true) => result.push_str("=0A"),
            ('\r', false) => {}
            ('\n', false) => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_param_no_quotes() {
        let (val, needs_quotes) = escape_param_value("simple");
        assert_eq!(val, "simple");
        assert!(!needs_quotes);
    }

    #[test]
    fn escape_param_with_colon() {
        let (val, needs_quotes) = escape_param_value("value:with:colons");
        assert_eq!(val, "value:with:colons");
        assert!(needs_quotes);
    }

    #[test]
    fn escape_param_with_quote_and_caret() {
        let (val, needs_quotes) = escape_param_value("say \"a^b\"");
        assert_eq!(val, "say ^'a^^b^'");
        assert!(needs_quotes);
    }

    #[test]
    fn raw_value_without_breaks_is_borrowed() {
        assert!(matches!(escape_raw_value("a\\,b", false), Cow::Borrowed("a\\,b")));
    }

    #[test]
    fn raw_value_line_breaks() {
        assert_eq!(escape_raw_value("one\r\ntwo", false), "one\\ntwo");
        assert_eq!(escape_raw_value("one\r\ntwo", true), "one=0D=0Atwo");
    }
}
