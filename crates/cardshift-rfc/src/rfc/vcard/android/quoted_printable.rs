//! Quoted-printable decoding for Android vCard exports.
//!
//! Android writes non-ASCII labels and values as `=XX` octets and wraps
//! long values with `=` soft line breaks. Decoding maps every `=XX` onto a
//! percent escape and percent-decodes the result, so a literal `%` in the
//! source is escaped first.

/// Marker Android prepends to custom label tokens.
const DIALECT_MARKER: &str = "X-";

/// Pattern for a value that may continue over `=` soft line breaks.
pub(super) const SOFT_WRAPPED_VALUE: &str = r"(?:[^\r\n]*=\r?\n)*[^\r\n]*";

/// Decodes a quoted-printable fragment, returning the input unchanged when
/// it cannot be decoded.
///
/// A leading `X-` on the decoded text is stripped.
#[must_use]
pub fn decode(input: &str) -> String {
    try_decode(input).unwrap_or_else(|| input.to_string())
}

/// Decodes a quoted-printable fragment.
///
/// Returns `None` if an escape is not followed by two hex digits or the
/// decoded octets are not valid UTF-8.
#[must_use]
pub fn try_decode(input: &str) -> Option<String> {
    let decoded = try_decode_value(input)?;

    if let Some(rest) = decoded.strip_prefix(DIALECT_MARKER) {
        Some(rest.to_string())
    } else {
        Some(decoded)
    }
}

/// Decodes a quoted-printable property value.
///
/// Same as [`try_decode`] except that a leading `X-` is part of the value.
#[must_use]
pub fn try_decode_value(input: &str) -> Option<String> {
    let escaped = join_soft_breaks(input)
        .replace('%', "%25")
        .replace('=', "%");

    percent_decode(&escaped)
}

/// Removes `=` soft line breaks without decoding anything else.
#[must_use]
pub fn join_soft_breaks(input: &str) -> String {
    input.replace("=\r\n", "").replace("=\n", "")
}

fn percent_decode(input: &str) -> Option<String> {
    if !input.contains('%') {
        return Some(input.to_string());
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let pair = bytes.get(i + 1..i + 3)?;
            let mut octet = [0_u8; 1];
            hex::decode_to_slice(pair, &mut octet).ok()?;
            out.push(octet[0]);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii_escape() {
        assert_eq!(decode("Jo=68n"), "John");
    }

    #[test]
    fn decodes_multibyte_utf8() {
        assert_eq!(decode("=E5=AE=B6"), "家");
    }

    #[test]
    fn lowercase_hex_accepted() {
        assert_eq!(decode("=c3=a9t=c3=a9"), "été");
    }

    #[test]
    fn removes_soft_line_breaks() {
        assert_eq!(decode("Jo=\r\nhn"), "John");
        assert_eq!(decode("Jo=\nhn"), "John");
    }

    #[test]
    fn literal_percent_survives() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("50%=20off"), "50% off");
    }

    #[test]
    fn strips_dialect_marker() {
        assert_eq!(decode("X-=E5=AE=B6"), "家");
        assert_eq!(decode("X-Gym"), "Gym");
    }

    #[test]
    fn value_decoding_keeps_dialect_marker() {
        assert_eq!(try_decode_value("X-ray=40a.b").as_deref(), Some("X-ray@a.b"));
        assert_eq!(try_decode_value("=35=\r\n=35").as_deref(), Some("55"));
        assert!(try_decode_value("=G1").is_none());
    }

    #[test]
    fn passthrough_without_escapes() {
        assert_eq!(decode("plain text"), "plain text");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn malformed_escape_returns_input() {
        assert_eq!(decode("=ZZ"), "=ZZ");
        assert_eq!(decode("trailing="), "trailing=");
        assert!(try_decode("=4").is_none());
    }

    #[test]
    fn invalid_utf8_returns_input() {
        assert_eq!(decode("X-=FF"), "X-=FF");
        assert!(try_decode("=FF").is_none());
    }
}
