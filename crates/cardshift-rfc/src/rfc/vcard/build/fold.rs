//! vCard line folding.

/// Maximum line length in octets (not characters) per RFC 6350.
const MAX_LINE_OCTETS: usize = 75;

/// Folds a line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting CRLF + space.
/// Folds at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;
    let mut first_segment = true;

    for c in line.chars() {
        let char_len = c.len_utf8();

        // Account for continuation prefix on subsequent lines
        let effective_max = if first_segment {
            MAX_LINE_OCTETS
        } else {
            MAX_LINE_OCTETS - 1 // Account for the space prefix
        };

        if current_len + char_len > effective_max {
            result.push_str("\r\n ");
            current_len = 1; // The space
            first_segment = false;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Folds a quoted-printable content line with `=` soft line breaks.
///
/// `head` (group, name, parameters) stays on the first line. The value is
/// broken between `=XX` triplets, 75 octets per line plus the `=`. A break
/// never leaves a space or tab at the start of a line, where it would read
/// as a folding continuation.
#[must_use]
pub fn fold_quoted_printable(head: &str, value: &str) -> String {
    let mut result = String::with_capacity(head.len() + 1 + value.len() * 21 / 20);
    result.push_str(head);
    result.push(':');

    let mut current_len = result.len();
    let mut rest = value;

    while let Some(c) = rest.chars().next() {
        let unit_len = match rest.get(..3) {
            Some(triplet) if triplet.starts_with('=') => 3,
            _ => c.len_utf8(),
        };
        let (unit, tail) = rest.split_at(unit_len);

        if current_len > 0
            && current_len + unit.len() > MAX_LINE_OCTETS
            && !unit.starts_with([' ', '\t'])
        {
            result.push_str("=\r\n");
            current_len = 0;
        }

        result.push_str(unit);
        current_len += unit.len();
        rest = tail;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn fold_at_75_octets() {
        let line = "X".repeat(80);
        let folded = fold_line(&line);
        assert!(folded.contains("\r\n "));

        let first_line: String = folded.chars().take_while(|&c| c != '\r').collect();
        assert_eq!(first_line.len(), 75);
    }

    #[test]
    fn fold_respects_utf8() {
        // 日 is 3 bytes in UTF-8
        let line = format!("NOTE:{}", "日".repeat(30));
        let folded = fold_line(&line);

        for part in folded.split("\r\n ") {
            assert!(part.len() <= MAX_LINE_OCTETS);
            assert!(part.chars().all(|c| c == '日' || "NOTE:".contains(c)));
        }
    }

    #[test]
    fn short_quoted_printable_unchanged() {
        assert_eq!(
            fold_quoted_printable("FN;ENCODING=QUOTED-PRINTABLE", "=E7=8E=8B"),
            "FN;ENCODING=QUOTED-PRINTABLE:=E7=8E=8B"
        );
    }

    #[test]
    fn quoted_printable_breaks_between_triplets() {
        let head = "FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE";
        let value = "=E7=8E=8B".repeat(12);
        let folded = fold_quoted_printable(head, &value);

        assert_eq!(folded.replace("=\r\n", ""), format!("{head}:{value}"));

        let lines: Vec<&str> = folded.split("\r\n").collect();
        assert!(lines.len() > 1);
        for line in &lines[..lines.len() - 1] {
            assert!(line.len() <= MAX_LINE_OCTETS + 1);
            let body = line.strip_suffix('=').unwrap();
            // The last triplet on the line is whole.
            assert_eq!(body.as_bytes()[body.len() - 3], b'=');
        }
    }

    #[test]
    fn quoted_printable_never_starts_a_line_with_whitespace() {
        let head = "NOTE;ENCODING=QUOTED-PRINTABLE";
        let value = format!("{}  y{}", "x".repeat(44), "z".repeat(80));
        let folded = fold_quoted_printable(head, &value);

        assert_eq!(folded.replace("=\r\n", ""), format!("{head}:{value}"));
        for line in folded.split("\r\n").skip(1) {
            assert!(!line.starts_with([' ', '\t']));
        }
    }
}
