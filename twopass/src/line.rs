use crate::constants::line_regex;

/// The three whitespace-separated columns of a source line. Missing columns
/// are empty strings, anything after the operand is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub label: &'a str,
    pub opcode: &'a str,
    pub operand: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Split a line into columns. Blank lines give `None`.
    pub fn parse(line: &'a str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        line_regex().captures(line).map(|cap| Self {
            label: cap.name("label").map_or("", |m| m.as_str()),
            opcode: cap.name("opcode").map_or("", |m| m.as_str()),
            operand: cap.name("operand").map_or("", |m| m.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(line: &str) -> (&str, &str, &str) {
        let parsed = SourceLine::parse(line).unwrap();
        (parsed.label, parsed.opcode, parsed.operand)
    }

    #[test]
    fn all_columns() {
        assert_eq!(columns("LOOP ADD FIVE"), ("LOOP", "ADD", "FIVE"));
        assert_eq!(columns("LOOP\tADD \t FIVE"), ("LOOP", "ADD", "FIVE"));
    }

    #[test]
    fn missing_label() {
        assert_eq!(columns("    ADD FIVE"), ("", "ADD", "FIVE"));
        assert_eq!(columns("\tRSUB"), ("", "RSUB", ""));
    }

    #[test]
    fn missing_operand() {
        assert_eq!(columns("FIVE WORD"), ("FIVE", "WORD", ""));
        assert_eq!(columns("ALONE"), ("ALONE", "", ""));
    }

    #[test]
    fn trailing_fields_ignored() {
        assert_eq!(columns("A ADD B extra words"), ("A", "ADD", "B"));
        assert_eq!(columns("A ADD B\r"), ("A", "ADD", "B"));
    }

    #[test]
    fn blank_lines() {
        assert_eq!(SourceLine::parse(""), None);
        assert_eq!(SourceLine::parse("   \t"), None);
    }

    #[test]
    fn dot_is_an_ordinary_label() {
        assert_eq!(columns(". ADD 5"), (".", "ADD", "5"));
        assert_eq!(columns("    .note"), ("", ".note", ""));
    }
}
