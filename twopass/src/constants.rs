use once_cell::sync::OnceCell;
use regex::Regex;

/// Bytes taken by every instruction and by `WORD`.
pub const WORD_SIZE: u32 = 3;

/// Placeholder operand for instructions whose argument resolves to nothing.
pub const DEFAULT_OPERAND: &str = "0000";

/// Tag carried by the terminal intermediate record.
pub const END_TAG: &str = "END";

pub static LINE_REGEX: OnceCell<Regex> = OnceCell::new();
pub static LABEL_REGEX: OnceCell<Regex> = OnceCell::new();

// A line starting with blanks has an empty label column.
static LINE_REGEX_PATTERN: &str =
    r#"^(?P<label>\S*)\s*(?P<opcode>\S*)\s*(?P<operand>\S*)"#;
static LABEL_REGEX_PATTERN: &str = r#"^[A-Za-z][A-Za-z0-9_]*$"#;

pub fn line_regex() -> &'static Regex {
    LINE_REGEX.get_or_init(|| Regex::new(LINE_REGEX_PATTERN).expect("Invalid line regex"))
}

pub fn label_regex() -> &'static Regex {
    LABEL_REGEX.get_or_init(|| Regex::new(LABEL_REGEX_PATTERN).expect("Invalid label regex"))
}

pub fn is_valid_label(label: &str) -> bool {
    label_regex().is_match(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_pattern() {
        assert!(is_valid_label("LOOP"));
        assert!(is_valid_label("a1_B"));
        assert!(is_valid_label("X"));
        assert!(!is_valid_label(""));
        assert!(!is_valid_label("1ABC"));
        assert!(!is_valid_label("_ABC"));
        assert!(!is_valid_label("AB-C"));
        assert!(!is_valid_label(".comment"));
    }
}
