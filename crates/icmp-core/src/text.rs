/// Stand-in for records whose text element is empty.
pub const NO_DESCRIPTION: &str = "N/A - No description in spec";

/// Replace every line break (`\r\n`, `\n`, `\r`) with a single space.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Newline-normalized, trimmed text, or [`NO_DESCRIPTION`] when nothing is left.
pub fn normalize_text(text: &str) -> String {
    let normalized = normalize_newlines(text);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_wrapped_lines() {
        assert_eq!(
            normalize_text("  Destination\nUnreachable\r\n"),
            "Destination Unreachable"
        );
        assert_eq!(normalize_newlines("a\r\nb\rc"), "a b c");
    }

    #[test]
    fn falls_back_for_blank_text() {
        assert_eq!(normalize_text(""), NO_DESCRIPTION);
        assert_eq!(normalize_text(" \n\t "), NO_DESCRIPTION);
    }
}
