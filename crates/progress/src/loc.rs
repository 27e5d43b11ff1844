//! Lines-of-code counting for attached artifacts.

/// Count the non-blank lines in a code artifact.
///
/// Lines are split on newlines; a line counts when it has any
/// non-whitespace content, so CRLF endings and blank separator lines are
/// both handled. `None` counts as zero.
pub fn lines_of_code(text: Option<&str>) -> usize {
    match text {
        Some(code) => code
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .count(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_non_blank_lines() {
        assert_eq!(lines_of_code(Some("a\n\nb\n")), 2);
    }

    #[test]
    fn test_missing_text_is_zero() {
        assert_eq!(lines_of_code(None), 0);
        assert_eq!(lines_of_code(Some("")), 0);
        assert_eq!(lines_of_code(Some("   \n\t\n")), 0);
    }

    #[test]
    fn test_crlf_endings() {
        assert_eq!(lines_of_code(Some("int x = 0;\r\n\r\nreturn x;\r\n")), 2);
    }
}
