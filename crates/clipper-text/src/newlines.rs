use regex::Regex;
use std::sync::LazyLock;

/// Compiled once on first use, read-only afterwards.
static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is a valid regex"));

/// Collapse every run of newlines into one and strip leading and trailing
/// newlines. Other whitespace is left alone.
pub fn collapse_newlines(message: &str) -> String {
    NEWLINE_RUNS
        .replace_all(message.trim_matches('\n'), "\n")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse_newlines("\n\na\n\n\nb\n"), "a\nb");
    }

    #[test]
    fn test_single_newlines_untouched() {
        assert_eq!(collapse_newlines("a\nb\nc"), "a\nb\nc");
    }

    #[test]
    fn test_other_whitespace_kept() {
        assert_eq!(collapse_newlines("  a \n\n\t b  "), "  a \n\t b  ");
    }

    #[test]
    fn test_only_newlines() {
        assert_eq!(collapse_newlines("\n\n\n"), "");
        assert_eq!(collapse_newlines(""), "");
    }
}
