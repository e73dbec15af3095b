// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const LINEBREAK: char = '\n';

/// Removes exactly one trailing `\n` from `text`, if there is one.
#[must_use]
pub fn trim_linebreak(text: &str) -> &str { text.strip_suffix(LINEBREAK).unwrap_or(text) }

/// Splits `text` into lines on `\n`.
///
/// - If `text` ends with `\n`, the empty segment after it is dropped.
/// - If `trim_breaks` is `false`, `\n` is put back at the end of every line, so that each
///   item is a complete line with its terminator (even the last one, which may not have
///   had one in `text`).
/// - If `trim_breaks` is `true`, lines are returned bare.
///
/// ```
/// use r3bl_log_interceptor::split_on_linebreak;
///
/// assert_eq!(split_on_linebreak("a\nb\n", false), vec!["a\n", "b\n"]);
/// assert_eq!(split_on_linebreak("a\nb\n", true), vec!["a", "b"]);
/// assert_eq!(split_on_linebreak("a", false), vec!["a\n"]);
/// ```
#[must_use]
pub fn split_on_linebreak(text: &str, trim_breaks: bool) -> Vec<String> {
    let mut lines: Vec<&str> = text.split(LINEBREAK).collect();

    if lines.last().is_some_and(|it| it.is_empty()) {
        lines.pop();
    }

    lines
        .into_iter()
        .map(|line| {
            if trim_breaks {
                line.to_string()
            } else {
                format!("{line}{LINEBREAK}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_trim_linebreak() {
        assert_eq2!(trim_linebreak("test tets\n"), "test tets");
        assert_eq2!(trim_linebreak("test\ntets\n\n"), "test\ntets\n");
    }

    #[test]
    fn test_trim_linebreak_returns_same_string() {
        assert_eq2!(trim_linebreak("test tets"), "test tets");
        assert_eq2!(trim_linebreak("test\ntets"), "test\ntets");
        assert_eq2!(trim_linebreak(""), "");
    }

    #[test]
    fn test_split_on_linebreak() {
        assert_eq2!(
            split_on_linebreak("test1\ntest2\n", false),
            vec!["test1\n", "test2\n"]
        );
        assert_eq2!(split_on_linebreak("test1\ntest2\n", true), vec!["test1", "test2"]);
    }

    #[test]
    fn test_split_on_linebreak_single_line() {
        assert_eq2!(split_on_linebreak("test tets", false), vec!["test tets\n"]);
        assert_eq2!(split_on_linebreak("test tets", true), vec!["test tets"]);
    }

    #[test]
    fn test_split_on_linebreak_keeps_inner_empty_lines() {
        assert_eq2!(split_on_linebreak("a\n\nb\n", false), vec!["a\n", "\n", "b\n"]);
        assert_eq2!(split_on_linebreak("a\n\nb\n", true), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_on_linebreak_empty() {
        assert!(split_on_linebreak("", false).is_empty());
        assert_eq2!(split_on_linebreak("\n", false), vec!["\n"]);
    }
}
