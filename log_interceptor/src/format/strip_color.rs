// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Tests whether the given text contains an ANSI escape sequence.
#[must_use]
pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}

/// Removes all ANSI escape sequences (colors, cursor movement, etc) from `text`. It is
/// safe to use on multi line text, and plain text is returned as is.
#[must_use]
pub fn strip_color(text: &str) -> String {
    if !contains_ansi_escape_sequence(text) {
        return text.to_string();
    }
    strip_ansi_escapes::strip_str(text)
}
