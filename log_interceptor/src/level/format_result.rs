// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Everything a [`crate::Level`] has captured, in order. Handed to the caller (moved
/// out) when the level ends.
pub type CaptureBuffer = Vec<String>;

/// Most chunks are a single line.
pub type FormattedLines = SmallVec<[String; 2]>;

/// What [`crate::Level::format_and_log()`] did with a chunk. This is passed to the
/// decision callback along with the raw chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatResult {
    /// The level has no formatting options enabled, the raw chunk was logged as is.
    Unformatted,
    /// The formatted item(s) that were logged. One item per line when
    /// `split_on_linebreak` is on, otherwise exactly one.
    Formatted(FormattedLines),
}

impl FormatResult {
    #[must_use]
    pub fn is_formatted(&self) -> bool { matches!(self, Self::Formatted(_)) }

    /// The formatted lines, or `None` if no formatting was applied.
    #[must_use]
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Self::Unformatted => None,
            Self::Formatted(lines) => Some(lines.as_slice()),
        }
    }
}
