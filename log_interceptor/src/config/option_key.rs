// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

/// The named boolean options that every [`crate::Level`] understands. Each one can be
/// parsed from (and displayed as) its camelCase name, eg: `"passDown"`. The snake_case
/// name is accepted when parsing as well.
#[derive(Debug, Display, EnumString, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// Pass intercepted output down to the enclosing level (or the real sink).
    #[strum(to_string = "passDown", serialize = "pass_down")]
    PassDown,
    /// Remove ANSI escape sequences before logging.
    #[strum(to_string = "stripColor", serialize = "strip_color")]
    StripColor,
    /// Remove a leading `[HH:MM:SS]` timestamp before logging.
    #[strum(to_string = "trimTimestamp", serialize = "trim_timestamp")]
    TrimTimestamp,
    /// Remove the trailing linebreak before logging.
    #[strum(to_string = "trimLinebreak", serialize = "trim_linebreak")]
    TrimLinebreak,
    /// Log every line of a chunk as a separate item.
    #[strum(to_string = "splitOnLinebreak", serialize = "split_on_linebreak")]
    SplitOnLinebreak,
}

impl OptionKey {
    /// All the keys that change what gets logged (everything except
    /// [`OptionKey::PassDown`]).
    pub const FORMATTING_KEYS: [OptionKey; 4] = [
        OptionKey::StripColor,
        OptionKey::TrimTimestamp,
        OptionKey::TrimLinebreak,
        OptionKey::SplitOnLinebreak,
    ];
}
