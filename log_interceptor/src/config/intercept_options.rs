// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use crate::OptionKey;

/// Keys that aren't one of the [`OptionKey`]s. They are never interpreted, only carried
/// along so that newer callers can pass options that this version doesn't know about.
pub type ExtraOptions = Map<String, Value>;

/// The fully resolved configuration of one [`crate::Level`]. All options default to
/// `false`.
///
/// Serializes with the camelCase key names (`passDown`, `stripColor`, ...). Unknown keys
/// are preserved in [`Self::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterceptOptions {
    pub pass_down: bool,
    pub strip_color: bool,
    pub trim_timestamp: bool,
    pub trim_linebreak: bool,
    pub split_on_linebreak: bool,
    #[serde(flatten)]
    pub extra: ExtraOptions,
}

impl InterceptOptions {
    #[must_use]
    pub fn get(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::PassDown => self.pass_down,
            OptionKey::StripColor => self.strip_color,
            OptionKey::TrimTimestamp => self.trim_timestamp,
            OptionKey::TrimLinebreak => self.trim_linebreak,
            OptionKey::SplitOnLinebreak => self.split_on_linebreak,
        }
    }

    pub fn set(&mut self, key: OptionKey, value: bool) {
        let field = match key {
            OptionKey::PassDown => &mut self.pass_down,
            OptionKey::StripColor => &mut self.strip_color,
            OptionKey::TrimTimestamp => &mut self.trim_timestamp,
            OptionKey::TrimLinebreak => &mut self.trim_linebreak,
            OptionKey::SplitOnLinebreak => &mut self.split_on_linebreak,
        };
        *field = value;
    }

    /// `true` if any option that changes what gets logged is enabled.
    #[must_use]
    pub fn has_formatting(&self) -> bool {
        OptionKey::FORMATTING_KEYS.iter().any(|key| self.get(*key))
    }

    /// Shallow merge: every field that is set in `overrides` wins, extra keys are
    /// inserted or replaced.
    pub fn apply(&mut self, overrides: &PartialOptions) {
        for (key, value) in overrides.iter_set() {
            self.set(key, value);
        }
        for (key, value) in &overrides.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }

    #[must_use]
    pub fn merged_with(&self, overrides: &PartialOptions) -> Self {
        let mut it = self.clone();
        it.apply(overrides);
        it
    }
}

/// A set of option overrides. Fields that are `None` are taken from the defaults.
///
/// ```
/// use r3bl_log_interceptor::{InterceptOptions, PartialOptions};
///
/// let overrides = PartialOptions::new().pass_down(true).trim_linebreak(true);
/// let options = InterceptOptions::default().merged_with(&overrides);
/// assert!(options.pass_down);
/// assert!(options.trim_linebreak);
/// assert!(!options.strip_color);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialOptions {
    pub pass_down: Option<bool>,
    pub strip_color: Option<bool>,
    pub trim_timestamp: Option<bool>,
    pub trim_linebreak: Option<bool>,
    pub split_on_linebreak: Option<bool>,
    pub extra: ExtraOptions,
}

impl PartialOptions {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn pass_down(self, value: bool) -> Self { self.with(OptionKey::PassDown, value) }

    #[must_use]
    pub fn strip_color(self, value: bool) -> Self {
        self.with(OptionKey::StripColor, value)
    }

    #[must_use]
    pub fn trim_timestamp(self, value: bool) -> Self {
        self.with(OptionKey::TrimTimestamp, value)
    }

    #[must_use]
    pub fn trim_linebreak(self, value: bool) -> Self {
        self.with(OptionKey::TrimLinebreak, value)
    }

    #[must_use]
    pub fn split_on_linebreak(self, value: bool) -> Self {
        self.with(OptionKey::SplitOnLinebreak, value)
    }

    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with(mut self, key: OptionKey, value: bool) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: OptionKey, value: bool) {
        *self.field_mut(key) = Some(value);
    }

    #[must_use]
    pub fn get(&self, key: OptionKey) -> Option<bool> {
        match key {
            OptionKey::PassDown => self.pass_down,
            OptionKey::StripColor => self.strip_color,
            OptionKey::TrimTimestamp => self.trim_timestamp,
            OptionKey::TrimLinebreak => self.trim_linebreak,
            OptionKey::SplitOnLinebreak => self.split_on_linebreak,
        }
    }

    /// Iterate over the known options that have a value.
    pub fn iter_set(&self) -> impl Iterator<Item = (OptionKey, bool)> + '_ {
        OptionKey::iter().filter_map(|key| self.get(key).map(|value| (key, value)))
    }

    fn field_mut(&mut self, key: OptionKey) -> &mut Option<bool> {
        match key {
            OptionKey::PassDown => &mut self.pass_down,
            OptionKey::StripColor => &mut self.strip_color,
            OptionKey::TrimTimestamp => &mut self.trim_timestamp,
            OptionKey::TrimLinebreak => &mut self.trim_linebreak,
            OptionKey::SplitOnLinebreak => &mut self.split_on_linebreak,
        }
    }
}

impl From<InterceptOptions> for PartialOptions {
    fn from(options: InterceptOptions) -> Self {
        Self {
            pass_down: Some(options.pass_down),
            strip_color: Some(options.strip_color),
            trim_timestamp: Some(options.trim_timestamp),
            trim_linebreak: Some(options.trim_linebreak),
            split_on_linebreak: Some(options.split_on_linebreak),
            extra: options.extra,
        }
    }
}
