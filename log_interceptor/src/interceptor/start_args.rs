// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use serde_json::Value;

use crate::{DecisionCallback, FormatResult, PartialOptions};

/// Everything that [`crate::Interceptor::start()`] accepts. Most of the time you don't
/// build this directly, the [`From`] impls let you pass:
/// - `()` for the defaults.
/// - `true` or `false` for the defaults with `pass_down` set.
/// - a [`PartialOptions`] to override some of the defaults.
/// - a [`serde_json::Value`] with loosely typed options.
///
/// Use [`StartArgs::callback()`] or [`StartArgs::options_with_callback()`] to attach a
/// [`DecisionCallback`].
#[derive(Default)]
pub enum StartArgs {
    #[default]
    Default,
    Options(PartialOptions),
    CallbackOnly(DecisionCallback),
    PassdownFlag(bool),
    OptionsWithCallback(PartialOptions, DecisionCallback),
    /// A JSON object is read with [`PartialOptions::from_json()`], a JSON bool is treated
    /// like [`Self::PassdownFlag`], anything else means the defaults.
    Json(Value),
}

impl StartArgs {
    pub fn callback(
        callback: impl FnMut(&str, &FormatResult) -> bool + Send + 'static,
    ) -> Self {
        Self::CallbackOnly(Box::new(callback))
    }

    pub fn options_with_callback(
        options: PartialOptions,
        callback: impl FnMut(&str, &FormatResult) -> bool + Send + 'static,
    ) -> Self {
        Self::OptionsWithCallback(options, Box::new(callback))
    }

    /// Normalizes the arguments into the overrides (to be merged with the defaults) and
    /// the optional callback.
    #[must_use]
    pub fn into_parts(self) -> (PartialOptions, Option<DecisionCallback>) {
        match self {
            Self::Default => (PartialOptions::new(), None),
            Self::Options(options) => (options, None),
            Self::CallbackOnly(callback) => (PartialOptions::new(), Some(callback)),
            Self::PassdownFlag(flag) => (PartialOptions::new().pass_down(flag), None),
            Self::OptionsWithCallback(options, callback) => (options, Some(callback)),
            Self::Json(value) => (json_to_overrides(&value), None),
        }
    }
}

fn json_to_overrides(value: &Value) -> PartialOptions {
    match value {
        Value::Bool(flag) => PartialOptions::new().pass_down(*flag),
        _ => PartialOptions::from_json(value).unwrap_or_default(),
    }
}

impl Debug for StartArgs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Options(options) => f.debug_tuple("Options").field(options).finish(),
            Self::CallbackOnly(_) => write!(f, "CallbackOnly(..)"),
            Self::PassdownFlag(flag) => f.debug_tuple("PassdownFlag").field(flag).finish(),
            Self::OptionsWithCallback(options, _) => f
                .debug_tuple("OptionsWithCallback")
                .field(options)
                .finish_non_exhaustive(),
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
        }
    }
}

impl From<()> for StartArgs {
    fn from((): ()) -> Self { Self::Default }
}

impl From<bool> for StartArgs {
    fn from(flag: bool) -> Self { Self::PassdownFlag(flag) }
}

impl From<PartialOptions> for StartArgs {
    fn from(options: PartialOptions) -> Self { Self::Options(options) }
}

impl From<DecisionCallback> for StartArgs {
    fn from(callback: DecisionCallback) -> Self { Self::CallbackOnly(callback) }
}

impl From<(PartialOptions, DecisionCallback)> for StartArgs {
    fn from((options, callback): (PartialOptions, DecisionCallback)) -> Self {
        Self::OptionsWithCallback(options, callback)
    }
}

impl From<Value> for StartArgs {
    fn from(value: Value) -> Self { Self::Json(value) }
}

impl From<&Value> for StartArgs {
    fn from(value: &Value) -> Self { Self::Json(value.clone()) }
}
