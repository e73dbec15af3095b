// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{str::FromStr,
          sync::{Arc, MutexGuard, PoisonError}};

use serde_json::Value;

use crate::{InterceptOptions, OptionKey, PartialOptions, StdMutex};

/// The ways the defaults can be changed, see [`DefaultOptions::configure()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigureArgs {
    /// Set one option by name, eg: `("passDown", true)`.
    Set(String, bool),
    /// Shallow merge a set of overrides.
    Merge(PartialOptions),
    /// Shallow merge a loosely typed JSON object, see [`PartialOptions::from_json()`].
    Json(Value),
}

impl From<(&str, bool)> for ConfigureArgs {
    fn from((name, value): (&str, bool)) -> Self { Self::Set(name.to_string(), value) }
}

impl From<(OptionKey, bool)> for ConfigureArgs {
    fn from((key, value): (OptionKey, bool)) -> Self { Self::Set(key.to_string(), value) }
}

impl From<PartialOptions> for ConfigureArgs {
    fn from(it: PartialOptions) -> Self { Self::Merge(it) }
}

impl From<Value> for ConfigureArgs {
    fn from(it: Value) -> Self { Self::Json(it) }
}

/// The default option set that every new [`crate::Level`] starts from.
///
/// This is a handle, cloning it is cheap and all the clones share the same options.
/// - The [`crate::Interceptor`] only ever reads it (when a level is started).
/// - It is only changed via [`Self::configure()`], [`Self::set()`], [`Self::set_key()`],
///   [`Self::merge()`] and [`Self::reset()`]. Levels that are already running are not
///   affected.
///
/// The process wide instance is available via [`crate::global_interceptor::defaults()`].
#[derive(Debug, Clone, Default)]
pub struct DefaultOptions {
    inner: Arc<StdMutex<InterceptOptions>>,
}

impl DefaultOptions {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn new_with(options: InterceptOptions) -> Self {
        Self {
            inner: Arc::new(StdMutex::new(options)),
        }
    }

    /// Returns a copy of the current defaults.
    #[must_use]
    pub fn get(&self) -> InterceptOptions { self.lock().clone() }

    /// Returns the current defaults merged with `overrides`. The defaults themselves are
    /// not changed.
    #[must_use]
    pub fn resolve(&self, overrides: &PartialOptions) -> InterceptOptions {
        self.lock().merged_with(overrides)
    }

    /// Returns `true` if the defaults were changed.
    pub fn configure(&self, args: impl Into<ConfigureArgs>) -> bool {
        match args.into() {
            ConfigureArgs::Set(name, value) => self.set(&name, value),
            ConfigureArgs::Merge(partial) => {
                self.merge(&partial);
                true
            }
            ConfigureArgs::Json(value) => self.merge_json(&value),
        }
    }

    /// Sets one option by name. Names that aren't an [`OptionKey`] are stored as extra
    /// options. Returns `false` (and changes nothing) for a blank name.
    pub fn set(&self, name: &str, value: bool) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let mut options = self.lock();
        match OptionKey::from_str(name) {
            Ok(key) => options.set(key, value),
            Err(_) => {
                options.extra.insert(name.to_string(), Value::Bool(value));
            }
        }
        true
    }

    pub fn set_key(&self, key: OptionKey, value: bool) { self.lock().set(key, value); }

    pub fn merge(&self, overrides: &PartialOptions) { self.lock().apply(overrides); }

    /// Merges a loosely typed JSON object, see [`PartialOptions::from_json()`]. Returns
    /// `false` (and changes nothing) if `value` is not an object.
    pub fn merge_json(&self, value: &Value) -> bool {
        match PartialOptions::from_json(value) {
            Some(overrides) => {
                self.merge(&overrides);
                true
            }
            None => false,
        }
    }

    /// Puts every option back to `false` and drops all extra options.
    pub fn reset(&self) { *self.lock() = InterceptOptions::default(); }

    fn lock(&self) -> MutexGuard<'_, InterceptOptions> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use serde_json::json;

    #[test]
    fn test_set_by_name() {
        let defaults = DefaultOptions::new();
        assert!(defaults.configure(("passDown", true)));
        assert!(defaults.configure((OptionKey::TrimLinebreak, true)));
        assert!(defaults.get().pass_down);
        assert!(defaults.get().trim_linebreak);
    }

    #[test]
    fn test_set_unknown_name_is_kept_as_extra() {
        let defaults = DefaultOptions::new();
        assert!(defaults.set("colorizeLevel", true));
        assert_eq2!(defaults.get().extra.get("colorizeLevel"), Some(&json!(true)));
    }

    #[test]
    fn test_set_blank_name_fails() {
        let defaults = DefaultOptions::new();
        assert!(!defaults.set("  ", true));
        assert_eq2!(defaults.get(), InterceptOptions::default());
    }

    #[test]
    fn test_merge_partial() {
        let defaults = DefaultOptions::new();
        assert!(defaults.configure(PartialOptions::new().strip_color(true)));
        assert!(defaults.configure(PartialOptions::new().pass_down(true)));
        let options = defaults.get();
        assert!(options.strip_color);
        assert!(options.pass_down);
    }

    #[test]
    fn test_merge_json() {
        let defaults = DefaultOptions::new();
        assert!(defaults.configure(json!({ "splitOnLinebreak": true })));
        assert!(!defaults.configure(json!(["splitOnLinebreak"])));
        assert!(defaults.get().split_on_linebreak);
    }

    #[test]
    fn test_resolve_does_not_change_defaults() {
        let defaults = DefaultOptions::new();
        let resolved = defaults.resolve(&PartialOptions::new().pass_down(true));
        assert!(resolved.pass_down);
        assert!(!defaults.get().pass_down);
    }

    #[test]
    fn test_clones_share_state_and_reset() {
        let defaults = DefaultOptions::new();
        let clone = defaults.clone();
        clone.set_key(OptionKey::TrimTimestamp, true);
        assert!(defaults.get().trim_timestamp);

        defaults.reset();
        assert_eq2!(clone.get(), InterceptOptions::default());
    }
}
