// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Options can arrive as loosely typed JSON (from a config file, a script, etc). Nothing
//! in here rejects input: values are coerced, and anything that isn't a JSON object is
//! treated as "no overrides".

use std::str::FromStr;

use serde_json::Value;

use crate::{OptionKey, PartialOptions};

/// Coerces any JSON value to a `bool`:
/// - `null`, `false`, `0`, `""` are `false`.
/// - Everything else (including empty arrays and objects) is `true`.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(it) => *it,
        Value::Number(it) => it.as_f64().is_some_and(|it| it != 0.0 && !it.is_nan()),
        Value::String(it) => !it.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl PartialOptions {
    /// Builds overrides from a JSON object. Known keys (camelCase or snake_case) are
    /// coerced with [`is_truthy()`], unknown keys go into [`PartialOptions::extra`]
    /// untouched.
    ///
    /// Returns `None` if `value` is not an object (arrays, strings, numbers, etc), in
    /// which case the caller should fall back to the defaults.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };

        let mut it = Self::new();
        for (key, value) in map {
            match OptionKey::from_str(key) {
                Ok(option_key) => it.set(option_key, is_truthy(value)),
                Err(_) => {
                    it.extra.insert(key.clone(), value.clone());
                }
            }
        }
        Some(it)
    }
}
