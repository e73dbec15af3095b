// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The process wide [`Interceptor`], created on first use.
//!
//! - Its real sink is the process's `stdout` ([`OutputDevice::new_stdout()`]).
//! - Its defaults are the process wide [`DefaultOptions`], see [`defaults()`] and
//!   [`configure()`]. They start out all `false`, and [`DefaultOptions::reset()`] puts
//!   them back there.
//!
//! Code that wants its output to be interceptable writes through [`writer()`] (or
//! [`write_chunk()`]) instead of directly to `stdout`.
//!
//! ```no_run
//! use std::io::Write;
//! use r3bl_log_interceptor::global_interceptor;
//!
//! global_interceptor::start(false);
//! writeln!(global_interceptor::writer(), "log 1").unwrap();
//! writeln!(global_interceptor::writer(), "log 2").unwrap();
//! assert_eq!(
//!     global_interceptor::end(),
//!     Some(vec!["log 1\n".to_string(), "log 2\n".to_string()])
//! );
//! ```

use std::{io, sync::LazyLock};

use crate::{CaptureBuffer, ConfigureArgs, DefaultOptions, InterceptWriter, Interceptor,
            OutputDevice, StartArgs};

static GLOBAL_DEFAULT_OPTIONS: LazyLock<DefaultOptions> =
    LazyLock::new(DefaultOptions::new);

static GLOBAL_INTERCEPTOR: LazyLock<Interceptor> = LazyLock::new(|| {
    Interceptor::with_defaults(OutputDevice::new_stdout(), GLOBAL_DEFAULT_OPTIONS.clone())
});

/// Returns a handle to the process wide interceptor.
#[must_use]
pub fn get() -> Interceptor { GLOBAL_INTERCEPTOR.clone() }

/// See [`Interceptor::start()`].
pub fn start(args: impl Into<StartArgs>) -> usize { GLOBAL_INTERCEPTOR.start(args) }

/// See [`Interceptor::end()`].
pub fn end() -> Option<CaptureBuffer> { GLOBAL_INTERCEPTOR.end() }

/// See [`Interceptor::end_all()`].
pub fn end_all() -> Option<Vec<CaptureBuffer>> { GLOBAL_INTERCEPTOR.end_all() }

/// See [`Interceptor::write_chunk()`].
///
/// # Errors
///
/// Returns the [`io::Error`] from `stdout`, if the chunk got that far.
pub fn write_chunk(chunk: &str) -> io::Result<()> { GLOBAL_INTERCEPTOR.write_chunk(chunk) }

/// Writes to `stdout`, bypassing every active level.
///
/// # Errors
///
/// Returns the [`io::Error`] from `stdout`.
pub fn direct_write(chunk: &str) -> io::Result<()> {
    GLOBAL_INTERCEPTOR.direct_write(chunk)
}

#[must_use]
pub fn writer() -> InterceptWriter { GLOBAL_INTERCEPTOR.writer() }

#[must_use]
pub fn depth() -> usize { GLOBAL_INTERCEPTOR.depth() }

#[must_use]
pub fn is_intercepting() -> bool { GLOBAL_INTERCEPTOR.is_intercepting() }

/// The process wide defaults. Every level started on the process wide interceptor
/// resolves its options from these.
#[must_use]
pub fn defaults() -> DefaultOptions { GLOBAL_DEFAULT_OPTIONS.clone() }

/// Changes the process wide defaults, see [`DefaultOptions::configure()`]. Returns
/// `false` if nothing was changed.
///
/// ```no_run
/// use r3bl_log_interceptor::{OptionKey, global_interceptor};
/// use serde_json::json;
///
/// global_interceptor::configure(("trimTimestamp", true));
/// global_interceptor::configure((OptionKey::StripColor, true));
/// global_interceptor::configure(json!({ "splitOnLinebreak": true }));
/// ```
pub fn configure(args: impl Into<ConfigureArgs>) -> bool {
    GLOBAL_DEFAULT_OPTIONS.configure(args)
}
