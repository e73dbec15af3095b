// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Introduction
//!
//! This crate intercepts text output that is headed for the process's output channel
//! (normally `stdout`), captures it, optionally reshapes it, and lets each nested
//! interception session decide whether the output should still reach the real channel
//! (or the enclosing session).
//!
//! Sessions are called *levels*. They live on a stack inside an [`Interceptor`]:
//!
//! ```text
//!  chunk ──► level 2 (innermost) ──pass down?──► level 1 ──pass down?──► level 0
//!                                                                          │
//!                                               real sink (stdout) ◄───────┘
//! ```
//!
//! - Every level a chunk reaches records it in its own buffer, so each session always
//!   has full fidelity.
//! - A level that returns `false` from [`Level::handle()`] stops the chunk. Outer levels
//!   and the real sink never see it.
//! - When the last level ends, writes go straight to the real sink again.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Introduction](#introduction)
//! - [How to use it](#how-to-use-it)
//! - [Formatting options](#formatting-options)
//! - [Process wide interceptor](#process-wide-interceptor)
//! - [Capturing tracing output](#capturing-tracing-output)
//!
//! <!-- /TOC -->
//!
//! # How to use it
//!
//! Output is routed through an [`InterceptWriter`], a [`std::io::Write`] implementation
//! that you hand to the code whose output you want to capture.
//!
//! ```
//! use std::io::Write;
//! use r3bl_log_interceptor::{Interceptor, OutputDevice, OutputDeviceExt};
//!
//! let (device, stdout_mock) = OutputDevice::new_mock();
//! let interceptor = Interceptor::new(device);
//! let mut writer = interceptor.writer();
//!
//! // Level 0 swallows everything.
//! interceptor.start(false);
//! writeln!(writer, "log 1").unwrap();
//!
//! // Level 1 passes everything down to level 0.
//! interceptor.start(true);
//! writeln!(writer, "log 2").unwrap();
//!
//! assert_eq!(
//!     interceptor.end_all(),
//!     Some(vec![
//!         vec!["log 1\n".to_string(), "log 2\n".to_string()],
//!         vec!["log 2\n".to_string()],
//!     ])
//! );
//! assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
//! ```
//!
//! # Formatting options
//!
//! Each level resolves its [`InterceptOptions`] from the interceptor's
//! [`DefaultOptions`] merged with the [`PartialOptions`] passed to
//! [`Interceptor::start()`]. The formatting options are applied in a fixed order, see
//! [`Level::format_and_log()`].
//!
//! ```
//! use std::io::Write;
//! use r3bl_log_interceptor::{Interceptor, OutputDevice, OutputDeviceExt, PartialOptions};
//!
//! let (device, _stdout_mock) = OutputDevice::new_mock();
//! let interceptor = Interceptor::new(device);
//! interceptor.start(
//!     PartialOptions::new()
//!         .strip_color(true)
//!         .trim_timestamp(true)
//!         .split_on_linebreak(true),
//! );
//! interceptor
//!     .write_chunk("[12:00:00] \x1b[31ma\x1b[0m\n[12:00:01] b\n")
//!     .unwrap();
//! assert_eq!(
//!     interceptor.end(),
//!     Some(vec!["a\n".to_string(), "b\n".to_string()])
//! );
//! ```
//!
//! # Process wide interceptor
//!
//! The [`global_interceptor`] module wraps a lazily created [`Interceptor`] which writes
//! to the real `stdout`, and uses the process wide [`DefaultOptions`].
//!
//! # Capturing tracing output
//!
//! [`create_intercepted_display_layer()`] builds a [`tracing_subscriber`] layer whose
//! output goes through an [`InterceptWriter`], so `tracing` events end up in the active
//! levels just like any other output.

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod config;
pub mod decl_macros;
pub mod format;
pub mod interceptor;
pub mod level;
pub mod log;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use config::*;
pub use format::*;
pub use interceptor::*;
pub use level::*;
pub use log::*;
pub use terminal_io::*;
pub use test_fixtures::*;
