// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure, stateless string transforms used by [`crate::Level::format_and_log()`].

// Attach sources.
pub mod linebreak;
pub mod strip_color;
pub mod trim_timestamp;

// Re-export.
pub use linebreak::*;
pub use strip_color::*;
pub use trim_timestamp::*;
