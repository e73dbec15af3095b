// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod format_result;
pub mod level_impl;

// Re-export.
pub use format_result::*;
pub use level_impl::*;
