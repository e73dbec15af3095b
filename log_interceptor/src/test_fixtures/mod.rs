// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures to test output "end to end": an [`OutputDevice`](crate::OutputDevice) that
//! writes into an in memory buffer instead of `stdout`.

// Attach sources.
pub mod output_device_ext;
pub mod stdout_mock;

// Re-export.
pub use output_device_ext::*;
pub use stdout_mock::*;
