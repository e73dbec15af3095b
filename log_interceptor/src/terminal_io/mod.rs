// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Private modules (hide internal structure).
mod intercept_writer;
mod output_device;
mod terminal_io_type_aliases;

// Re-exports for flat public API.
pub use intercept_writer::*;
pub use output_device::*;
pub use terminal_io_type_aliases::*;
