// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod default_options;
pub mod intercept_options;
pub mod json_coercion;
pub mod option_key;

// Re-export.
pub use default_options::*;
pub use intercept_options::*;
pub use json_coercion::*;
pub use option_key::*;
