// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod global_interceptor;
pub mod interceptor_error;
pub mod interceptor_impl;
pub mod start_args;

// Re-export. The free functions in `global_interceptor` are meant to be called with their
// module prefix, eg: `global_interceptor::start(true)`, so they are not re-exported.
pub use interceptor_error::*;
pub use interceptor_impl::*;
pub use start_args::*;
