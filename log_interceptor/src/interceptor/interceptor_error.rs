// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors returned by the `try_*` variants of the [`crate::Interceptor`] operations. The
/// plain variants ([`crate::Interceptor::end()`], [`crate::Interceptor::end_all()`])
/// return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InterceptorError {
    /// `end` or `end_all` was called while no level was active.
    #[error("There is no active interception level to end")]
    #[diagnostic(
        code(r3bl_log_interceptor::nothing_to_end),
        help("Every `end()` has to be paired with an earlier `start()`")
    )]
    NothingToEnd,
}
