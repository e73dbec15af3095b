// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, filter::filter_fn, registry::LookupSpan};

use crate::{INTERCEPTOR_LOG_TARGET, InterceptWriter, Interceptor};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns a `fmt` layer that writes every event through an [`InterceptWriter`] of
/// `interceptor`, so that `tracing` output lands in the active levels like any other
/// output (and reaches the real sink only if they let it through).
///
/// - One event is one chunk, with a trailing `\n`.
/// - No timestamps, targets, or ANSI colors are written, so the captured lines are easy
///   to compare.
/// - The interceptor's own events (target [`INTERCEPTOR_LOG_TARGET`]) are skipped,
///   they would feed back into the stack.
///
/// This does not initialize the tracing system. Add the layer to a registry and install
/// it, eg: `tracing_subscriber::registry().with(layer).init()`.
pub fn create_intercepted_display_layer<S>(
    level_filter: LevelFilter,
    interceptor: &Interceptor,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let interceptor = interceptor.clone();
    let tracing_writer = move || -> InterceptWriter { interceptor.writer() };

    Box::new(
        tracing_subscriber::fmt::layer()
            .without_time()
            .with_target(false)
            .with_ansi(false)
            .with_writer(tracing_writer)
            .with_filter(level_filter)
            .with_filter(filter_fn(|metadata| {
                metadata.target() != INTERCEPTOR_LOG_TARGET
            })),
    )
}
