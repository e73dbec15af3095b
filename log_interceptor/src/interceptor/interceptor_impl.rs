// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io,
          sync::{Arc, MutexGuard, PoisonError}};

use crate::{CaptureBuffer, DefaultOptions, InterceptWriter, InterceptorError, Level,
            OutputDevice, StartArgs, StdMutex, ok};

/// Target of the diagnostic events emitted by the [`Interceptor`]. These events are never
/// routed back into the interceptor, see [`crate::create_intercepted_display_layer()`].
pub const INTERCEPTOR_LOG_TARGET: &str = module_path!();

#[derive(Debug, Default)]
struct InterceptorState {
    /// Index 0 is the outermost (oldest) level, the last one is the innermost.
    levels: Vec<Level>,
    /// `true` iff `levels` is not empty. Routing through the levels only happens while
    /// this is set.
    is_overridden: bool,
}

/// The interception stack.
///
/// Output that is written through [`Self::write_chunk()`] (or an [`InterceptWriter`]
/// from [`Self::writer()`]) is handed to the active levels, innermost first. Each level
/// records it, then decides whether to pass it down. Output that gets past the outermost
/// level is written to the real sink, the [`OutputDevice`] given to [`Self::new()`].
/// When no level is active everything goes straight to the real sink.
///
/// This is a handle, clones share the same stack, real sink and defaults.
///
/// # Locking
///
/// Starting, ending and routing a chunk are each a single critical section. A
/// [`crate::DecisionCallback`] runs inside it, so it must not write through this
/// interceptor (that would deadlock). It can use [`Self::direct_write()`] though, which
/// only locks the real sink.
///
/// ```
/// use r3bl_log_interceptor::{Interceptor, OutputDevice, OutputDeviceExt, StartArgs};
///
/// let (device, stdout_mock) = OutputDevice::new_mock();
/// let interceptor = Interceptor::new(device);
///
/// interceptor.start(StartArgs::callback(|raw, _formatted| raw.starts_with("keep")));
/// interceptor.write_chunk("keep me\n").unwrap();
/// interceptor.write_chunk("drop me\n").unwrap();
///
/// assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "keep me\n");
/// assert_eq!(
///     interceptor.end(),
///     Some(vec!["keep me\n".to_string(), "drop me\n".to_string()])
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Interceptor {
    state: Arc<StdMutex<InterceptorState>>,
    real_sink: OutputDevice,
    defaults: DefaultOptions,
}

impl Interceptor {
    /// Creates an interceptor with its own set of [`DefaultOptions`] (all `false`).
    #[must_use]
    pub fn new(real_sink: OutputDevice) -> Self {
        Self::with_defaults(real_sink, DefaultOptions::new())
    }

    #[must_use]
    pub fn with_defaults(real_sink: OutputDevice, defaults: DefaultOptions) -> Self {
        Self {
            state: Arc::new(StdMutex::new(InterceptorState::default())),
            real_sink,
            defaults,
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &DefaultOptions { &self.defaults }

    #[must_use]
    pub fn real_sink(&self) -> &OutputDevice { &self.real_sink }

    /// Returns a new [`std::io::Write`] implementation that routes through this
    /// interceptor.
    #[must_use]
    pub fn writer(&self) -> InterceptWriter { InterceptWriter::new(self.clone()) }

    /// The number of active levels.
    #[must_use]
    pub fn depth(&self) -> usize { self.lock_state().levels.len() }

    #[must_use]
    pub fn is_intercepting(&self) -> bool { self.lock_state().is_overridden }

    fn lock_state(&self) -> MutexGuard<'_, InterceptorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Interceptor {
    /// Starts a new innermost level and returns the new depth.
    ///
    /// The level's options are the current [`DefaultOptions`] merged with the overrides
    /// in `args`. Later changes to the defaults don't affect it.
    pub fn start(&self, args: impl Into<StartArgs>) -> usize {
        let (overrides, callback) = args.into().into_parts();
        let options = self.defaults.resolve(&overrides);

        let (depth, installed_override) = {
            let mut state = self.lock_state();
            let level = Level::new(state.levels.len(), options, callback);
            state.levels.push(level);
            let installed_override = !state.is_overridden;
            state.is_overridden = true;
            (state.levels.len(), installed_override)
        };

        tracing::debug!(
            target: INTERCEPTOR_LOG_TARGET,
            message = "start level",
            depth,
            installed_override
        );

        depth
    }

    /// Routes one chunk of output.
    ///
    /// # Errors
    ///
    /// Returns the [`io::Error`] from the real sink, if the chunk got that far.
    pub fn write_chunk(&self, chunk: &str) -> io::Result<()> {
        let mut state = self.lock_state();

        if !state.is_overridden {
            return self.real_sink.write_chunk(chunk);
        }

        let reached_real_sink = state
            .levels
            .iter_mut()
            .rev()
            .all(|level| level.handle(chunk));

        let result = if reached_real_sink {
            self.real_sink.write_chunk(chunk)
        } else {
            ok!()
        };
        drop(state);

        tracing::trace!(
            target: INTERCEPTOR_LOG_TARGET,
            message = "routed chunk",
            len = chunk.len(),
            reached_real_sink
        );

        result
    }

    /// Writes straight to the real sink, none of the levels see `chunk`.
    ///
    /// # Errors
    ///
    /// Returns the [`io::Error`] from the real sink.
    pub fn direct_write(&self, chunk: &str) -> io::Result<()> {
        self.real_sink.write_chunk(chunk)
    }

    /// Ends the innermost level and returns what it captured. Returns `None` if there is
    /// no active level.
    pub fn end(&self) -> Option<CaptureBuffer> {
        let (level, restored) = {
            let mut state = self.lock_state();
            let level = state.levels.pop()?;
            let restored = state.levels.is_empty();
            if restored {
                state.is_overridden = false;
            }
            (level, restored)
        };

        tracing::debug!(
            target: INTERCEPTOR_LOG_TARGET,
            message = "end level",
            depth = level.depth(),
            restored
        );

        Some(level.into_buffer())
    }

    /// Ends every active level and returns their buffers, outermost first. Returns
    /// `None` if there is no active level.
    ///
    /// A single active level is returned as a one element [`Vec`].
    pub fn end_all(&self) -> Option<Vec<CaptureBuffer>> {
        let levels = {
            let mut state = self.lock_state();
            state.is_overridden = false;
            if state.levels.is_empty() {
                return None;
            }
            std::mem::take(&mut state.levels)
        };

        tracing::debug!(
            target: INTERCEPTOR_LOG_TARGET,
            message = "end all levels",
            count = levels.len()
        );

        Some(levels.into_iter().map(Level::into_buffer).collect())
    }

    /// Like [`Self::end()`], for call sites that use `?`.
    ///
    /// # Errors
    ///
    /// [`InterceptorError::NothingToEnd`] if there is no active level.
    pub fn try_end(&self) -> miette::Result<CaptureBuffer> {
        self.end().ok_or_else(|| InterceptorError::NothingToEnd.into())
    }

    /// Like [`Self::end_all()`], for call sites that use `?`.
    ///
    /// # Errors
    ///
    /// [`InterceptorError::NothingToEnd`] if there is no active level.
    pub fn try_end_all(&self) -> miette::Result<Vec<CaptureBuffer>> {
        self.end_all()
            .ok_or_else(|| InterceptorError::NothingToEnd.into())
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Mutex, thread};

    use serde_json::json;

    use super::*;
    use crate::{FormatResult, OutputDeviceExt, PartialOptions, StdoutMock, assert_eq2};

    fn new_interceptor() -> (Interceptor, StdoutMock) {
        let (device, stdout_mock) = OutputDevice::new_mock();
        (Interceptor::new(device), stdout_mock)
    }

    #[test]
    fn test_writes_go_to_real_sink_without_levels() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.write_chunk("a\n").unwrap();
        assert!(!interceptor.is_intercepting());
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "a\n");
    }

    #[test]
    fn test_single_level_without_pass_down() {
        let (interceptor, stdout_mock) = new_interceptor();
        assert_eq2!(interceptor.start(false), 1);
        assert!(interceptor.is_intercepting());

        interceptor.write_chunk("a\n").unwrap();
        interceptor.write_chunk("b\n").unwrap();

        assert_eq2!(interceptor.end(), Some(vec!["a\n".into(), "b\n".into()]));
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
        assert!(!interceptor.is_intercepting());
    }

    #[test]
    fn test_pass_through_callback() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.start(StartArgs::callback(|_, _| true));

        interceptor.write_chunk("x\n").unwrap();

        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "x\n");
        assert_eq2!(interceptor.end(), Some(vec!["x\n".into()]));
    }

    #[test]
    fn test_callback_receives_every_raw_chunk() {
        let (interceptor, stdout_mock) = new_interceptor();
        let received = Arc::new(Mutex::new(Vec::<String>::new()));
        let received_clone = received.clone();
        interceptor.start(StartArgs::callback(move |raw, _| {
            received_clone.lock().unwrap().push(raw.to_string());
            false
        }));

        interceptor.write_chunk("test1\n").unwrap();
        interceptor.write_chunk("test2\n").unwrap();

        assert_eq2!(interceptor.end(), Some(received.lock().unwrap().clone()));
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_callback_receives_formatted_lines() {
        let (interceptor, _) = new_interceptor();
        let received = Arc::new(Mutex::new(Vec::<FormatResult>::new()));
        let received_clone = received.clone();
        interceptor.start(StartArgs::options_with_callback(
            PartialOptions::new().trim_linebreak(true),
            move |_, formatted| {
                received_clone.lock().unwrap().push(formatted.clone());
                false
            },
        ));

        interceptor.write_chunk("x\n").unwrap();
        interceptor.end();

        let received = received.lock().unwrap();
        assert_eq2!(received.len(), 1);
        assert_eq2!(received[0].lines(), Some(["x".to_string()].as_slice()));
    }

    #[test]
    fn test_nested_levels_record_in_routing_order() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.start(false); // A
        interceptor.start(StartArgs::callback(|_, _| true)); // B

        interceptor.write_chunk("m\n").unwrap();

        assert_eq2!(interceptor.end(), Some(vec!["m\n".into()])); // B
        assert_eq2!(interceptor.end(), Some(vec!["m\n".into()])); // A
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_inner_level_passes_down_to_outer_level() {
        let (interceptor, _) = new_interceptor();
        interceptor.start(()); // level 1
        interceptor.write_chunk("test1\n").unwrap();

        interceptor.start(true); // level 2
        interceptor.write_chunk("test2\n").unwrap();
        interceptor.write_chunk("test3\n").unwrap();

        assert_eq2!(interceptor.depth(), 2);
        interceptor.end();
        assert_eq2!(
            interceptor.end(),
            Some(vec!["test1\n".into(), "test2\n".into(), "test3\n".into()])
        );
    }

    #[test]
    fn test_stop_propagation_mid_stack() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.start(true); // A
        interceptor.start(StartArgs::callback(|_, _| false)); // B
        interceptor.start(true); // C

        interceptor.write_chunk("z\n").unwrap();

        assert_eq2!(
            interceptor.end_all(),
            Some(vec![vec![], vec!["z\n".into()], vec!["z\n".into()]])
        );
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_chunk_that_passes_every_level_reaches_real_sink_once() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.start(true);
        interceptor.start(true);
        interceptor.start(true);

        interceptor.write_chunk("once\n").unwrap();

        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "once\n");
        interceptor.end_all();
    }

    #[test]
    fn test_end_all_returns_buffers_outermost_first() {
        let (interceptor, _) = new_interceptor();
        interceptor.start(()); // level 1
        interceptor.start(true); // level 2
        interceptor.write_chunk("test1\n").unwrap();
        interceptor.start(true); // level 3
        interceptor.write_chunk("test2\n").unwrap();
        interceptor.write_chunk("test3\n").unwrap();

        let all = vec!["test1\n".to_string(), "test2\n".into(), "test3\n".into()];
        assert_eq2!(
            interceptor.end_all(),
            Some(vec![all.clone(), all, vec!["test2\n".into(), "test3\n".into()]])
        );
        assert_eq2!(interceptor.depth(), 0);
    }

    #[test]
    fn test_end_all_with_one_level_is_wrapped() {
        let (interceptor, _) = new_interceptor();
        interceptor.start(json!({}));
        interceptor.write_chunk("test1\n").unwrap();
        interceptor.write_chunk("test2\n").unwrap();
        assert_eq2!(
            interceptor.end_all(),
            Some(vec![vec!["test1\n".into(), "test2\n".into()]])
        );
    }

    #[test]
    fn test_end_without_levels() {
        let (interceptor, stdout_mock) = new_interceptor();
        assert_eq2!(interceptor.end(), None);
        assert_eq2!(interceptor.end(), None);
        assert_eq2!(interceptor.end_all(), None);

        interceptor.write_chunk("still works\n").unwrap();
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "still works\n");
    }

    #[test]
    fn test_try_end_without_levels() {
        let (interceptor, _) = new_interceptor();
        let error = interceptor.try_end().unwrap_err();
        assert_eq2!(
            error.downcast_ref::<InterceptorError>(),
            Some(&InterceptorError::NothingToEnd)
        );
        assert!(interceptor.try_end_all().is_err());

        interceptor.start(());
        interceptor.write_chunk("a").unwrap();
        assert_eq2!(interceptor.try_end().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_real_sink_is_restored_after_any_sequence() {
        let (interceptor, stdout_mock) = new_interceptor();

        interceptor.start(());
        interceptor.start(());
        interceptor.end();
        assert!(interceptor.is_intercepting());
        interceptor.start(());
        interceptor.end();
        interceptor.end();
        assert!(!interceptor.is_intercepting());
        interceptor.write_chunk("1\n").unwrap();

        interceptor.start(());
        interceptor.start(());
        interceptor.end_all();
        assert!(!interceptor.is_intercepting());
        interceptor.write_chunk("2\n").unwrap();

        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "1\n2\n");
    }

    #[test]
    fn test_formatting_round_trip() {
        let (interceptor, _) = new_interceptor();
        interceptor.start(
            PartialOptions::new()
                .strip_color(true)
                .trim_timestamp(true)
                .trim_linebreak(true)
                .split_on_linebreak(true),
        );
        interceptor
            .write_chunk("[12:34:56] \x1b[31mhello\x1b[0m\nworld\n")
            .unwrap();
        assert_eq2!(interceptor.end(), Some(vec!["hello".into(), "world".into()]));
    }

    #[test]
    fn test_levels_start_from_current_defaults() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.defaults().set("passDown", true);

        interceptor.start(());
        interceptor.defaults().reset();
        interceptor.write_chunk("a\n").unwrap();
        interceptor.end();

        // Only the first level saw `passDown: true`.
        interceptor.start(());
        interceptor.write_chunk("b\n").unwrap();
        interceptor.end();

        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "a\n");
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.defaults().set("passDown", true);
        interceptor.start(false);
        interceptor.write_chunk("a\n").unwrap();
        interceptor.end();
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_malformed_json_starts_with_defaults() {
        for value in [json!([1, 2]), json!("yes"), json!(3)] {
            let (interceptor, stdout_mock) = new_interceptor();
            interceptor.start(&value);
            interceptor.write_chunk("kept\n").unwrap();
            assert_eq2!(interceptor.end(), Some(vec!["kept\n".to_string()]));
            assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");

            interceptor.start(value);
            interceptor.write_chunk("kept\n").unwrap();
            interceptor.end();
            assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
        }
    }

    #[test]
    fn test_direct_write_bypasses_levels() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.start(false);
        interceptor.direct_write("direct\n").unwrap();
        assert_eq2!(interceptor.end(), Some(vec![]));
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "direct\n");
    }

    #[test]
    fn test_callback_can_direct_write() {
        let (interceptor, stdout_mock) = new_interceptor();
        let interceptor_clone = interceptor.clone();
        interceptor.start(StartArgs::callback(move |raw, _| {
            interceptor_clone
                .direct_write(&raw.to_uppercase())
                .unwrap();
            false
        }));
        interceptor.write_chunk("shout\n").unwrap();
        interceptor.end();
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "SHOUT\n");
    }

    #[test]
    fn test_writes_from_many_threads_are_all_captured() {
        let (interceptor, stdout_mock) = new_interceptor();
        interceptor.start(false);

        let handles: Vec<_> = (0..4)
            .map(|thread_index| {
                let interceptor = interceptor.clone();
                thread::spawn(move || {
                    for line_index in 0..25 {
                        interceptor
                            .write_chunk(&format!("{thread_index}:{line_index}\n"))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq2!(interceptor.end().map(|it| it.len()), Some(100));
        assert_eq2!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }
}
