// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          io::{self, Write},
          sync::{Arc, MutexGuard, PoisonError}};

use crate::{SafeOutputSink, SendOutputSink, StdMutex, ok};

/// The real output channel: the place where output ends up when no level stops it.
///
/// - It is safe to clone, all the clones write to the same resource.
/// - An [`crate::Interceptor`] captures one of these when it is created and never
///   swaps it out.
/// - In tests use [`crate::OutputDeviceExt::new_mock()`] to get one that writes to a
///   [`crate::StdoutMock`].
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeOutputSink,
    pub is_mock: bool,
}

impl Debug for OutputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new_from_writer(io::stdout()) }

    #[must_use]
    pub fn new_stderr() -> Self { Self::new_from_writer(io::stderr()) }

    #[must_use]
    pub fn new_from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
            is_mock: false,
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing. Don't call this again in the same scope
    /// while the guard is alive, it will deadlock.
    ///
    /// A poisoned lock is recovered, since the resource is just a byte sink and can't be
    /// left in an inconsistent state.
    pub fn lock(&self) -> MutexGuard<'_, SendOutputSink> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes the whole `chunk` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] if the resource can't be written to.
    pub fn write_chunk(&self, chunk: &str) -> io::Result<()> {
        let mut resource = self.lock();
        resource.write_all(chunk.as_bytes())?;
        resource.flush()?;
        ok!()
    }
}
