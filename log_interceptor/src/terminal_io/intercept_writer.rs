// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use crate::{Interceptor, ok};

/// Cloneable object that implements [`Write`] and routes everything written to it
/// through an [`Interceptor`]. Create one with [`Interceptor::writer()`].
///
/// # Nothing is routed without terminating with a newline, unless you call [`InterceptWriter::flush()`]
///
/// Bytes are buffered until the buffer ends with `\n`, then the whole buffer is routed as
/// one chunk. So `writeln!(writer, "{a} {b}")`, which issues several small writes, ends
/// up as a single `"a b\n"` item in the capture buffers.
///
/// Bytes that aren't valid UTF-8 are replaced with `U+FFFD`.
#[derive(Debug)]
pub struct InterceptWriter {
    /// Holds the bytes that haven't been routed yet.
    pub buffer: Vec<u8>,
    interceptor: Interceptor,
}

impl InterceptWriter {
    #[must_use]
    pub fn new(interceptor: Interceptor) -> Self {
        Self {
            buffer: Vec::new(),
            interceptor,
        }
    }

    fn route_buffer(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return ok!();
        }
        let bytes = std::mem::take(&mut self.buffer);
        self.interceptor
            .write_chunk(&String::from_utf8_lossy(&bytes))
    }
}

/// Every clone gets its own (empty) buffer, but routes through the same [`Interceptor`].
impl Clone for InterceptWriter {
    fn clone(&self) -> Self { Self::new(self.interceptor.clone()) }
}

impl Write for InterceptWriter {
    fn write(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(payload);

        if self.buffer.ends_with(b"\n") {
            self.route_buffer()?;
        }

        Ok(payload.len())
    }

    fn flush(&mut self) -> io::Result<()> { self.route_buffer() }
}

/// Whatever is left in the buffer is routed when the writer goes away.
impl Drop for InterceptWriter {
    fn drop(&mut self) { self.route_buffer().ok(); }
}
