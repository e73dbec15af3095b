// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{borrow::Cow,
          fmt::{Debug, Formatter}};

use crate::{CaptureBuffer, FormatResult, FormattedLines, InterceptOptions,
            split_on_linebreak, strip_color, trim_linebreak, trim_timestamp};

/// Decides whether an intercepted chunk is passed down to the enclosing level (or the
/// real sink). It receives the raw chunk and what [`Level::format_and_log()`] made of it.
/// Its return value replaces [`InterceptOptions::pass_down`].
///
/// It runs while the [`crate::Interceptor`]'s stack is locked. It must not write through
/// that interceptor: no [`crate::Interceptor::write_chunk()`], no
/// [`crate::InterceptWriter`], and no `tracing` events if a
/// [`crate::create_intercepted_display_layer()`] layer for it is installed. Any of these
/// deadlocks. Use [`crate::Interceptor::direct_write()`] to reach the real sink instead.
pub type DecisionCallback = Box<dyn FnMut(&str, &FormatResult) -> bool + Send>;

/// One nested interception session.
///
/// A level is active while it is on an [`crate::Interceptor`]'s stack. It doesn't know
/// about the other levels, the interceptor decides which chunks it sees (via
/// [`Self::handle()`]) and takes its buffer when it ends (via [`Self::into_buffer()`]).
pub struct Level {
    depth: usize,
    options: InterceptOptions,
    callback: Option<DecisionCallback>,
    buffer: CaptureBuffer,
    has_formatting: bool,
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Level")
            .field("depth", &self.depth)
            .field("options", &self.options)
            .field("has_callback", &self.callback.is_some())
            .field("buffer", &self.buffer)
            .field("has_formatting", &self.has_formatting)
            .finish()
    }
}

impl Level {
    /// `depth` is the number of levels that were already active when this one started.
    #[must_use]
    pub fn new(
        depth: usize,
        options: InterceptOptions,
        callback: Option<DecisionCallback>,
    ) -> Self {
        let has_formatting = options.has_formatting();
        Self {
            depth,
            options,
            callback,
            buffer: CaptureBuffer::new(),
            has_formatting,
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize { self.depth }

    #[must_use]
    pub fn options(&self) -> &InterceptOptions { &self.options }

    #[must_use]
    pub fn has_formatting(&self) -> bool { self.has_formatting }

    #[must_use]
    pub fn has_callback(&self) -> bool { self.callback.is_some() }

    #[must_use]
    pub fn buffer(&self) -> &[String] { &self.buffer }

    /// Ends the level, handing over everything it captured.
    #[must_use]
    pub fn into_buffer(self) -> CaptureBuffer { self.buffer }

    pub fn add_to_log(&mut self, text: impl Into<String>) { self.buffer.push(text.into()); }

    /// Formats `chunk` and adds the result to the buffer.
    ///
    /// Without formatting options the raw chunk is logged and
    /// [`FormatResult::Unformatted`] is returned. Otherwise the options are applied in
    /// this order:
    /// 1. `strip_color` on the whole chunk.
    /// 2. With `split_on_linebreak`: split into lines (bare lines if `trim_linebreak`),
    ///    then `trim_timestamp` each line. Every line is logged separately.
    /// 3. Without it: `trim_timestamp` then `trim_linebreak` on the whole chunk, which is
    ///    logged as one item.
    ///
    /// The colored timestamp check is skipped when the colors are already stripped.
    pub fn format_and_log(&mut self, chunk: &str) -> FormatResult {
        if !self.has_formatting {
            self.add_to_log(chunk);
            return FormatResult::Unformatted;
        }

        let options = &self.options;
        let check_color = !options.strip_color;

        let text: Cow<'_, str> = if options.strip_color {
            Cow::Owned(strip_color(chunk))
        } else {
            Cow::Borrowed(chunk)
        };

        let mut lines = FormattedLines::new();

        if options.split_on_linebreak {
            for line in split_on_linebreak(&text, options.trim_linebreak) {
                if options.trim_timestamp {
                    lines.push(trim_timestamp(&line, check_color).to_string());
                } else {
                    lines.push(line);
                }
            }
            // An empty chunk has no lines, but it is still one item.
            if lines.is_empty() {
                lines.push(String::new());
            }
        } else {
            let mut it: &str = &text;
            if options.trim_timestamp {
                it = trim_timestamp(it, check_color);
            }
            if options.trim_linebreak {
                it = trim_linebreak(it);
            }
            lines.push(it.to_string());
        }

        self.buffer.extend(lines.iter().cloned());
        FormatResult::Formatted(lines)
    }

    /// Runs the decision callback, if there is one.
    pub fn callback(&mut self, raw: &str, formatted: &FormatResult) -> Option<bool> {
        self.callback
            .as_mut()
            .map(|callback| callback(raw, formatted))
    }

    /// Processes one intercepted chunk: it is always logged, and the return value says
    /// whether it should be passed down to the enclosing level (or the real sink).
    ///
    /// The callback (if any) has the final say, otherwise
    /// [`InterceptOptions::pass_down`] decides.
    pub fn handle(&mut self, chunk: &str) -> bool {
        let formatted = self.format_and_log(chunk);
        let pass_down = self.options.pass_down;
        self.callback(chunk, &formatted).unwrap_or(pass_down)
    }
}
