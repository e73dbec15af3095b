// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

/// The blocking mutex from stdlib.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Type alias for a `Send`-able output sink (stdout, stderr, [`crate::StdoutMock`], etc).
pub type SendOutputSink = dyn std::io::Write + Send;
/// Type alias for a `Send`-able output sink wrapped in an `Arc<StdMutex>`.
pub type SafeOutputSink = Arc<StdMutex<SendOutputSink>>;
