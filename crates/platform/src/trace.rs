//! Diagnostics for shim calls, compiled out unless the `tracing` feature is on.
//!
//! Events describe what was attempted. Failures still travel back to the
//! caller as [`SyscallError`](crate::SyscallError) values.

#![cfg_attr(not(unix), allow(dead_code))]

use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Target used by every event this crate emits.
pub const TRACE_TARGET: &str = "platform::syscall";

/// Trace a native `setuid` call.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_setuid(uid: u32) {
    debug!(
        target: TRACE_TARGET,
        operation = "setuid",
        uid = uid,
        "setuid {}",
        uid
    );
}

/// Trace a native `setuid` call - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_setuid(_uid: u32) {}

/// Trace a native `stat` call.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_stat(path: &Path) {
    trace!(
        target: TRACE_TARGET,
        operation = "stat",
        path = %path.display(),
        "stat {}",
        path.display()
    );
}

/// Trace a native `stat` call - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_stat(_path: &Path) {}

/// Trace an operation rejected because the target lacks the capability.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_unsupported(op: &'static str) {
    debug!(
        target: TRACE_TARGET,
        operation = op,
        platform = crate::PLATFORM_NAME,
        "{} not supported by {}",
        op,
        crate::OS_NAME
    );
}

/// Trace an unsupported operation - no-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_unsupported(_op: &'static str) {}
