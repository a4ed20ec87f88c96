//! Fallback variant for targets without POSIX credentials or `stat`.
//!
//! Compiled everywhere so callers can also opt into degraded mode at
//! startup. Nothing here touches the operating system.

use crate::error::SyscallError;
use crate::metadata::{FileHandle, FileMetadata};
use crate::trace::trace_unsupported;
use crate::traits::PlatformSyscalls;

/// Shim variant whose every operation fails with the sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsupportedSyscalls;

impl PlatformSyscalls for UnsupportedSyscalls {
    fn platform_name(&self) -> &'static str {
        "other"
    }

    fn set_effective_user(&self, _uid: u32) -> Result<(), SyscallError> {
        trace_unsupported("setuid");
        Err(SyscallError::unsupported("setuid"))
    }

    fn stat_file(&self, _file: &FileHandle) -> Result<FileMetadata, SyscallError> {
        trace_unsupported("stat");
        Err(SyscallError::unsupported("stat"))
    }
}
