//! The capability interface shared by both shim variants.

use crate::error::SyscallError;
use crate::metadata::{FileHandle, FileMetadata};

/// Operations the shim exposes on every target.
///
/// `NativeSyscalls` performs the real system calls
/// on unix; [`UnsupportedSyscalls`](crate::UnsupportedSyscalls) fails every
/// call with the [`Unsupported`](crate::Unsupported) sentinel.
pub trait PlatformSyscalls {
    /// Short name of the variant, `"posix-like"` or `"other"`.
    fn platform_name(&self) -> &'static str;

    /// Switches the process user identity to `uid`.
    fn set_effective_user(&self, uid: u32) -> Result<(), SyscallError>;

    /// Reads the extended metadata of the file behind `file`.
    fn stat_file(&self, file: &FileHandle) -> Result<FileMetadata, SyscallError>;
}
