//! Unix variant backed by the real `setuid(2)` and `stat(2)` calls.

use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use nix::unistd::{Uid, setuid};

use crate::error::SyscallError;
use crate::metadata::{FileHandle, FileMetadata, Timestamp};
use crate::trace::{trace_setuid, trace_stat};
use crate::traits::PlatformSyscalls;

/// Shim variant that performs the native system calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeSyscalls;

impl PlatformSyscalls for NativeSyscalls {
    fn platform_name(&self) -> &'static str {
        "posix-like"
    }

    fn set_effective_user(&self, uid: u32) -> Result<(), SyscallError> {
        trace_setuid(uid);
        setuid(Uid::from_raw(uid))
            .map_err(|errno| SyscallError::native("setuid", Path::new(""), errno.into()))
    }

    fn stat_file(&self, file: &FileHandle) -> Result<FileMetadata, SyscallError> {
        let path = file.path();
        trace_stat(path);
        let native =
            fs::metadata(path).map_err(|error| SyscallError::native("stat", path, error))?;
        from_native(path, &native)
    }
}

/// Copies every field of a native `stat` record into the portable layout.
///
/// The unsigned size and block counts must fit the signed portable fields.
/// A value that does not fit means the record is not the shape this crate
/// understands.
fn from_native(path: &Path, native: &Metadata) -> Result<FileMetadata, SyscallError> {
    Ok(FileMetadata {
        dev: native.dev(),
        ino: native.ino(),
        nlink: native.nlink(),
        mode: native.mode(),
        uid: native.uid(),
        gid: native.gid(),
        pad0: 0,
        rdev: native.rdev(),
        size: convert(path, "st_size", native.size())?,
        blksize: convert(path, "st_blksize", native.blksize())?,
        blocks: convert(path, "st_blocks", native.blocks())?,
        atim: Timestamp::new(native.atime(), native.atime_nsec()),
        mtim: Timestamp::new(native.mtime(), native.mtime_nsec()),
        ctim: Timestamp::new(native.ctime(), native.ctime_nsec()),
        reserved: [0; 3],
    })
}

fn convert<T, U>(path: &Path, field: &'static str, value: T) -> Result<U, SyscallError>
where
    U: TryFrom<T>,
{
    U::try_from(value).map_err(|_| SyscallError::unexpected_shape("stat", path, field))
}
