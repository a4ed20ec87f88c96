//! Portable metadata records and the file handle they are read from.
//!
//! [`FileMetadata`] mirrors the field layout of the 64-bit Linux `stat`
//! record but is defined independently of any native type, so it exists on
//! every target. It is only ever filled in by explicit field assignment.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    /// Whole seconds.
    pub sec: i64,
    /// Nanosecond remainder.
    pub nsec: i64,
}

impl Timestamp {
    /// Creates a timestamp from its two parts.
    #[must_use]
    pub const fn new(sec: i64, nsec: i64) -> Self {
        Self { sec, nsec }
    }
}

/// Snapshot of a file's inode-level metadata.
///
/// A plain value with no ties to the native record it was copied from.
/// `pad0` and `reserved` keep the layout aligned with the native record and
/// are always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FileMetadata {
    /// Device containing the file.
    pub dev: u64,
    /// Inode number.
    pub ino: u64,
    /// Number of hard links.
    pub nlink: u64,
    /// File type and permission bits.
    pub mode: u32,
    /// Owner user id.
    pub uid: u32,
    /// Owner group id.
    pub gid: u32,
    /// Reserved padding.
    pub pad0: i32,
    /// Device id for special files.
    pub rdev: u64,
    /// Size in bytes.
    pub size: i64,
    /// Preferred I/O block size.
    pub blksize: i64,
    /// Number of 512-byte blocks allocated.
    pub blocks: i64,
    /// Last access time.
    pub atim: Timestamp,
    /// Last modification time.
    pub mtim: Timestamp,
    /// Last status change time.
    pub ctim: Timestamp,
    /// Reserved padding.
    pub reserved: [i64; 3],
}

/// An open file together with the path it was opened from.
///
/// The recorded path is what the native stat resolves, which matches how a
/// named file handle behaves: renaming or removing the file after opening it
/// is visible to [`stat_file`](crate::stat_file).
#[derive(Debug)]
pub struct FileHandle {
    file: File,
    path: PathBuf,
}

impl FileHandle {
    /// Opens `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            file: File::open(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Creates (or truncates) `path` for writing.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            file: File::create(path)?,
            path: path.to_path_buf(),
        })
    }

    /// Wraps an already-open file that was opened from `path`.
    pub fn from_parts(file: File, path: impl Into<PathBuf>) -> Self {
        Self {
            file,
            path: path.into(),
        }
    }

    /// Returns the path the file was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the underlying file.
    #[must_use]
    pub const fn file(&self) -> &File {
        &self.file
    }

    /// Consumes the handle and returns the underlying file.
    #[must_use]
    pub fn into_file(self) -> File {
        self.file
    }
}

impl AsRef<File> for FileHandle {
    fn as_ref(&self) -> &File {
        &self.file
    }
}
