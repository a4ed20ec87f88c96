//! Portable `setuid` and `stat` for code that must build everywhere.
//!
//! This crate exposes two operating-system primitives behind one set of
//! signatures:
//!
//! - [`set_effective_user`] switches the process user identity.
//! - [`stat_file`] reads inode-level metadata of an open [`FileHandle`].
//!
//! On unix both call straight into the kernel. On every other target they
//! fail immediately with the [`Unsupported`] sentinel, wrapped with the
//! operation name, so dependent code compiles and runs in a degraded
//! capacity without `cfg` at each call site. [`PLATFORM_NAME`] tells callers
//! which variant is active so they can avoid the calls up front.
//!
//! # Variants
//!
//! Both variants implement [`PlatformSyscalls`]. [`ActiveSyscalls`] names the
//! one selected for the build target. [`UnsupportedSyscalls`] is compiled on
//! every target, so degraded mode can also be chosen at startup.
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events (target `platform::syscall`) for every
//!   call. Off by default.
//!
//! # Examples
//!
//! ```no_run
//! use platform::{FileHandle, PLATFORM_NAME, stat_file};
//!
//! let handle = FileHandle::open("/etc/hostname")?;
//! match stat_file(&handle) {
//!     Ok(meta) => println!("inode {} size {}", meta.ino, meta.size),
//!     Err(error) if error.is_unsupported() => println!("no stat on {PLATFORM_NAME}"),
//!     Err(error) => return Err(error.into()),
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod metadata;
mod trace;
mod traits;
mod unsupported;

#[cfg(unix)]
mod native;

pub use error::{ERR_UNSUPPORTED, SyscallError, Unsupported};
pub use metadata::{FileHandle, FileMetadata, Timestamp};
pub use trace::TRACE_TARGET;
pub use traits::PlatformSyscalls;
pub use unsupported::UnsupportedSyscalls;

#[cfg(unix)]
pub use native::NativeSyscalls;

/// Name of the variant compiled for this target.
#[cfg(unix)]
pub const PLATFORM_NAME: &str = "posix-like";

/// Name of the variant compiled for this target.
#[cfg(not(unix))]
pub const PLATFORM_NAME: &str = "other";

/// Name of the target operating system, as used in [`Unsupported`] messages.
pub const OS_NAME: &str = std::env::consts::OS;

/// The variant selected for this build target.
#[cfg(unix)]
pub type ActiveSyscalls = NativeSyscalls;

/// The variant selected for this build target.
#[cfg(not(unix))]
pub type ActiveSyscalls = UnsupportedSyscalls;

/// Returns the variant selected for this build target.
#[must_use]
pub const fn active() -> ActiveSyscalls {
    #[cfg(unix)]
    {
        NativeSyscalls
    }
    #[cfg(not(unix))]
    {
        UnsupportedSyscalls
    }
}

/// Switches the process user identity to `uid`.
///
/// On unix this is `setuid(2)` and fails exactly when the kernel refuses,
/// for example with `EPERM` when the caller lacks the privilege. Elsewhere it
/// always fails with `setuid : not supported by <os>`.
pub fn set_effective_user(uid: u32) -> Result<(), SyscallError> {
    active().set_effective_user(uid)
}

/// Reads the extended metadata of the file behind `file`.
///
/// On unix the handle's recorded path is passed to `stat(2)`, following
/// symlinks. Elsewhere it always fails with `stat : not supported by <os>`
/// without looking at `file`.
pub fn stat_file(file: &FileHandle) -> Result<FileMetadata, SyscallError> {
    active().stat_file(file)
}
