//! Error types returned by the shim.
//!
//! Every failure carries the short name of the attempted operation and,
//! where one exists, the path involved. The rendered form follows the usual
//! `op path: error` shape of a path error, so messages look the same whether
//! the native call failed or the capability is missing altogether.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::OS_NAME;

/// Sentinel meaning "this capability does not exist on the current target".
///
/// There is exactly one value of this type, [`ERR_UNSUPPORTED`]. It is only
/// ever produced by [`UnsupportedSyscalls`](crate::UnsupportedSyscalls).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("not supported by {}", OS_NAME)]
pub struct Unsupported;

/// The well-known [`Unsupported`] sentinel value.
pub const ERR_UNSUPPORTED: Unsupported = Unsupported;

/// Error produced by [`set_effective_user`](crate::set_effective_user) and
/// [`stat_file`](crate::stat_file).
#[derive(Debug, Error)]
pub enum SyscallError {
    /// The native facility reported an error; the errno is kept verbatim.
    #[error("{op} {}: {source}", .path.display())]
    Native {
        /// Short name of the attempted operation.
        op: &'static str,
        /// Path involved, empty for operations without one.
        path: PathBuf,
        /// Error returned by the operating system.
        source: io::Error,
    },
    /// The native stat query succeeded but its record did not fit the
    /// portable layout.
    #[error(
        "{op} {}: stat did not return the expected extended metadata ({field} out of range)",
        .path.display()
    )]
    UnexpectedShape {
        /// Short name of the attempted operation.
        op: &'static str,
        /// File whose metadata could not be represented.
        path: PathBuf,
        /// Name of the native field that failed to convert.
        field: &'static str,
    },
    /// The operation has no meaning on the active target.
    #[error("{op} : {source}")]
    Unsupported {
        /// Short name of the attempted operation.
        op: &'static str,
        /// Always [`ERR_UNSUPPORTED`].
        source: Unsupported,
    },
}

impl SyscallError {
    pub(crate) fn native(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Native {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn unexpected_shape(op: &'static str, path: &Path, field: &'static str) -> Self {
        Self::UnexpectedShape {
            op,
            path: path.to_path_buf(),
            field,
        }
    }

    pub(crate) const fn unsupported(op: &'static str) -> Self {
        Self::Unsupported {
            op,
            source: ERR_UNSUPPORTED,
        }
    }

    /// Returns the short name of the operation that failed.
    #[must_use]
    pub const fn op(&self) -> &'static str {
        match self {
            Self::Native { op, .. }
            | Self::UnexpectedShape { op, .. }
            | Self::Unsupported { op, .. } => *op,
        }
    }

    /// Returns the path involved in the failing operation, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Native { path, .. } | Self::UnexpectedShape { path, .. } => {
                if path.as_os_str().is_empty() {
                    None
                } else {
                    Some(path)
                }
            }
            Self::Unsupported { .. } => None,
        }
    }

    /// Reports whether this is the [`Unsupported`] sentinel.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Returns the raw OS error code for native failures.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::Native { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

impl From<SyscallError> for io::Error {
    fn from(error: SyscallError) -> Self {
        let kind = match &error {
            SyscallError::Native { source, .. } => source.kind(),
            SyscallError::UnexpectedShape { .. } => io::ErrorKind::InvalidData,
            SyscallError::Unsupported { .. } => io::ErrorKind::Unsupported,
        };
        Self::new(kind, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_renders_like_a_path_error_without_path() {
        let error = SyscallError::unsupported("setuid");
        assert_eq!(
            error.to_string(),
            format!("setuid : not supported by {OS_NAME}")
        );
        assert!(error.is_unsupported());
        assert_eq!(error.op(), "setuid");
        assert!(error.path().is_none());
        assert!(error.raw_os_error().is_none());
    }

    #[test]
    fn sentinel_is_the_source_of_unsupported_errors() {
        use std::error::Error as _;

        let error = SyscallError::unsupported("stat");
        let source = error.source().expect("sentinel source");
        assert_eq!(source.downcast_ref::<Unsupported>(), Some(&ERR_UNSUPPORTED));
    }

    #[test]
    fn native_error_keeps_errno_and_path() {
        let error = SyscallError::native(
            "stat",
            Path::new("/missing"),
            io::Error::from_raw_os_error(2),
        );
        assert_eq!(error.raw_os_error(), Some(2));
        assert_eq!(error.path(), Some(Path::new("/missing")));
        assert!(error.to_string().starts_with("stat /missing: "));
        assert!(!error.is_unsupported());
    }

    #[test]
    fn native_error_without_path_reports_none() {
        let error = SyscallError::native("setuid", Path::new(""), io::Error::from_raw_os_error(1));
        assert!(error.path().is_none());
        assert!(error.to_string().starts_with("setuid : "));
    }

    #[test]
    fn unexpected_shape_names_file_and_field() {
        let error = SyscallError::unexpected_shape("stat", Path::new("/data/a"), "st_dev");
        let message = error.to_string();
        assert!(message.contains("/data/a"));
        assert!(message.contains("st_dev"));
        assert_eq!(error.op(), "stat");
    }

    #[test]
    fn io_error_conversion_maps_kinds() {
        let unsupported: io::Error = SyscallError::unsupported("stat").into();
        assert_eq!(unsupported.kind(), io::ErrorKind::Unsupported);

        let shape: io::Error = SyscallError::unexpected_shape("stat", Path::new("x"), "st_ino").into();
        assert_eq!(shape.kind(), io::ErrorKind::InvalidData);

        let native: io::Error = SyscallError::native(
            "stat",
            Path::new("x"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        )
        .into();
        assert_eq!(native.kind(), io::ErrorKind::NotFound);
        assert!(native.to_string().starts_with("stat x: "));
    }
}
