//! Portable `setuid` and `stat` with a fixed unsupported fallback.
//!
//! Re-exports the [`platform`] crate, which holds the implementation. See its
//! documentation for the behaviour on each target.

#![deny(unsafe_code)]

pub use platform::*;
