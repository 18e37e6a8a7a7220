//! Error types for g2shim operations.
//!
//! This module defines [`G2ShimError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `G2ShimError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `G2ShimError::Other`) for unexpected errors
//! - Python-level failures (import errors, attribute errors) pass through as
//!   the native [`pyo3::PyErr`], not specially wrapped
//! - All errors should provide actionable messages for users

use pyo3::PyErr;
use thiserror::Error;

/// Core error type for g2shim operations.
#[derive(Debug, Error)]
pub enum G2ShimError {
    /// No candidate directory contained the installation marker.
    #[error(
        "Unable to locate a suitable GSASII/ directory. \
         Consider suggesting somewhere to look with explicit candidates, \
         or set the install directory on the module handle before first use."
    )]
    NotFound,

    /// Attempt to assign or delete a read-only module metadata attribute.
    #[error("Attribute '{name}' is a read-only projection of the underlying module")]
    AttributeNotSettable { name: String },

    /// First use was attempted with no installation directory configured.
    #[error(
        "No GSASII installation directory is configured. \
         Set one with `set_install_dir` before using the module."
    )]
    InstallDirUnset,

    /// The underlying module is already imported; its configuration is frozen.
    #[error("The {module} module is already loaded; {field} can no longer be changed")]
    AlreadyLoaded { module: String, field: &'static str },

    /// Python-level failure, surfaced as the interpreter produced it.
    #[error(transparent)]
    Python(#[from] PyErr),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for g2shim operations.
pub type Result<T> = std::result::Result<T, G2ShimError>;
