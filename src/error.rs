//! Error types for Quarry operations.
//!
//! This module defines [`QuarryError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `QuarryError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `QuarryError::Other`) for unexpected errors
//! - Harvesting failures at the granularity of one loading unit or one type
//!   are not errors at all: they are recorded as diagnostics and the pass
//!   continues
//! - A catalog store that exists on disk but cannot be parsed is fatal;
//!   overwriting it would destroy history

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Quarry operations.
#[derive(Debug, Error)]
pub enum QuarryError {
    /// Universe snapshot file not found at expected location.
    #[error("Universe snapshot not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    /// Failed to parse a universe snapshot file.
    #[error("Failed to parse universe snapshot at {path}: {message}")]
    SnapshotParseError { path: PathBuf, message: String },

    /// Failed to parse the harvest configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The persisted catalog store exists but cannot be parsed.
    ///
    /// Never recovered from: a partial rewrite would silently drop history.
    #[error("Catalog store at {path} is corrupt: {message}")]
    StoreCorrupt { path: PathBuf, message: String },

    /// Failed to serialize the catalog store for writing.
    #[error("Failed to serialize catalog store: {message}")]
    StoreSerialize { message: String },

    /// A feature violated its identity invariant at construction.
    #[error("Invalid feature: {message}")]
    InvalidFeature { message: String },

    /// Requested version node does not exist in the store.
    #[error("Unknown version: {version}")]
    UnknownVersion { version: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Quarry operations.
pub type Result<T> = std::result::Result<T, QuarryError>;
