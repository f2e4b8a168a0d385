//! Typed error definitions for pathops.
//! Every operation fails with one of a small set of well-known kinds so callers
//! can branch on the outcome without inspecting OS error codes themselves.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by every [`crate::FileOps`] operation.
pub type Result<T> = std::result::Result<T, FileOpsError>;

#[derive(Debug, Error)]
pub enum FileOpsError {
    #[error("Destination already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Destination is a directory: {0}")]
    DestinationIsDirectory(PathBuf),

    #[error("Destination is a file: {0}")]
    DestinationIsFile(PathBuf),

    #[error("Parent directory does not exist for {0}")]
    ParentMissing(PathBuf),

    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Invalid path {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: &'static str },

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Path is locked or busy {path}: {context}")]
    Locked { path: PathBuf, context: String },

    #[error("{op} '{path}' failed: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of a [`FileOpsError`], independent of the path involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    DestinationIsDirectory,
    DestinationIsFile,
    ParentMissing,
    SourceNotFound,
    InvalidPath,
    PermissionDenied,
    Locked,
    /// Backend failure passed through without a more specific meaning.
    Unknown,
}

impl FileOpsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileOpsError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            FileOpsError::DestinationIsDirectory(_) => ErrorKind::DestinationIsDirectory,
            FileOpsError::DestinationIsFile(_) => ErrorKind::DestinationIsFile,
            FileOpsError::ParentMissing(_) => ErrorKind::ParentMissing,
            FileOpsError::SourceNotFound(_) => ErrorKind::SourceNotFound,
            FileOpsError::InvalidPath { .. } => ErrorKind::InvalidPath,
            FileOpsError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            FileOpsError::Locked { .. } => ErrorKind::Locked,
            FileOpsError::Io { .. } => ErrorKind::Unknown,
        }
    }

    /// Stable short code for structured logs.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::DestinationIsDirectory => "destination_is_directory",
            ErrorKind::DestinationIsFile => "destination_is_file",
            ErrorKind::ParentMissing => "parent_missing",
            ErrorKind::SourceNotFound => "source_not_found",
            ErrorKind::InvalidPath => "invalid_path",
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::Locked => "locked",
            ErrorKind::Unknown => "io_error",
        }
    }

    /// The path the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileOpsError::AlreadyExists(p)
            | FileOpsError::DestinationIsDirectory(p)
            | FileOpsError::DestinationIsFile(p)
            | FileOpsError::ParentMissing(p)
            | FileOpsError::SourceNotFound(p) => p,
            FileOpsError::InvalidPath { path, .. }
            | FileOpsError::PermissionDenied { path, .. }
            | FileOpsError::Locked { path, .. }
            | FileOpsError::Io { path, .. } => path,
        }
    }
}
