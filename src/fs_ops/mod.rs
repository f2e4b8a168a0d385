//! Path operations with idempotence and overwrite rules.
//!
//! [`FileOps`] wraps an [`FsBackend`] and owns every policy decision:
//! - `delete` and `mkdir` succeed as noops when their end state already holds;
//! - copy/move only replace an existing destination when asked to, and detect
//!   conflicts with a stat before calling the backend (some layers replace silently);
//! - backend errors are classified once, in `helpers`.
//!
//! Multi-step sequences (stat, remove, copy) are not atomic.

mod copy;
mod delete;
mod helpers;
mod mkdir;
mod moves;
mod rename;
mod touch;

pub use helpers::{classify_io_error, describe_io_error};

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::backend::{EntryKind, FsBackend, StdBackend};
use crate::config::Config;
use crate::errors::{FileOpsError, Result};
use crate::platform;

/// Options for [`FileOps::mkdir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakeDirectoryOptions {
    /// Create missing intermediate directories ("mkdir -p").
    Recursive,
}

/// Idempotent file-management operations over a backend.
#[derive(Debug, Clone, Default)]
pub struct FileOps<B = StdBackend> {
    backend: B,
}

impl FileOps<StdBackend> {
    /// Host-backed operations configured from `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(StdBackend::from_config(cfg))
    }
}

impl<B: FsBackend> FileOps<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stat through the backend; a stat that fails for any reason other than
    /// absence is classified and returned, never read as "nothing there".
    fn kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        self.backend
            .entry_kind(path)
            .map_err(|e| classify_io_error("stat", path, e))
    }

    fn is_absent(&self, path: &Path) -> bool {
        matches!(self.kind(path), Ok(None))
    }

    fn require_source(&self, src: &Path) -> Result<EntryKind> {
        self.kind(src)?
            .ok_or_else(|| FileOpsError::SourceNotFound(src.to_path_buf()))
    }

    /// `dir/<basename of src>`.
    fn child_path(dir: &Path, src: &Path) -> Result<PathBuf> {
        let name: &OsStr = src.file_name().ok_or_else(|| FileOpsError::InvalidPath {
            path: src.to_path_buf(),
            reason: "source has no final component to use as a name",
        })?;
        Ok(dir.join(name))
    }

    /// Refuse to replace the source with itself.
    fn ensure_distinct(src: &Path, dst: &Path) -> Result<()> {
        if src == dst {
            return Err(FileOpsError::InvalidPath {
                path: dst.to_path_buf(),
                reason: "source and destination are the same path",
            });
        }
        Ok(())
    }

    /// Refuse to copy or move a directory into its own subtree.
    fn ensure_outside(src: &Path, src_kind: EntryKind, dst: &Path) -> Result<()> {
        if src_kind == EntryKind::Directory && dst.starts_with(src) {
            return Err(FileOpsError::InvalidPath {
                path: dst.to_path_buf(),
                reason: "destination is inside the source directory",
            });
        }
        Ok(())
    }

    /// Make sure `dir` is a directory, creating it (with parents) when missing.
    fn ensure_directory(&self, dir: &Path) -> Result<()> {
        match self.kind(dir)? {
            Some(EntryKind::Directory) => Ok(()),
            Some(_) => Err(FileOpsError::DestinationIsFile(dir.to_path_buf())),
            None => self
                .mkdir(dir, Some(MakeDirectoryOptions::Recursive))
                .map(|_| ()),
        }
    }

    /// Remove an existing destination ahead of an overwriting copy or move.
    fn remove_for_overwrite(&self, path: &Path) -> Result<()> {
        self.backend
            .remove_item(path)
            .map_err(|e| classify_io_error("remove destination", path, e))?;
        debug!(path = %path.display(), "removed existing destination for overwrite");
        Ok(())
    }

    /// Classify a failure to create something at `path`, telling a missing
    /// parent apart from other "not found" conditions.
    fn creation_error(&self, op: &'static str, path: &Path, e: io::Error) -> FileOpsError {
        if platform::is_not_found_error(&e) {
            let parent_missing = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .is_some_and(|p| self.is_absent(p));
            if parent_missing {
                return FileOpsError::ParentMissing(path.to_path_buf());
            }
        }
        classify_io_error(op, path, e)
    }
}
