//! Directory creation, idempotent regardless of the recursive flag.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{FileOps, MakeDirectoryOptions};
use crate::backend::{EntryKind, FsBackend};
use crate::errors::Result;
use crate::platform;

impl<B: FsBackend> FileOps<B> {
    /// Create a directory at `path` and return `path`.
    ///
    /// `Some(Recursive)` creates missing parents; `None` creates only the leaf
    /// and fails with `ParentMissing` when the parent is absent. An existing
    /// directory is success either way. An existing non-directory is not.
    pub fn mkdir(&self, path: &Path, options: Option<MakeDirectoryOptions>) -> Result<PathBuf> {
        let recursive = matches!(options, Some(MakeDirectoryOptions::Recursive));
        match self.backend.create_directory(path, recursive) {
            Ok(()) => {
                debug!(path = %path.display(), recursive, "created directory");
            }
            Err(e) if self.is_existing_directory(&e, path) => {
                debug!(path = %path.display(), recursive, "mkdir: directory already exists");
            }
            Err(e) => return Err(self.creation_error("create directory", path, e)),
        }
        Ok(path.to_path_buf())
    }

    /// An "exists" error only means success if a directory really is there.
    fn is_existing_directory(&self, e: &io::Error, path: &Path) -> bool {
        platform::is_already_exists_error(e)
            && matches!(self.kind(path), Ok(Some(EntryKind::Directory)))
    }
}
