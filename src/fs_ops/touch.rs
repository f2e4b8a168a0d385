//! Create an empty file by writing zero bytes. Existing content is truncated.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::FileOps;
use crate::backend::{EntryKind, FsBackend};
use crate::errors::{FileOpsError, Result};

impl<B: FsBackend> FileOps<B> {
    /// Write an empty file at `path` and return `path`. There is no existence
    /// check: a file already at `path` ends up empty.
    pub fn touch(&self, path: &Path) -> Result<PathBuf> {
        if self.kind(path)? == Some(EntryKind::Directory) {
            return Err(FileOpsError::DestinationIsDirectory(path.to_path_buf()));
        }
        self.backend
            .write_bytes(path, &[])
            .map_err(|e| self.creation_error("touch", path, e))?;
        debug!(path = %path.display(), "touched");
        Ok(path.to_path_buf())
    }
}
