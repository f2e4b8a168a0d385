//! Copy family: `copy_to` (exact destination) and `copy_into` (destination directory).
//!
//! A destination that already holds identical bytes is still a conflict:
//! comparing contents would cost as much as the copy itself.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::FileOps;
use crate::backend::{EntryKind, FsBackend};
use crate::errors::{FileOpsError, Result};

impl<B: FsBackend> FileOps<B> {
    /// Copy `src` to exactly `to` and return `to`.
    ///
    /// `overwrite` only applies file-to-file: an existing plain file at `to`
    /// is removed first when `src` is also a plain file. Any other conflict
    /// fails with `AlreadyExists`, and an existing directory at `to` with
    /// `DestinationIsDirectory`.
    pub fn copy_to(&self, src: &Path, to: &Path, overwrite: bool) -> Result<PathBuf> {
        let src_kind = self.require_source(src)?;
        Self::ensure_outside(src, src_kind, to)?;

        match self.kind(to)? {
            Some(EntryKind::Directory) => {
                return Err(FileOpsError::DestinationIsDirectory(to.to_path_buf()));
            }
            Some(EntryKind::File) if overwrite && src_kind == EntryKind::File => {
                Self::ensure_distinct(src, to)?;
                self.remove_for_overwrite(to)?;
            }
            Some(_) => return Err(FileOpsError::AlreadyExists(to.to_path_buf())),
            None => {}
        }

        self.backend
            .copy_item(src, to)
            .map_err(|e| self.creation_error("copy", to, e))?;
        debug!(src = %src.display(), dest = %to.display(), overwrite, "copy_to completed");
        Ok(to.to_path_buf())
    }

    /// Copy `src` into `into_dir`, keeping its basename, and return the new path.
    ///
    /// `into_dir` is created (with parents) when missing. With `overwrite`, an
    /// existing file at the computed destination is removed first. A directory
    /// cannot be copied into its own subtree (`InvalidPath`).
    pub fn copy_into(&self, src: &Path, into_dir: &Path, overwrite: bool) -> Result<PathBuf> {
        let src_kind = self.require_source(src)?;
        let dest = Self::child_path(into_dir, src)?;
        Self::ensure_outside(src, src_kind, &dest)?;
        self.ensure_directory(into_dir)?;

        match self.kind(&dest)? {
            Some(EntryKind::Directory) => {
                return Err(FileOpsError::DestinationIsDirectory(dest));
            }
            Some(EntryKind::File) if overwrite => {
                Self::ensure_distinct(src, &dest)?;
                self.remove_for_overwrite(&dest)?;
            }
            Some(_) => return Err(FileOpsError::AlreadyExists(dest)),
            None => {}
        }

        self.backend
            .copy_item(src, &dest)
            .map_err(|e| self.creation_error("copy", &dest, e))?;
        debug!(src = %src.display(), dest = %dest.display(), overwrite, "copy_into completed");
        Ok(dest)
    }
}
