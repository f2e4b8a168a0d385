use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::{FileOps, classify_io_error};
use crate::backend::FsBackend;
use crate::errors::{FileOpsError, Result};

impl<B: FsBackend> FileOps<B> {
    /// Move `path` to a sibling named `new_basename` and return the new path.
    /// No overwrite negotiation: a conflict fails the way the backend reports it.
    pub fn rename(&self, path: &Path, new_basename: impl AsRef<OsStr>) -> Result<PathBuf> {
        let name = Path::new(new_basename.as_ref());
        let mut components = name.components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(c)), None) if c == name.as_os_str()
        );
        if !single_normal {
            return Err(FileOpsError::InvalidPath {
                path: name.to_path_buf(),
                reason: "new name must be a single path component",
            });
        }

        let parent = path.parent().ok_or_else(|| FileOpsError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path has no parent to rename within",
        })?;
        let dest = parent.join(name);
        self.require_source(path)?;

        self.backend
            .move_item(path, &dest)
            .map_err(|e| classify_io_error("rename", &dest, e))?;
        debug!(src = %path.display(), dest = %dest.display(), "renamed");
        Ok(dest)
    }
}
