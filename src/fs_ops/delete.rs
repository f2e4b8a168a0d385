//! Recursive delete. An absent path is already the desired end state.

use std::path::Path;
use tracing::debug;

use super::{FileOps, classify_io_error};
use crate::backend::FsBackend;
use crate::errors::Result;
use crate::platform;

impl<B: FsBackend> FileOps<B> {
    /// Remove `path` (file or whole directory tree). Succeeds without doing
    /// anything when `path` does not exist. Permission and lock failures, on
    /// the stat as well as the removal, are returned as-is, never retried.
    pub fn delete(&self, path: &Path) -> Result<()> {
        if self.kind(path)?.is_none() {
            debug!(path = %path.display(), "delete: nothing to remove");
            return Ok(());
        }

        match self.backend.remove_item(path) {
            Ok(()) => {
                debug!(path = %path.display(), "deleted");
                Ok(())
            }
            // Removed by someone else between the stat and the removal.
            Err(e) if platform::is_not_found_error(&e) && self.is_absent(path) => {
                debug!(path = %path.display(), "delete: path vanished before removal");
                Ok(())
            }
            Err(e) => Err(classify_io_error("delete", path, e)),
        }
    }
}
