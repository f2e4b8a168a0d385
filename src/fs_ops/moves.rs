//! Move family: `move_to` (exact destination) and `move_into` (destination directory).

use std::path::{Path, PathBuf};
use tracing::debug;

use super::FileOps;
use crate::backend::{EntryKind, FsBackend};
use crate::errors::{FileOpsError, Result};

impl<B: FsBackend> FileOps<B> {
    /// Move `src` to exactly `to` and return `to`.
    ///
    /// With `overwrite`, an existing file at `to` is removed first; without it
    /// any existing entry is a conflict, even where the host rename would
    /// replace it.
    pub fn move_to(&self, src: &Path, to: &Path, overwrite: bool) -> Result<PathBuf> {
        let src_kind = self.require_source(src)?;
        Self::ensure_outside(src, src_kind, to)?;
        self.clear_move_destination(src, to, overwrite)?;

        self.backend
            .move_item(src, to)
            .map_err(|e| self.creation_error("move", to, e))?;
        debug!(src = %src.display(), dest = %to.display(), overwrite, "move_to completed");
        Ok(to.to_path_buf())
    }

    /// Move `src` into `into_dir`, keeping its basename, and return the new path.
    ///
    /// A missing `into_dir` is created the same way `mkdir` with
    /// [`super::MakeDirectoryOptions::Recursive`] would. An `into_dir` that
    /// exists but is not a directory fails with `DestinationIsFile` and leaves
    /// `src` in place.
    pub fn move_into(&self, src: &Path, into_dir: &Path, overwrite: bool) -> Result<PathBuf> {
        let src_kind = self.require_source(src)?;
        let dest = Self::child_path(into_dir, src)?;
        Self::ensure_outside(src, src_kind, &dest)?;
        self.ensure_directory(into_dir)?;
        self.clear_move_destination(src, &dest, overwrite)?;

        self.backend
            .move_item(src, &dest)
            .map_err(|e| self.creation_error("move", &dest, e))?;
        debug!(src = %src.display(), dest = %dest.display(), overwrite, "move_into completed");
        Ok(dest)
    }

    fn clear_move_destination(&self, src: &Path, dest: &Path, overwrite: bool) -> Result<()> {
        match self.kind(dest)? {
            Some(EntryKind::Directory) => {
                Err(FileOpsError::DestinationIsDirectory(dest.to_path_buf()))
            }
            Some(EntryKind::File) if overwrite => {
                Self::ensure_distinct(src, dest)?;
                self.remove_for_overwrite(dest)
            }
            Some(_) => Err(FileOpsError::AlreadyExists(dest.to_path_buf())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::memory::MemoryBackend;
    use crate::errors::ErrorKind;

    fn ops() -> FileOps<MemoryBackend> {
        let b = MemoryBackend::new();
        b.add_file("/in/f.txt", "payload");
        FileOps::new(b)
    }

    #[test]
    fn move_into_creates_directory_and_moves() {
        let ops = ops();
        let dest = ops.move_into(Path::new("/in/f.txt"), Path::new("/out/deep"), false).unwrap();
        assert_eq!(dest, Path::new("/out/deep/f.txt"));
        assert_eq!(ops.backend().read("/out/deep/f.txt").as_deref(), Some("payload"));
        assert!(ops.backend().entry_kind(Path::new("/in/f.txt")).unwrap().is_none());
    }

    #[test]
    fn move_into_file_target_leaves_source() {
        let ops = ops();
        ops.backend().add_file("/out", "i am a file");
        let err = ops.move_into(Path::new("/in/f.txt"), Path::new("/out"), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DestinationIsFile);
        assert_eq!(ops.backend().read("/in/f.txt").as_deref(), Some("payload"));
    }

    #[test]
    fn move_to_conflict_without_overwrite() {
        let ops = ops();
        ops.backend().add_file("/in/g.txt", "other");
        let err = ops.move_to(Path::new("/in/f.txt"), Path::new("/in/g.txt"), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(ops.backend().read("/in/g.txt").as_deref(), Some("other"));
    }

    #[test]
    fn move_to_overwrite_replaces_file() {
        let ops = ops();
        ops.backend().add_file("/in/g.txt", "other");
        ops.move_to(Path::new("/in/f.txt"), Path::new("/in/g.txt"), true).unwrap();
        assert_eq!(ops.backend().read("/in/g.txt").as_deref(), Some("payload"));
        assert!(ops.backend().entry_kind(Path::new("/in/f.txt")).unwrap().is_none());
    }

    #[test]
    fn move_to_directory_fails() {
        let ops = ops();
        ops.backend().add_dir("/d");
        let err = ops.move_to(Path::new("/in/f.txt"), Path::new("/d"), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DestinationIsDirectory);
    }

    #[test]
    fn move_to_self_with_overwrite_is_refused() {
        let ops = ops();
        let err = ops.move_to(Path::new("/in/f.txt"), Path::new("/in/f.txt"), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
        assert_eq!(ops.backend().read("/in/f.txt").as_deref(), Some("payload"));
    }

    #[test]
    fn move_directory_tree() {
        let ops = ops();
        ops.backend().add_file("/tree/sub/leaf", "leaf");
        let dest = ops.move_into(Path::new("/tree"), Path::new("/moved"), false).unwrap();
        assert_eq!(dest, Path::new("/moved/tree"));
        assert_eq!(ops.backend().read("/moved/tree/sub/leaf").as_deref(), Some("leaf"));
        assert!(ops.backend().entry_kind(Path::new("/tree")).unwrap().is_none());
    }

    #[test]
    fn move_directory_into_itself_is_refused() {
        let ops = ops();
        ops.backend().add_file("/tree/sub/leaf", "leaf");
        let err = ops.move_into(Path::new("/tree"), Path::new("/tree/sub"), false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath);
        assert_eq!(ops.backend().read("/tree/sub/leaf").as_deref(), Some("leaf"));
        assert!(ops.backend().entry_kind(Path::new("/tree/sub/tree")).unwrap().is_none());
    }
}
