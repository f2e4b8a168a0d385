//! Filesystem backends.
//!
//! [`FsBackend`] is the seam between the operation layer and the host: a
//! handful of raw primitives that fail with plain `io::Error`s. Policy
//! (idempotence, overwrite negotiation, error classification) lives in
//! `fs_ops`, never here.

use std::io;
use std::path::Path;

mod io_copy;
mod meta;
mod std_backend;

#[cfg(test)]
pub(crate) mod memory;

pub use io_copy::DurabilityMode;
pub use std_backend::StdBackend;

/// What a path currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Present but neither a regular file nor a directory (dangling symlink, fifo, socket).
    Other,
}

/// Raw filesystem primitives consumed by [`crate::FileOps`].
pub trait FsBackend {
    /// Stat `path`; `Ok(None)` when nothing exists there. Any other stat
    /// failure (e.g. no search permission on a parent) is an error, not absence.
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    /// Copy a file or a directory tree. Must not replace an existing `dst`.
    fn copy_item(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Move a file or a directory tree. Must not replace an existing `dst`.
    fn move_item(&self, src: &Path, dst: &Path) -> io::Result<()>;

    /// Remove a file, or a directory and everything below it.
    fn remove_item(&self, path: &Path) -> io::Result<()>;

    fn create_directory(&self, path: &Path, recursive: bool) -> io::Result<()>;

    /// Create or truncate `path` and write `data` to it.
    fn write_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

impl<B: FsBackend + ?Sized> FsBackend for &B {
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        (**self).entry_kind(path)
    }
    fn copy_item(&self, src: &Path, dst: &Path) -> io::Result<()> {
        (**self).copy_item(src, dst)
    }
    fn move_item(&self, src: &Path, dst: &Path) -> io::Result<()> {
        (**self).move_item(src, dst)
    }
    fn remove_item(&self, path: &Path) -> io::Result<()> {
        (**self).remove_item(path)
    }
    fn create_directory(&self, path: &Path, recursive: bool) -> io::Result<()> {
        (**self).create_directory(path, recursive)
    }
    fn write_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        (**self).write_bytes(path, data)
    }
}
