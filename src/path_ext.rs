//! Operations as methods on [`Path`], backed by the host filesystem with
//! default settings.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::backend::StdBackend;
use crate::errors::Result;
use crate::fs_ops::{FileOps, MakeDirectoryOptions};

/// [`FileOps`] methods callable directly on a path.
///
/// Each call behaves exactly like the matching method of
/// `FileOps::<StdBackend>::default()`. Build a [`FileOps`] yourself to copy
/// with preserved metadata or stronger durability.
pub trait PathOps {
    fn copy_to(&self, to: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf>;
    fn copy_into(&self, into_dir: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf>;
    fn move_to(&self, to: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf>;
    fn move_into(&self, into_dir: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf>;
    fn delete(&self) -> Result<()>;
    fn touch(&self) -> Result<PathBuf>;
    fn mkdir(&self, options: Option<MakeDirectoryOptions>) -> Result<PathBuf>;
    fn rename(&self, new_basename: impl AsRef<OsStr>) -> Result<PathBuf>;
}

fn host() -> FileOps<StdBackend> {
    FileOps::default()
}

impl PathOps for Path {
    fn copy_to(&self, to: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        host().copy_to(self, to.as_ref(), overwrite)
    }

    fn copy_into(&self, into_dir: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        host().copy_into(self, into_dir.as_ref(), overwrite)
    }

    fn move_to(&self, to: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        host().move_to(self, to.as_ref(), overwrite)
    }

    fn move_into(&self, into_dir: impl AsRef<Path>, overwrite: bool) -> Result<PathBuf> {
        host().move_into(self, into_dir.as_ref(), overwrite)
    }

    fn delete(&self) -> Result<()> {
        host().delete(self)
    }

    fn touch(&self) -> Result<PathBuf> {
        host().touch(self)
    }

    fn mkdir(&self, options: Option<MakeDirectoryOptions>) -> Result<PathBuf> {
        host().mkdir(self, options)
    }

    fn rename(&self, new_basename: impl AsRef<OsStr>) -> Result<PathBuf> {
        host().rename(self, new_basename)
    }
}
