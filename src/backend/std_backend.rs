//! Host filesystem backend built on `std::fs`.
//!
//! Copies and moves refuse an occupied destination with an OS-coded "exists"
//! error instead of replacing it; overwrite decisions belong to the caller.
//! Directory trees are copied with walkdir (structure) and rayon (file contents).

use rayon::prelude::*;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::io_copy::{DurabilityMode, copy_streaming};
use super::meta::preserve_metadata;
use super::{EntryKind, FsBackend};
use crate::config::Config;
use crate::platform;

/// [`FsBackend`] over the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdBackend {
    preserve_metadata: bool,
    durability: DurabilityMode,
}

impl StdBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend honoring the copy-related settings of `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            preserve_metadata: cfg.preserve_metadata,
            durability: cfg.durability,
        }
    }

    /// Copy permissions and timestamps along with file contents.
    pub fn with_preserve_metadata(mut self, preserve: bool) -> Self {
        self.preserve_metadata = preserve;
        self
    }

    pub fn with_durability(mut self, mode: DurabilityMode) -> Self {
        self.durability = mode;
        self
    }

    /// Anything at `path`, including a dangling symlink.
    fn occupied(path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let bytes = copy_streaming(src, dst, self.durability)?;
        if self.preserve_metadata {
            preserve_metadata(src, dst)?;
        }
        debug!(src = %src.display(), dest = %dst.display(), bytes, "copied file");
        Ok(())
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> io::Result<()> {
        fs::create_dir(dst)?;
        let result = self.copy_tree_contents(src, dst);
        if result.is_err() {
            // Do not leave a half-populated tree behind.
            let _ = fs::remove_dir_all(dst);
        }
        result
    }

    fn copy_tree_contents(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let mut files: Vec<(PathBuf, PathBuf)> = Vec::new();

        // Pre-order walk: every directory is created before its children are visited.
        for entry in WalkDir::new(src).min_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            let rel = entry.path().strip_prefix(src).map_err(io::Error::other)?;
            let target = dst.join(rel);
            let ftype = entry.file_type();
            if ftype.is_dir() {
                fs::create_dir(&target)?;
            } else if ftype.is_symlink() {
                copy_symlink(entry.path(), &target)?;
            } else {
                files.push((entry.into_path(), target));
            }
        }

        files
            .par_iter()
            .try_for_each(|(from, to)| self.copy_file(from, to))?;

        if self.preserve_metadata {
            preserve_metadata(src, dst)?;
        }
        debug!(src = %src.display(), dest = %dst.display(), files = files.len(), "copied directory tree");
        Ok(())
    }
}

/// Stat failures meaning "nothing there": ENOENT, or a file where a directory was expected.
fn is_absent(e: &io::Error) -> bool {
    platform::is_not_found_error(e) || platform::is_not_a_directory_error(e)
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    let target = fs::read_link(from)?;
    std::os::unix::fs::symlink(target, to)
}

/// Without unprivileged symlink creation, copy what the link points at (files only).
#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    copy_streaming(from, to, DurabilityMode::Data).map(|_| ())
}

impl FsBackend for StdBackend {
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match fs::metadata(path) {
            Ok(m) if m.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(m) if m.is_file() => Ok(Some(EntryKind::File)),
            Ok(_) => Ok(Some(EntryKind::Other)),
            // A dangling symlink still occupies the path.
            Err(e) if is_absent(&e) => match fs::symlink_metadata(path) {
                Ok(_) => Ok(Some(EntryKind::Other)),
                Err(e) if is_absent(&e) => Ok(None),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    fn copy_item(&self, src: &Path, dst: &Path) -> io::Result<()> {
        if Self::occupied(dst) {
            return Err(platform::already_exists_error());
        }
        if fs::metadata(src)?.is_dir() {
            self.copy_tree(src, dst)
        } else {
            self.copy_file(src, dst)
        }
    }

    fn move_item(&self, src: &Path, dst: &Path) -> io::Result<()> {
        if Self::occupied(dst) {
            return Err(platform::already_exists_error());
        }
        match fs::rename(src, dst) {
            Ok(()) => Ok(()),
            Err(e) if platform::is_cross_device_error(&e) => {
                warn!(src = %src.display(), dest = %dst.display(), error = %e, "rename crosses filesystems; falling back to copy+remove");
                self.copy_item(src, dst)?;
                self.remove_item(src)
            }
            Err(e) => Err(e),
        }
    }

    fn remove_item(&self, path: &Path) -> io::Result<()> {
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        }
    }

    fn create_directory(&self, path: &Path, recursive: bool) -> io::Result<()> {
        if recursive {
            fs::create_dir_all(path)
        } else {
            fs::create_dir(path)
        }
    }

    fn write_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        use std::io::Write;
        let mut f = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        f.write_all(data)?;
        self.durability.finish(&mut f)
    }
}
