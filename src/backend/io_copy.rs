//! Streaming file copy into a freshly created destination.
//!
//! - The destination is opened with `create_new` (O_EXCL), so an existing file
//!   is never clobbered and the OS reports the conflict with its own code.
//! - File-to-file `io::copy` lets std use in-kernel copies where available
//!   (copy_file_range/sendfile on Linux).
//! - `DurabilityMode` decides whether the written file is only flushed or fully fsynced.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

/// Durability mode controlling post-write flush behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DurabilityMode {
    /// Ensure written data reaches the OS page cache (`flush`), but do not force
    /// a disk barrier. Fastest; may lose data on sudden power loss.
    #[default]
    Data,
    /// Force data and metadata to stable storage (`sync_all`).
    Full,
}

impl DurabilityMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "data" | "flush" => Some(DurabilityMode::Data),
            "full" | "sync" | "fsync" => Some(DurabilityMode::Full),
            _ => None,
        }
    }

    /// Apply the mode to a file that has just been written.
    pub(crate) fn finish(self, f: &mut File) -> io::Result<()> {
        f.flush()?;
        if matches!(self, DurabilityMode::Full) {
            f.sync_all()?;
        }
        Ok(())
    }
}

impl fmt::Display for DurabilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DurabilityMode::Data => "data",
            DurabilityMode::Full => "full",
        })
    }
}

impl FromStr for DurabilityMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid durability mode: '{s}'"))
    }
}

/// Copy `src` -> `dst`, creating `dst`. Returns the number of bytes written.
/// On failure after `dst` was created, the partial destination is removed best-effort.
pub(super) fn copy_streaming(src: &Path, dst: &Path, mode: DurabilityMode) -> io::Result<u64> {
    let mut src_f = File::open(src)?;
    let mut dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let result = io::copy(&mut src_f, &mut dst_f).and_then(|bytes| {
        mode.finish(&mut dst_f)?;
        Ok(bytes)
    });
    if result.is_err() {
        drop(dst_f);
        let _ = std::fs::remove_file(dst);
    }
    result
}
