//! Core library for `pathops`.
//!
//! Idempotent file-management operations (copy, move, delete, touch, mkdir,
//! rename) over a pluggable filesystem backend:
//! - `delete` and `mkdir` succeed when their end state already holds;
//! - copy and move only replace an existing destination when asked to;
//! - "already exists" errors are recognised the same way on every platform.
//!
//! ```no_run
//! use pathops::PathOps;
//! use std::path::Path;
//!
//! let copied = Path::new("/tmp/a/x.txt").copy_into("/tmp/b", false)?;
//! assert_eq!(copied, Path::new("/tmp/b/x.txt"));
//! # Ok::<(), pathops::FileOpsError>(())
//! ```

pub mod backend;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod platform;
mod path_ext;

pub use backend::{DurabilityMode, EntryKind, FsBackend, StdBackend};
pub use config::{
    Config, LogLevel, default_config_path, default_log_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::{ErrorKind, FileOpsError, Result};
pub use fs_ops::{FileOps, MakeDirectoryOptions};
pub use path_ext::PathOps;
