//! I/O error helpers.
//!
//! Turns a backend `io::Error` into a [`FileOpsError`] and builds human-friendly
//! context strings with actionable hints. OS-code knowledge stays in
//! `crate::platform`; this module only asks its predicates.

use std::io;
use std::path::Path;

use crate::errors::FileOpsError;
use crate::platform;

fn hint(e: &io::Error) -> Option<&'static str> {
    if platform::is_permission_error(e) {
        Some("permission denied; check ownership and write permissions")
    } else if platform::is_locked_error(e) {
        Some("resource busy; another process is holding the path")
    } else if platform::is_not_found_error(e) {
        Some("path not found; verify it exists")
    } else if platform::is_already_exists_error(e) {
        Some("already exists; remove the target or request overwrite")
    } else if platform::is_cross_device_error(e) {
        Some("cross-filesystem; atomic rename not possible")
    } else if e.kind() == io::ErrorKind::StorageFull {
        Some("insufficient space on device")
    } else {
        None
    }
}

/// Format `op`, `path` and the error, plus a hint and the OS code when known.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(h) = hint(e) {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Map a backend failure on `path` to the error taxonomy.
/// Unrecognized failures pass through untouched as [`FileOpsError::Io`].
pub fn classify_io_error(op: &'static str, path: &Path, e: io::Error) -> FileOpsError {
    let path_buf = path.to_path_buf();
    if platform::is_already_exists_error(&e) {
        FileOpsError::AlreadyExists(path_buf)
    } else if platform::is_a_directory_error(&e) {
        FileOpsError::DestinationIsDirectory(path_buf)
    } else if platform::is_not_a_directory_error(&e) {
        FileOpsError::DestinationIsFile(path_buf)
    } else if platform::is_permission_error(&e) {
        FileOpsError::PermissionDenied {
            context: describe_io_error(op, path, &e),
            path: path_buf,
        }
    } else if platform::is_locked_error(&e) {
        FileOpsError::Locked {
            context: describe_io_error(op, path, &e),
            path: path_buf,
        }
    } else {
        FileOpsError::Io {
            op,
            path: path_buf,
            source: e,
        }
    }
}
