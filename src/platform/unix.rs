//! Unix implementations of platform helpers.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

pub(super) const ALREADY_EXISTS_CODE: i32 = libc::EEXIST;

pub(super) fn is_already_exists_code(code: i32) -> bool {
    code == libc::EEXIST
}

pub(super) fn is_not_found_code(code: i32) -> bool {
    code == libc::ENOENT
}

pub(super) fn is_permission_code(code: i32) -> bool {
    matches!(code, libc::EACCES | libc::EPERM | libc::EROFS)
}

pub(super) fn is_locked_code(code: i32) -> bool {
    matches!(code, libc::EBUSY | libc::ETXTBSY)
}

pub(super) fn is_a_directory_code(code: i32) -> bool {
    code == libc::EISDIR
}

pub(super) fn is_not_a_directory_code(code: i32) -> bool {
    code == libc::ENOTDIR
}

pub(super) fn is_cross_device_code(code: i32) -> bool {
    code == libc::EXDEV
}

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, we preserve its existing permissions to avoid
/// clobbering administrator adjustments (e.g. group-readable for log shipping).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}
