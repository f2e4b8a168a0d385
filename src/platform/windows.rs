//! Windows implementations of platform helpers (best-effort, minimal ACL awareness).
//!
//! Win32 reports "already exists" with two different codes depending on the
//! API that failed (CreateFile vs CreateDirectory/MoveFileEx); both count.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use windows_sys::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_ALREADY_EXISTS, ERROR_DIRECTORY, ERROR_FILE_EXISTS,
    ERROR_FILE_NOT_FOUND, ERROR_LOCK_VIOLATION, ERROR_NOT_SAME_DEVICE, ERROR_PATH_NOT_FOUND,
    ERROR_SHARING_VIOLATION, ERROR_WRITE_PROTECT,
};

pub(super) const ALREADY_EXISTS_CODE: i32 = ERROR_ALREADY_EXISTS as i32;

pub(super) fn is_already_exists_code(code: i32) -> bool {
    let code = code as u32;
    code == ERROR_ALREADY_EXISTS || code == ERROR_FILE_EXISTS
}

pub(super) fn is_not_found_code(code: i32) -> bool {
    let code = code as u32;
    code == ERROR_FILE_NOT_FOUND || code == ERROR_PATH_NOT_FOUND
}

pub(super) fn is_permission_code(code: i32) -> bool {
    let code = code as u32;
    code == ERROR_ACCESS_DENIED || code == ERROR_WRITE_PROTECT
}

pub(super) fn is_locked_code(code: i32) -> bool {
    let code = code as u32;
    code == ERROR_SHARING_VIOLATION || code == ERROR_LOCK_VIOLATION
}

/// Win32 reports writes to a directory as access denied; nothing to match here.
pub(super) fn is_a_directory_code(_code: i32) -> bool {
    false
}

pub(super) fn is_not_a_directory_code(code: i32) -> bool {
    code as u32 == ERROR_DIRECTORY
}

pub(super) fn is_cross_device_code(code: i32) -> bool {
    code as u32 == ERROR_NOT_SAME_DEVICE
}

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
