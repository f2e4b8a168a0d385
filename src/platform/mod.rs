//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.
//!
//! Error predicates look at the raw OS code first. Errors built without one
//! (synthetic errors, in-memory backends) fall back to `io::ErrorKind`.

use std::io;

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
use unix as imp;
#[cfg(not(unix))]
use windows as imp;

pub use imp::open_log_file_secure_append;

fn classify(e: &io::Error, by_code: fn(i32) -> bool, by_kind: &[io::ErrorKind]) -> bool {
    match e.raw_os_error() {
        Some(code) => by_code(code),
        None => by_kind.contains(&e.kind()),
    }
}

/// True when `e` reports that the target path already exists.
///
/// This is the only place that decides whether an "exists" failure may be
/// treated as pre-existence; every call site goes through it.
pub fn is_already_exists_error(e: &io::Error) -> bool {
    classify(e, imp::is_already_exists_code, &[io::ErrorKind::AlreadyExists])
}

pub fn is_not_found_error(e: &io::Error) -> bool {
    classify(e, imp::is_not_found_code, &[io::ErrorKind::NotFound])
}

pub fn is_permission_error(e: &io::Error) -> bool {
    classify(
        e,
        imp::is_permission_code,
        &[io::ErrorKind::PermissionDenied, io::ErrorKind::ReadOnlyFilesystem],
    )
}

pub fn is_locked_error(e: &io::Error) -> bool {
    classify(e, imp::is_locked_code, &[io::ErrorKind::ResourceBusy])
}

pub fn is_a_directory_error(e: &io::Error) -> bool {
    classify(e, imp::is_a_directory_code, &[io::ErrorKind::IsADirectory])
}

pub fn is_not_a_directory_error(e: &io::Error) -> bool {
    classify(e, imp::is_not_a_directory_code, &[io::ErrorKind::NotADirectory])
}

pub fn is_cross_device_error(e: &io::Error) -> bool {
    classify(e, imp::is_cross_device_code, &[io::ErrorKind::CrossesDevices])
}

/// OS-coded "already exists" error, for backends refusing an occupied destination.
pub fn already_exists_error() -> io::Error {
    io::Error::from_raw_os_error(imp::ALREADY_EXISTS_CODE)
}
