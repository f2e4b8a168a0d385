//! Metadata preservation for copies.
//! Copies timestamps (and on Unix the permission bits) from source to destination.

use filetime::{FileTime, set_file_times};
use std::fs;
use std::io;
use std::path::Path;

pub(super) fn preserve_metadata(src: &Path, dest: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;

    let (at_opt, mt_opt) = {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            let mt = FileTime::from_unix_time(meta.mtime(), meta.mtime_nsec() as u32);
            let at = FileTime::from_unix_time(meta.atime(), meta.atime_nsec() as u32);
            (Some(at), Some(mt))
        }
        #[cfg(not(unix))]
        {
            let at = meta.accessed().ok().map(FileTime::from_system_time);
            let mt = meta.modified().ok().map(FileTime::from_system_time);
            (at, mt)
        }
    };

    // Timestamps before permissions: a read-only destination refuses the update on Windows.
    if let (Some(at), Some(mt)) = (at_opt, mt_opt) {
        set_file_times(dest, at, mt)?;
    }
    fs::set_permissions(dest, meta.permissions())?;

    Ok(())
}
