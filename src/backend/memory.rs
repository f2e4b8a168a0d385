//! In-memory backend for unit tests.
//!
//! Lets tests reproduce host quirks on demand: copies that silently replace
//! the destination, "exists" errors that carry no OS code, and stats refused
//! for lack of permission.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{EntryKind, FsBackend};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(Vec<u8>),
    Dir,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryBackend {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
    /// Emulate layers where copying onto an existing file succeeds.
    copy_overwrites_silently: bool,
    /// Stats of paths below this directory fail with PermissionDenied.
    unsearchable: Option<PathBuf>,
}

fn exists_err() -> io::Error {
    io::Error::from(io::ErrorKind::AlreadyExists)
}

fn not_found() -> io::Error {
    io::Error::from(io::ErrorKind::NotFound)
}

impl MemoryBackend {
    /// Backend whose root `/` directory exists.
    pub(crate) fn new() -> Self {
        let b = Self::default();
        b.nodes().insert(PathBuf::from("/"), Node::Dir);
        b
    }

    pub(crate) fn with_silent_copy_overwrite(mut self) -> Self {
        self.copy_overwrites_silently = true;
        self
    }

    pub(crate) fn with_unsearchable_dir(mut self, dir: &str) -> Self {
        self.unsearchable = Some(PathBuf::from(dir));
        self
    }

    fn nodes(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Node>> {
        self.nodes.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub(crate) fn add_file(&self, path: &str, data: &str) {
        let p = PathBuf::from(path);
        let mut nodes = self.nodes();
        for anc in p.ancestors().skip(1) {
            nodes.entry(anc.to_path_buf()).or_insert(Node::Dir);
        }
        nodes.insert(p, Node::File(data.as_bytes().to_vec()));
    }

    pub(crate) fn add_dir(&self, path: &str) {
        let p = PathBuf::from(path);
        let mut nodes = self.nodes();
        for anc in p.ancestors() {
            nodes.entry(anc.to_path_buf()).or_insert(Node::Dir);
        }
    }

    pub(crate) fn read(&self, path: &str) -> Option<String> {
        match self.nodes().get(Path::new(path)) {
            Some(Node::File(data)) => Some(String::from_utf8_lossy(data).into_owned()),
            _ => None,
        }
    }

    fn parent_is_dir(nodes: &BTreeMap<PathBuf, Node>, path: &Path) -> io::Result<()> {
        match path.parent().map(|p| nodes.get(p)) {
            Some(Some(Node::Dir)) | None => Ok(()),
            Some(Some(Node::File(_))) => Err(io::Error::from(io::ErrorKind::NotADirectory)),
            Some(None) => Err(not_found()),
        }
    }

    /// `src` and everything below it, keyed by path relative to `src`.
    fn subtree(nodes: &BTreeMap<PathBuf, Node>, src: &Path) -> Vec<(PathBuf, Node)> {
        nodes
            .iter()
            .filter_map(|(p, n)| p.strip_prefix(src).ok().map(|rel| (rel.to_path_buf(), n.clone())))
            .collect()
    }
}

impl FsBackend for MemoryBackend {
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        if let Some(dir) = &self.unsearchable {
            if path != dir.as_path() && path.starts_with(dir) {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
        }
        Ok(self.nodes().get(path).map(|n| match n {
            Node::File(_) => EntryKind::File,
            Node::Dir => EntryKind::Directory,
        }))
    }

    fn copy_item(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let mut nodes = self.nodes();
        if !nodes.contains_key(src) {
            return Err(not_found());
        }
        Self::parent_is_dir(&nodes, dst)?;
        match nodes.get(dst) {
            Some(Node::File(_)) if self.copy_overwrites_silently => {}
            Some(_) => return Err(exists_err()),
            None => {}
        }
        for (rel, node) in Self::subtree(&nodes, src) {
            let target = if rel.as_os_str().is_empty() { dst.to_path_buf() } else { dst.join(rel) };
            nodes.insert(target, node);
        }
        Ok(())
    }

    fn move_item(&self, src: &Path, dst: &Path) -> io::Result<()> {
        let mut nodes = self.nodes();
        if !nodes.contains_key(src) {
            return Err(not_found());
        }
        Self::parent_is_dir(&nodes, dst)?;
        if nodes.contains_key(dst) {
            return Err(exists_err());
        }
        for (rel, node) in Self::subtree(&nodes, src) {
            let old = if rel.as_os_str().is_empty() { src.to_path_buf() } else { src.join(&rel) };
            nodes.remove(&old);
            let target = if rel.as_os_str().is_empty() { dst.to_path_buf() } else { dst.join(rel) };
            nodes.insert(target, node);
        }
        Ok(())
    }

    fn remove_item(&self, path: &Path) -> io::Result<()> {
        let mut nodes = self.nodes();
        if !nodes.contains_key(path) {
            return Err(not_found());
        }
        nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn create_directory(&self, path: &Path, recursive: bool) -> io::Result<()> {
        let mut nodes = self.nodes();
        if recursive {
            let mut missing = Vec::new();
            for anc in path.ancestors() {
                match nodes.get(anc) {
                    Some(Node::Dir) => break,
                    Some(Node::File(_)) => return Err(exists_err()),
                    None => missing.push(anc.to_path_buf()),
                }
            }
            for p in missing {
                nodes.insert(p, Node::Dir);
            }
            return Ok(());
        }
        if nodes.contains_key(path) {
            return Err(exists_err());
        }
        Self::parent_is_dir(&nodes, path)?;
        nodes.insert(path.to_path_buf(), Node::Dir);
        Ok(())
    }

    fn write_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut nodes = self.nodes();
        if let Some(Node::Dir) = nodes.get(path) {
            return Err(io::Error::from(io::ErrorKind::IsADirectory));
        }
        Self::parent_is_dir(&nodes, path)?;
        nodes.insert(path.to_path_buf(), Node::File(data.to_vec()));
        Ok(())
    }
}
