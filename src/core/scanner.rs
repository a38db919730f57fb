use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Walks a source tree in lexical order, pruning omitted directories at any
/// depth. Entries that cannot be read are logged and skipped.
pub struct FileScanner<'a> {
    omit: &'a BTreeSet<String>,
}

impl<'a> FileScanner<'a> {
    pub fn new(omit: &'a BTreeSet<String>) -> Self {
        Self { omit }
    }

    /// Lazily yield every regular file under `root` that is not inside an
    /// omitted directory. Symlinks are not followed.
    pub fn candidates(&self, root: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        let omit = self.omit;
        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !is_omitted(entry, omit))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
    }

    pub fn scan_directory(&self, root: &Path) -> Vec<PathBuf> {
        self.candidates(root).collect()
    }
}

fn is_omitted(entry: &DirEntry, omit: &BTreeSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| omit.contains(name))
}

/// `path` relative to `root`, joined with `/` on every platform.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
