use super::indicators::IndicatorTables;
use crate::error::Result;
use log::debug;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    /// Path relative to the template root, `/`-separated.
    pub rel_path: String,
    pub file_name: String,
}

impl IndexedFile {
    pub fn is_hidden(&self) -> bool {
        self.file_name.starts_with('.')
    }
}

/// Every file under a template root, collected by a single walk.
#[derive(Debug, Clone)]
pub struct FileIndex {
    root: PathBuf,
    files: Vec<IndexedFile>,
}

// Files before subdirectories, then by name, so the order matches a top-down walk.
fn walk_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

impl FileIndex {
    pub fn build(root: &Path, tables: &IndicatorTables) -> Result<Self> {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by(walk_order)
            .into_iter()
            .filter_entry(|entry| {
                // The root itself may be named `.` or live in a hidden dir.
                entry.depth() == 0
                    || !(entry.file_type().is_dir()
                    && tables.is_ignored_dir(&entry.file_name().to_string_lossy()))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() || entry.path().is_dir() {
                continue;
            }
            if let Some(rel_path) = relative_path(root, entry.path()) {
                files.push(IndexedFile {
                    rel_path,
                    file_name: entry.file_name().to_string_lossy().into_owned(),
                });
            }
        }

        debug!("Indexed {} files under {}", files.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[IndexedFile] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.rel_path.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Direct existence check under the root. A trailing `/` on the marker is
    /// ignored, so `app/` matches a file or a directory named `app`.
    pub fn root_has(&self, marker: &str) -> bool {
        let marker = marker.trim_end_matches('/');
        !marker.is_empty() && self.root.join(marker).exists()
    }
}
