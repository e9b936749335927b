//! Filesystem path descriptors for populating trees.
//!
//! `FileInfo` compares and orders by path components, so `/b` sorts right
//! before everything under `/b/` and `/b-x` never lands between them. That
//! makes a `PathTree<FileInfo>` find descend one path segment per level.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A path and whether it names a directory.
///
/// Equality, ordering and hashing look at the path only.
#[derive(Debug, Clone)]
pub struct FileInfo {
    absolute_path: String,
    is_directory: bool,
}

impl FileInfo {
    pub fn new(absolute_path: impl Into<String>, is_directory: bool) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            is_directory,
        }
    }

    pub fn file(absolute_path: impl Into<String>) -> Self {
        Self::new(absolute_path, false)
    }

    pub fn directory(absolute_path: impl Into<String>) -> Self {
        Self::new(absolute_path, true)
    }

    pub fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Exact string match on the path.
    pub fn has_path(&self, path: &str) -> bool {
        self.absolute_path == path
    }

    /// Non-empty `/`-separated segments.
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        self.absolute_path.split('/').filter(|s| !s.is_empty())
    }

    /// Everything before the last segment; `None` at the top level.
    pub fn parent_path(&self) -> Option<&str> {
        let trimmed = self.absolute_path.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) if trimmed.len() > 1 => Some("/"),
            Some(index) if index > 0 => Some(&trimmed[..index]),
            _ => None,
        }
    }
}

impl PartialEq for FileInfo {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FileInfo {}

impl PartialOrd for FileInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components().cmp(other.components())
    }
}

impl Hash for FileInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for component in self.components() {
            component.hash(state);
        }
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.absolute_path)
    }
}
