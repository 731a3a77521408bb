//! Discovered media file type

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A media file found during a walk, or supplied directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    path: PathBuf,
    dir: PathBuf,
}

impl MediaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { path, dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name with its final extension stripped.
    pub fn stem(&self) -> Cow<'_, str> {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default()
    }
}
