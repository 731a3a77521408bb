//! MediaWalker - breadth-first discovery of media files

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::error::{PlaylistError, Result};

use super::config::WalkerConfig;
use super::filter::ExtensionFilter;
use super::media_file::MediaFile;
use super::utils::sort_by_name;

/// Walker producing media files in breadth-first order.
///
/// Directories are visited first-in-first-out; within each directory both
/// subdirectories and files are ordered by the configured [`SortOrder`].
///
/// [`SortOrder`]: super::SortOrder
pub struct MediaWalker {
    config: WalkerConfig,
}

impl MediaWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Start a lazy walk rooted at `root`.
    pub fn walk(&self, root: &Path) -> Walk<'_> {
        Walk {
            config: &self.config,
            queue: VecDeque::from([Pending {
                path: root.to_path_buf(),
                parent: None,
            }]),
            ready: VecDeque::new(),
            failed: false,
        }
    }

    /// Read one directory, returning its subdirectories and accepted files, both sorted.
    fn read_directory(config: &WalkerConfig, dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let filter = ExtensionFilter::new(&config.extensions);
        let entries = fs::read_dir(dir).map_err(|e| PlaylistError::io(dir, e))?;

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| PlaylistError::io(dir, e))?.path();
            // Follows symlinks; broken links surface as errors
            let meta = fs::metadata(&path).map_err(|e| PlaylistError::io(&path, e))?;
            if meta.is_dir() {
                dirs.push(path);
            } else if meta.is_file() && filter.is_included(&path) {
                files.push(path);
            }
        }

        sort_by_name(&mut dirs, config.sort);
        sort_by_name(&mut files, config.sort);
        Ok((dirs, files))
    }
}

/// Canonical path of a directory being walked, linked to its parent's.
struct Ancestry {
    dir: PathBuf,
    parent: Option<Rc<Ancestry>>,
}

impl Ancestry {
    fn contains(&self, dir: &Path) -> bool {
        let mut node = Some(self);
        while let Some(n) = node {
            if n.dir.as_path() == dir {
                return true;
            }
            node = n.parent.as_deref();
        }
        false
    }
}

/// A queued directory and the chain of directories that led to it.
struct Pending {
    path: PathBuf,
    parent: Option<Rc<Ancestry>>,
}

impl Pending {
    /// Resolve the directory and refuse it if it is one of its own ancestors.
    fn enter(self) -> Result<(PathBuf, Rc<Ancestry>)> {
        let canonical =
            fs::canonicalize(&self.path).map_err(|e| PlaylistError::io(&self.path, e))?;
        if let Some(parent) = &self.parent {
            if parent.contains(&canonical) {
                let loop_err = io::Error::other(format!(
                    "filesystem loop: revisits '{}'",
                    canonical.display()
                ));
                return Err(PlaylistError::io(&self.path, loop_err));
            }
        }
        let node = Rc::new(Ancestry {
            dir: canonical,
            parent: self.parent,
        });
        Ok((self.path, node))
    }
}

/// Single-pass iterator over the media files under one root.
/// Stops after yielding the first error.
pub struct Walk<'a> {
    config: &'a WalkerConfig,
    queue: VecDeque<Pending>,
    ready: VecDeque<MediaFile>,
    failed: bool,
}

impl Iterator for Walk<'_> {
    type Item = Result<MediaFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.ready.pop_front() {
                return Some(Ok(file));
            }
            if self.failed {
                return None;
            }
            let pending = self.queue.pop_front()?;
            let scanned = pending.enter().and_then(|(dir, ancestry)| {
                MediaWalker::read_directory(self.config, &dir).map(|found| (dir, ancestry, found))
            });
            match scanned {
                Ok((dir, ancestry, (dirs, files))) => {
                    debug!(
                        dir = %dir.display(),
                        subdirs = dirs.len(),
                        files = files.len(),
                        "scanned directory"
                    );
                    self.queue.extend(dirs.into_iter().map(|path| Pending {
                        path,
                        parent: Some(Rc::clone(&ancestry)),
                    }));
                    self.ready.extend(files.into_iter().map(MediaFile::new));
                }
                Err(e) => {
                    self.failed = true;
                    self.queue.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Collect every media file under `root` in walk order.
pub fn collect_media(root: &Path, config: &WalkerConfig) -> Result<Vec<MediaFile>> {
    MediaWalker::new(config.clone()).walk(root).collect()
}
