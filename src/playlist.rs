//! Playlist generation: walk, resolve, stream to disk
//!
//! Output is written to a temporary file in the destination directory and
//! renamed over `<root>/<root-name>.xspf` only once the document is
//! complete, so a failed run never leaves a truncated playlist behind.
//! A rerun keeps the existing playlist's permissions; a new playlist gets
//! the usual mode for a freshly created file.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::error::{PlaylistError, Result};
use crate::output::{PlaylistConfig, PlaylistWriter, Track, playlist_path, playlist_title};
use crate::tree::{MediaFile, MediaWalker};

/// Result of writing one playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub path: PathBuf,
    pub tracks: usize,
}

/// Drives the walker and the writer for one configuration.
pub struct PlaylistGenerator {
    config: PlaylistConfig,
}

impl PlaylistGenerator {
    pub fn new(config: PlaylistConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    /// Walk `dir` and write `<dir>/<dir-name>.xspf`.
    pub fn generate_for_directory(&self, dir: &Path) -> Result<PlaylistSummary> {
        let root = fs::canonicalize(dir).map_err(|e| PlaylistError::io(dir, e))?;
        let walker = MediaWalker::new(self.config.walker.clone());
        self.write_to_file(&root, walker.walk(&root))
    }

    /// Write a playlist of `files`, in the given order, rooted at `cwd`.
    pub fn generate_for_files(&self, cwd: &Path, files: &[PathBuf]) -> Result<PlaylistSummary> {
        let root = std::path::absolute(cwd).map_err(|e| PlaylistError::io(cwd, e))?;
        let media = files.iter().map(|f| Ok(MediaFile::new(root.join(f))));
        self.write_to_file(&root, media)
    }

    /// Stream a playlist for `files` into `out`, returning it with the track count.
    pub fn render<W, I>(&self, root: &Path, files: I, out: W) -> Result<(W, usize)>
    where
        W: Write,
        I: IntoIterator<Item = Result<MediaFile>>,
    {
        let mut writer = PlaylistWriter::new(
            out,
            &playlist_title(root),
            self.config.track_base,
            self.config.indent,
        )?;

        for file in files {
            let file = file?;
            let track = Track::from_media(root, &file, &self.config.sidecars)?;
            let number = writer.push(&track)?;
            debug!(number, location = %track.location, "wrote track");
        }

        writer.finish()
    }

    fn write_to_file<I>(&self, root: &Path, files: I) -> Result<PlaylistSummary>
    where
        I: IntoIterator<Item = Result<MediaFile>>,
    {
        let dest = playlist_path(root);
        let temp = create_temp(root).map_err(|e| PlaylistError::io(root, e))?;

        let (buffered, tracks) = self.render(root, files, BufWriter::new(temp))?;
        let temp = buffered
            .into_inner()
            .map_err(|e| PlaylistError::Write(e.into_error()))?;
        if let Ok(existing) = fs::metadata(&dest) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| PlaylistError::io(temp.path(), e))?;
        }
        temp.persist(&dest)
            .map_err(|e| PlaylistError::io(&dest, e.error))?;

        info!(path = %dest.display(), tracks, "wrote playlist");
        Ok(PlaylistSummary { path: dest, tracks })
    }
}

/// Temp file next to the playlist, created with the umask-filtered
/// default mode rather than `tempfile`'s owner-only 0600.
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

impl Default for PlaylistGenerator {
    fn default() -> Self {
        Self::new(PlaylistConfig::default())
    }
}
