//! Sidecar resolution: descriptions and artwork stored next to a media file
//!
//! A sidecar shares the media file's extensionless base name, so for
//! `01 Intro.mp4` the group is every `01 Intro.*` in the same directory,
//! keyed by whatever follows the base name (`01 Intro.x.jpg` is `.x.jpg`).

use std::fs;
use std::path::PathBuf;

use glob::Pattern;
use tracing::debug;

use crate::error::{PlaylistError, Result};
use crate::tree::{MediaFile, entry_name};

/// Extension of the text file used as a track annotation.
pub const DESCRIPTION_EXTENSION: &str = ".description";

/// Default artwork extensions.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Which sidecar extensions are recognized.
#[derive(Debug, Clone)]
pub struct SidecarConfig {
    pub annotation_extension: String,
    pub image_extensions: Vec<String>,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            annotation_extension: DESCRIPTION_EXTENSION.to_string(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Sidecar data found for one media file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidecars {
    /// Verbatim content of the first description file
    pub annotation: Option<String>,
    /// Artwork paths, sorted by extension then file name
    pub images: Vec<PathBuf>,
}

/// One member of a sidecar group.
#[derive(Debug)]
struct GroupEntry {
    extension: String,
    path: PathBuf,
}

/// Resolve the description and images sharing `file`'s base name.
pub fn resolve_sidecars(file: &MediaFile, config: &SidecarConfig) -> Result<Sidecars> {
    let group = sidecar_group(file)?;

    let mut sidecars = Sidecars::default();
    for entry in group {
        if entry.extension == config.annotation_extension {
            if sidecars.annotation.is_none() {
                let text = fs::read_to_string(&entry.path)
                    .map_err(|e| PlaylistError::io(&entry.path, e))?;
                sidecars.annotation = Some(text);
            }
        } else if config.image_extensions.contains(&entry.extension) {
            sidecars.images.push(entry.path);
        }
    }

    debug!(
        file = %file.path().display(),
        annotation = sidecars.annotation.is_some(),
        images = sidecars.images.len(),
        "resolved sidecars"
    );
    Ok(sidecars)
}

/// Every regular file in the media file's directory matching `<stem>.*`.
fn sidecar_group(file: &MediaFile) -> Result<Vec<GroupEntry>> {
    let dir = file.dir();
    let stem = file.stem();
    let Ok(pattern) = Pattern::new(&format!("{}.*", Pattern::escape(&stem))) else {
        return Ok(Vec::new());
    };

    let mut group = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PlaylistError::io(dir, e))? {
        let path = entry.map_err(|e| PlaylistError::io(dir, e))?.path();
        let name = entry_name(&path).to_string_lossy().into_owned();
        if !pattern.matches(&name) || !path.is_file() {
            continue;
        }
        let extension = name[stem.len()..].to_string();
        group.push(GroupEntry { extension, path });
    }

    group.sort_by(|a, b| {
        a.extension
            .cmp(&b.extension)
            .then_with(|| entry_name(&a.path).cmp(entry_name(&b.path)))
    });
    Ok(group)
}
