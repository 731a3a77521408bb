//! Track entries derived from media files

use std::path::Path;

use crate::error::Result;
use crate::sidecar::{SidecarConfig, resolve_sidecars};
use crate::tree::MediaFile;

use super::location::encode_location;

/// One playlist entry, built right before it is written.
/// The track number is assigned by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub location: String,
    pub annotation: Option<String>,
    pub images: Vec<String>,
}

impl Track {
    /// Build the entry for `file`, resolving its sidecars and root-relative URIs.
    pub fn from_media(root: &Path, file: &MediaFile, sidecars: &SidecarConfig) -> Result<Self> {
        let location = encode_location(root, file.path())?;
        let found = resolve_sidecars(file, sidecars)?;
        let images = found
            .images
            .iter()
            .map(|image| encode_location(root, image))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: file.stem().into_owned(),
            location,
            annotation: found.annotation,
            images,
        })
    }
}
