//! Error types for playlist generation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while walking a tree or writing a playlist.
#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing playlist: {0}")]
    Write(#[from] io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Text that XML 1.0 cannot represent, such as most C0 control characters.
    #[error("<{element}> text {text:?} contains {character:?}, which XML does not allow")]
    InvalidCharacter {
        element: String,
        text: String,
        character: char,
    },

    /// Track numbering ran past the largest representable number.
    #[error("track number overflow after {last}")]
    TrackNumberOverflow { last: u32 },

    /// A file could not be expressed relative to the playlist root.
    #[error("'{}' is not inside root '{}'", .path.display(), .root.display())]
    PathContainment { path: PathBuf, root: PathBuf },
}

impl PlaylistError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error invalidates the whole run rather than one playlist.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::PathContainment { .. })
    }
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
