//! Configuration types for the media walker

use std::cmp::Ordering;
use std::ffi::OsStr;

/// Video container extensions.
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mkv", ".webm"];

/// Audio extensions recognized in addition to video by [`MediaSet::Media`].
pub const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".m4a", ".wav"];

/// Predefined accepted-extension sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaSet {
    /// Video files only
    Video,
    /// Video and audio files
    #[default]
    Media,
}

impl MediaSet {
    pub fn extensions(self) -> Vec<String> {
        let audio: &[&str] = match self {
            MediaSet::Video => &[],
            MediaSet::Media => AUDIO_EXTENSIONS,
        };
        VIDEO_EXTENSIONS
            .iter()
            .chain(audio)
            .map(|ext| ext.to_string())
            .collect()
    }
}

/// Ordering applied to the subdirectories and files of each directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Shorter names first, ties broken by name
    #[default]
    LengthThenName,
    /// Plain name order
    Name,
}

impl SortOrder {
    /// Compare two file names under this ordering.
    pub fn compare(self, a: &OsStr, b: &OsStr) -> Ordering {
        match self {
            SortOrder::LengthThenName => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            SortOrder::Name => a.cmp(b),
        }
    }
}

/// Configuration for media walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Accepted extensions, dot included, matched case-sensitively
    pub extensions: Vec<String>,
    pub sort: SortOrder,
}

impl WalkerConfig {
    pub fn for_set(set: MediaSet) -> Self {
        Self {
            extensions: set.extensions(),
            ..Default::default()
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extensions: MediaSet::default().extensions(),
            sort: SortOrder::default(),
        }
    }
}
