//! Playlist configuration types

use crate::sidecar::SidecarConfig;
use crate::tree::WalkerConfig;

const DEFAULT_INDENT: usize = 2;

/// Configuration for one playlist generation run.
#[derive(Debug, Clone)]
pub struct PlaylistConfig {
    pub walker: WalkerConfig,
    pub sidecars: SidecarConfig,
    /// Number given to the first track
    pub track_base: u32,
    /// Spaces per nesting level in the XML output
    pub indent: usize,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            walker: WalkerConfig::default(),
            sidecars: SidecarConfig::default(),
            track_base: 1,
            indent: DEFAULT_INDENT,
        }
    }
}
