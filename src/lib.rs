//! plgen - scan a media tree and write an XSPF playlist with sidecar metadata

pub mod error;
pub mod output;
pub mod playlist;
pub mod sidecar;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{PlaylistError, Result};
pub use output::{PlaylistConfig, PlaylistWriter, Track, encode_location, playlist_path};
pub use playlist::{PlaylistGenerator, PlaylistSummary};
pub use sidecar::{SidecarConfig, Sidecars, resolve_sidecars};
pub use tree::{MediaFile, MediaSet, MediaWalker, SortOrder, WalkerConfig, collect_media};
