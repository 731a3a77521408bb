//! Playlist document output
//!
//! # Module Structure
//!
//! - `config` - Playlist configuration
//! - `location` - Root-relative, percent-encoded URIs and output placement
//! - `track` - Track entries built from media files
//! - `xspf` - Streaming XSPF writer

mod config;
mod location;
mod track;
mod xspf;

pub use config::PlaylistConfig;
pub use location::{encode_location, encode_segment, playlist_path, playlist_title, relative_path};
pub use track::Track;
pub use xspf::{PlaylistWriter, XSPF_NAMESPACE, XSPF_VERSION};
