//! Media tree walking
//!
//! `MediaWalker` pulls media files out of a directory tree lazily, one
//! directory at a time, in breadth-first order.

mod config;
mod filter;
mod media_file;
mod utils;
mod walker;

pub use config::{AUDIO_EXTENSIONS, MediaSet, SortOrder, VIDEO_EXTENSIONS, WalkerConfig};
pub use filter::{ExtensionFilter, dotted_extension};
pub use media_file::MediaFile;
pub use utils::entry_name;
pub use walker::{MediaWalker, Walk, collect_media};
