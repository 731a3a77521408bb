//! Root-relative URI construction for track locations and images

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

use crate::error::{PlaylistError, Result};

/// Everything except RFC 3986 unreserved characters is encoded, `#` included.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Path of `path` below `root`, made only of normal components.
pub fn relative_path<'a>(root: &Path, path: &'a Path) -> Result<&'a Path> {
    let contained = || PlaylistError::PathContainment {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };
    let rel = path.strip_prefix(root).map_err(|_| contained())?;
    let mut components = rel.components().peekable();
    if components.peek().is_none() || !components.all(|c| matches!(c, Component::Normal(_))) {
        return Err(contained());
    }
    Ok(rel)
}

/// Percent-encode one path segment from its raw bytes.
pub fn encode_segment(segment: &OsStr) -> String {
    percent_encode(segment.as_encoded_bytes(), SEGMENT).to_string()
}

/// Relative URI for `path`, encoded segment by segment and joined with `/`.
pub fn encode_location(root: &Path, path: &Path) -> Result<String> {
    let rel = relative_path(root, path)?;
    let segments: Vec<String> = rel
        .components()
        .map(|c| encode_segment(c.as_os_str()))
        .collect();
    Ok(segments.join("/"))
}

/// Where the playlist for `root` is written: inside the root, named after it.
pub fn playlist_path(root: &Path) -> PathBuf {
    root.join(format!("{}.xspf", playlist_title(root)))
}

/// Playlist title: the root directory's name.
pub fn playlist_title(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "playlist".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_reserved_characters_are_encoded() {
        let root = Path::new("/music/Show");
        let loc = encode_location(root, Path::new("/music/Show/Extras/#1 a?b&c [x].mkv")).unwrap();
        assert_eq!(loc, "Extras/%231%20a%3Fb%26c%20%5Bx%5D.mkv");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        let root = Path::new("/m");
        let loc = encode_location(root, Path::new("/m/a-b_c.d~e.mp4")).unwrap();
        assert_eq!(loc, "a-b_c.d~e.mp4");
    }

    #[test]
    fn test_decoding_restores_relative_path() {
        let root = Path::new("/m");
        let names = ["日本語/曲 #2.mp3", "100% fun/a+b=c;d.wav", "sp ace/'quote\".m4a"];
        for name in names {
            let loc = encode_location(root, &root.join(name)).unwrap();
            assert!(!loc.contains('#') && !loc.contains(' '), "{}", loc);
            assert_eq!(percent_decode_str(&loc).decode_utf8().unwrap(), name);
        }
    }

    #[test]
    fn test_path_outside_root_is_rejected() {
        let root = Path::new("/music/Show");
        let err = encode_location(root, Path::new("/music/Other/a.mp4")).unwrap_err();
        assert!(matches!(err, PlaylistError::PathContainment { .. }));
    }

    #[test]
    fn test_parent_components_are_rejected() {
        let root = Path::new("/music/Show");
        let err = encode_location(root, Path::new("/music/Show/../Other/a.mp4")).unwrap_err();
        assert!(err.is_fatal());
        assert!(encode_location(root, root).is_err());
    }

    #[test]
    fn test_playlist_path_is_inside_root() {
        assert_eq!(
            playlist_path(Path::new("/music/Show")),
            PathBuf::from("/music/Show/Show.xspf")
        );
        assert_eq!(playlist_title(Path::new("/")), "playlist");
    }
}
