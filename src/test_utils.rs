//! Test utilities for building temporary media trees and reading playlists back.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use tempfile::TempDir;

/// A temporary directory holding a named playlist root.
///
/// The root is a subdirectory of the temp dir so its name (and therefore the
/// playlist title) is predictable. Everything is removed when dropped.
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty root directory called `name`.
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir_all(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// Path of the playlist root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the temp dir containing the root.
    pub fn parent(&self) -> &Path {
        self.dir.path()
    }

    /// Add a text file below the root, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file with raw content below the root.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory below the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Read the playlist written for this root.
    pub fn read_playlist(&self) -> ParsedPlaylist {
        let name = self.root.file_name().expect("root has a name");
        let path = self.root.join(format!("{}.xspf", name.to_string_lossy()));
        let xml = fs::read_to_string(&path).expect("Failed to read playlist");
        parse_playlist(&xml)
    }
}

/// Playlist contents as read back from XML.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedPlaylist {
    pub namespace: Option<String>,
    pub version: Option<String>,
    pub title: String,
    pub tracks: Vec<ParsedTrack>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedTrack {
    pub number: u32,
    pub title: String,
    pub location: String,
    pub annotation: Option<String>,
    pub images: Vec<String>,
}

/// Parse a playlist document, panicking on malformed XML.
pub fn parse_playlist(xml: &str) -> ParsedPlaylist {
    let mut reader = Reader::from_str(xml);
    let mut playlist = ParsedPlaylist::default();
    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<ParsedTrack> = None;
    let mut num_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match name.as_str() {
                    "playlist" => {
                        for attr in e.attributes().flatten() {
                            let value = String::from_utf8_lossy(&attr.value).into_owned();
                            match attr.key.as_ref() {
                                b"xmlns" => playlist.namespace = Some(value),
                                b"version" => playlist.version = Some(value),
                                _ => {}
                            }
                        }
                    }
                    "track" => current = Some(ParsedTrack::default()),
                    "trackNum" => num_text.clear(),
                    "annotation" => {
                        if let Some(track) = current.as_mut() {
                            track.annotation = Some(String::new());
                        }
                    }
                    "image" => {
                        if let Some(track) = current.as_mut() {
                            track.images.push(String::new());
                        }
                    }
                    _ => {}
                }
                stack.push(name);
            }
            Ok(Event::End(_)) => {
                let name = stack.pop().expect("unbalanced end tag");
                match name.as_str() {
                    "track" => playlist.tracks.push(current.take().expect("track open")),
                    "trackNum" => {
                        if let Some(track) = current.as_mut() {
                            track.number = num_text.trim().parse().expect("numeric trackNum");
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().expect("valid text");
                let Some(tag) = stack.last() else { continue };
                match (current.as_mut(), tag.as_str()) {
                    (Some(_), "trackNum") => num_text.push_str(&text),
                    (Some(track), "title") => track.title.push_str(&text),
                    (Some(track), "location") => track.location.push_str(&text),
                    (Some(track), "annotation") => {
                        if let Some(a) = track.annotation.as_mut() {
                            a.push_str(&text);
                        }
                    }
                    (Some(track), "image") => {
                        if let Some(i) = track.images.last_mut() {
                            i.push_str(&text);
                        }
                    }
                    (None, "title") => playlist.title.push_str(&text),
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed playlist at {}: {}", reader.buffer_position(), e),
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    playlist
}
