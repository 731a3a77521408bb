//! Streaming XSPF writer
//!
//! Events go straight to the underlying writer; no document tree is kept.
//! The `trackList` element is opened lazily so an empty playlist renders
//! as `<trackList/>`.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{PlaylistError, Result};

use super::track::Track;

pub const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";
pub const XSPF_VERSION: &str = "1";

/// Whether `c` may appear in XML 1.0 character data.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Writes one playlist document, track by track.
pub struct PlaylistWriter<W: Write> {
    writer: Writer<W>,
    /// `None` once numbering has passed `u32::MAX`
    next_number: Option<u32>,
    track_count: usize,
}

impl<W: Write> PlaylistWriter<W> {
    /// Write the document header and title.
    pub fn new(inner: W, title: &str, track_base: u32, indent: usize) -> Result<Self> {
        let mut writer = Writer::new_with_indent(inner, b' ', indent);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("playlist")
                .with_attributes([("xmlns", XSPF_NAMESPACE), ("version", XSPF_VERSION)]),
        ))?;

        let mut this = Self {
            writer,
            next_number: Some(track_base),
            track_count: 0,
        };
        this.text_element("title", title)?;
        Ok(this)
    }

    /// Append a track and return the number it was given.
    pub fn push(&mut self, track: &Track) -> Result<u32> {
        let number = self
            .next_number
            .ok_or(PlaylistError::TrackNumberOverflow { last: u32::MAX })?;
        if self.track_count == 0 {
            self.writer
                .write_event(Event::Start(BytesStart::new("trackList")))?;
        }

        self.writer.write_event(Event::Start(BytesStart::new("track")))?;
        self.text_element("trackNum", &number.to_string())?;
        self.text_element("title", &track.title)?;
        self.text_element("location", &track.location)?;
        if let Some(annotation) = &track.annotation {
            self.text_element("annotation", annotation)?;
        }
        for image in &track.images {
            self.text_element("image", image)?;
        }
        self.writer.write_event(Event::End(BytesEnd::new("track")))?;

        self.next_number = number.checked_add(1);
        self.track_count += 1;
        Ok(number)
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// Close the document and hand back the underlying writer, flushed.
    pub fn finish(mut self) -> Result<(W, usize)> {
        if self.track_count == 0 {
            self.writer
                .write_event(Event::Empty(BytesStart::new("trackList")))?;
        } else {
            self.writer
                .write_event(Event::End(BytesEnd::new("trackList")))?;
        }
        self.writer
            .write_event(Event::End(BytesEnd::new("playlist")))?;

        let mut inner = self.writer.into_inner();
        inner.write_all(b"\n")?;
        inner.flush()?;
        Ok((inner, self.track_count))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        if let Some(character) = text.chars().find(|c| !is_xml_char(*c)) {
            return Err(PlaylistError::InvalidCharacter {
                element: name.to_string(),
                text: text.to_string(),
                character,
            });
        }
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(title: &str, tracks: &[Track], base: u32) -> String {
        let mut writer = PlaylistWriter::new(Vec::new(), title, base, 2).unwrap();
        for track in tracks {
            writer.push(track).unwrap();
        }
        let (bytes, count) = writer.finish().unwrap();
        assert_eq!(count, tracks.len());
        String::from_utf8(bytes).unwrap()
    }

    fn track(title: &str) -> Track {
        Track {
            title: title.to_string(),
            location: format!("{}.mp4", title),
            annotation: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_empty_playlist() {
        let xml = render("Empty", &[], 1);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <playlist xmlns=\"http://xspf.org/ns/0/\" version=\"1\">\n  \
             <title>Empty</title>\n  \
             <trackList/>\n\
             </playlist>\n"
        );
    }

    #[test]
    fn test_full_track_layout() {
        let tracks = [Track {
            title: "01 Intro".to_string(),
            location: "01%20Intro.mp4".to_string(),
            annotation: Some("Pilot episode".to_string()),
            images: vec!["01%20Intro.jpg".to_string()],
        }];
        let xml = render("Show", &tracks, 1);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <playlist xmlns=\"http://xspf.org/ns/0/\" version=\"1\">\n  \
             <title>Show</title>\n  \
             <trackList>\n    \
             <track>\n      \
             <trackNum>1</trackNum>\n      \
             <title>01 Intro</title>\n      \
             <location>01%20Intro.mp4</location>\n      \
             <annotation>Pilot episode</annotation>\n      \
             <image>01%20Intro.jpg</image>\n    \
             </track>\n  \
             </trackList>\n\
             </playlist>\n"
        );
    }

    #[test]
    fn test_numbering_starts_at_base() {
        let mut writer = PlaylistWriter::new(Vec::new(), "t", 5, 2).unwrap();
        assert_eq!(writer.push(&track("a")).unwrap(), 5);
        assert_eq!(writer.push(&track("b")).unwrap(), 6);
        assert_eq!(writer.push(&track("c")).unwrap(), 7);
        assert_eq!(writer.track_count(), 3);
    }

    #[test]
    fn test_numbering_stops_at_u32_max() {
        let mut writer = PlaylistWriter::new(Vec::new(), "t", u32::MAX, 2).unwrap();
        assert_eq!(writer.push(&track("last")).unwrap(), u32::MAX);
        let err = writer.push(&track("one too many")).unwrap_err();
        assert!(matches!(err, PlaylistError::TrackNumberOverflow { .. }), "{}", err);
        assert_eq!(writer.track_count(), 1);
    }

    #[test]
    fn test_xml_char_ranges() {
        for c in ['\t', '\n', '\r', ' ', 'é', '\u{D7FF}', '\u{E000}', '\u{1F3B5}'] {
            assert!(is_xml_char(c), "{:?}", c);
        }
        for c in ['\u{0}', '\u{8}', '\u{B}', '\u{C}', '\u{1B}', '\u{1F}', '\u{FFFE}', '\u{FFFF}'] {
            assert!(!is_xml_char(c), "{:?}", c);
        }
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let mut t = track("fine");
        t.annotation = Some("form\u{c}feed \u{1b}[1m bold".to_string());
        let mut writer = PlaylistWriter::new(Vec::new(), "t", 1, 2).unwrap();
        match writer.push(&t).unwrap_err() {
            PlaylistError::InvalidCharacter { element, character, .. } => {
                assert_eq!(element, "annotation");
                assert_eq!(character, '\u{c}');
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_control_character_in_title_is_rejected() {
        let result = PlaylistWriter::new(Vec::new(), "bell\u{7}", 1, 2);
        assert!(matches!(
            result,
            Err(PlaylistError::InvalidCharacter { character: '\u{7}', .. })
        ));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut t = track("Tom & Jerry <live>");
        t.annotation = Some("a < b && c > d".to_string());
        let xml = render("R&D", &[t], 1);
        assert!(xml.contains("<title>R&amp;D</title>"));
        assert!(xml.contains("<title>Tom &amp; Jerry &lt;live&gt;</title>"));
        assert!(xml.contains("<annotation>a &lt; b &amp;&amp; c &gt; d</annotation>"));
    }
}
