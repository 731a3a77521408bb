//! Extension filtering for media discovery

use std::path::Path;

/// Accepted-extension filter.
/// Extensions carry their leading dot and are compared case-sensitively.
pub struct ExtensionFilter<'a>(&'a [String]);

impl<'a> ExtensionFilter<'a> {
    pub fn new(extensions: &'a [String]) -> Self {
        Self(extensions)
    }

    /// Check if a path's extension is accepted.
    pub fn is_included(&self, path: &Path) -> bool {
        dotted_extension(path).is_some_and(|ext| self.0.iter().any(|e| *e == ext))
    }
}

/// Extension of `path` with its leading dot, e.g. `".mp4"`.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let exts = vec![".mp4".to_string(), ".mkv".to_string()];
        let filter = ExtensionFilter::new(&exts);
        assert!(filter.is_included(Path::new("show/01 Intro.mp4")));
        assert!(filter.is_included(Path::new("b.mkv")));
        assert!(!filter.is_included(Path::new("a.MP4")));
        assert!(!filter.is_included(Path::new("a.mp4.part")));
        assert!(!filter.is_included(Path::new("noext")));
        assert!(!filter.is_included(Path::new(".mp4")));
    }

    #[test]
    fn test_dotted_extension() {
        assert_eq!(dotted_extension(Path::new("a.b.jpg")), Some(".jpg".to_string()));
        assert_eq!(dotted_extension(Path::new("a")), None);
    }
}
