//! Shared utility functions for tree walking

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::config::SortOrder;

/// Final component of a path, or the whole path when it has none.
pub fn entry_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}

/// Sort sibling paths by their names under `order`.
pub fn sort_by_name(paths: &mut [PathBuf], order: SortOrder) {
    paths.sort_by(|a, b| order.compare(entry_name(a), entry_name(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_name_uses_file_name_only() {
        let mut paths = vec![
            PathBuf::from("/short/bbb"),
            PathBuf::from("/a/much/longer/prefix/aa"),
        ];
        sort_by_name(&mut paths, SortOrder::LengthThenName);
        assert_eq!(paths[0], PathBuf::from("/a/much/longer/prefix/aa"));

        sort_by_name(&mut paths, SortOrder::Name);
        assert_eq!(paths[0], PathBuf::from("/a/much/longer/prefix/aa"));
    }
}
