//! Destinations for built pages.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persists pages at site-relative paths.
///
/// Pages are written from several threads at once and in no particular order.
pub trait OutputSink: Send + Sync {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes pages below an output directory on disk.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FsSink {
    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let target = self.root.join(path);
        // create_dir_all tolerates directories created concurrently
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_parent_directories() {
        let temp = tempdir().unwrap();
        let sink = FsSink::new(temp.path().join("site"));

        sink.write(Path::new("guides/setup.html"), "<p>hi</p>")
            .unwrap();
        sink.write(Path::new("guides/other.html"), "").unwrap();

        let written = fs::read_to_string(sink.root().join("guides/setup.html")).unwrap();
        assert_eq!(written, "<p>hi</p>");
    }
}
