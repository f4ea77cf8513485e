//! Output directory handling and glyph filenames.

use std::io;
use std::path::{Path, PathBuf};

/// A directory that images are written into.
///
/// Created explicitly, right before something is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Creates the directory (and parents) if missing.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let root = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        log::debug!("output directory ready: {}", root.display());
        Ok(Self { root })
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of a file inside the directory.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.root.join(name)
    }
}

/// Filename stem for a glyph image.
///
/// `.`, `/` and `:` are spelled out; every other character is kept.
pub fn glyph_file_stem(c: char) -> String {
    match c {
        '.' => "dot".to_string(),
        '/' => "slash".to_string(),
        ':' => "colon".to_string(),
        other => other.to_string(),
    }
}

/// Filename for a glyph image, e.g. `A.png` or `dot.png`.
pub fn glyph_filename(c: char) -> String {
    format!("{}.png", glyph_file_stem(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_filename_substitutions() {
        assert_eq!(glyph_filename('.'), "dot.png");
        assert_eq!(glyph_filename('/'), "slash.png");
        assert_eq!(glyph_filename(':'), "colon.png");
        assert_eq!(glyph_filename('A'), "A.png");
        assert_eq!(glyph_filename('\\'), "\\.png");
    }

    #[test]
    fn test_output_dir_create_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let out = OutputDir::create(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(out.path(), nested.as_path());
        assert_eq!(out.join("x.png"), nested.join("x.png"));

        // Creating an existing directory is fine.
        assert!(OutputDir::create(&nested).is_ok());
    }
}
