//! Locating schema files on disk.

use std::fs::File;
use std::path::{Path, PathBuf};

/// File name every schema directory must contain.
pub const SCHEMA_FILENAME: &str = "install.xml";

/// A schema file resolved under a documentation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaLocation {
    path: PathBuf,
}

impl SchemaLocation {
    /// Resolve the schema file for the site-relative `dir` under `root`.
    ///
    /// Leading slashes on `dir` are trimmed so the join stays inside
    /// `root`.
    #[must_use]
    pub fn resolve(root: &Path, dir: &str) -> Self {
        let relative = dir.trim_start_matches('/');
        Self {
            path: root.join(relative).join(SCHEMA_FILENAME),
        }
    }

    /// Path of the schema file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the schema file exists and can be opened for reading.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.path.is_file() && File::open(&self.path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_joins_under_root() {
        let location = SchemaLocation::resolve(Path::new("/srv/site"), "/mod/forum/db");

        assert_eq!(
            location.path(),
            Path::new("/srv/site/mod/forum/db/install.xml")
        );
    }

    #[test]
    fn test_resolve_without_leading_slash() {
        let location = SchemaLocation::resolve(Path::new("/srv/site"), "mod/forum/db");

        assert_eq!(
            location.path(),
            Path::new("/srv/site/mod/forum/db/install.xml")
        );
    }

    #[test]
    fn test_missing_file_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();
        let location = SchemaLocation::resolve(dir.path(), "/mod/forum/db");

        assert!(!location.is_readable());
    }

    #[test]
    fn test_existing_file_is_readable() {
        let dir = tempfile::tempdir().unwrap();
        let schema_dir = dir.path().join("mod/forum/db");
        std::fs::create_dir_all(&schema_dir).unwrap();
        std::fs::write(schema_dir.join(SCHEMA_FILENAME), "<XMLDB/>").unwrap();

        let location = SchemaLocation::resolve(dir.path(), "/mod/forum/db");
        assert!(location.is_readable());
    }

    #[test]
    fn test_directory_named_install_xml_is_not_readable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("mod/forum/db/install.xml")).unwrap();

        let location = SchemaLocation::resolve(dir.path(), "/mod/forum/db");
        assert!(!location.is_readable());
    }
}
