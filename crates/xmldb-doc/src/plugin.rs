//! Plugin naming derived from schema directories.

/// Derive the frankenstyle plugin name from a schema directory.
///
/// `dir` is site-relative, e.g. `/mod/forum/db`; the leading slash and the
/// trailing `db` component are dropped and the remaining separators become
/// underscores, giving `mod_forum`. Used for page titles and download file
/// names.
#[must_use]
pub fn plugin_name(dir: &str) -> String {
    let trimmed = dir.trim_start_matches('/');
    let trimmed = trimmed.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/db").unwrap_or(trimmed);
    trimmed.replace('/', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_module_directory() {
        assert_eq!(plugin_name("/mod/forum/db"), "mod_forum");
    }

    #[test]
    fn test_block_directory() {
        assert_eq!(plugin_name("/block/xyz/db"), "block_xyz");
    }

    #[test]
    fn test_core_directory() {
        assert_eq!(plugin_name("/lib/db"), "lib");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(plugin_name("/mod/forum/db/"), "mod_forum");
    }

    #[test]
    fn test_db_in_middle_is_kept() {
        // Only the trailing component is the schema directory.
        assert_eq!(plugin_name("/mod/dbviewer/db"), "mod_dbviewer");
    }

    #[test]
    fn test_directory_without_db_suffix() {
        assert_eq!(plugin_name("/local/thing"), "local_thing");
    }
}
