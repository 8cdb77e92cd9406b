//! Icon lookup tables.
//!
//! Four YAML documents drive classification:
//! - `files.yaml`: file extension (or lowercase name) → icon glyph
//! - `file_aliases.yaml`: extension variant → key of `files.yaml`
//! - `folders.yaml`: folder name → icon glyph
//! - `folder_aliases.yaml`: folder name variant → key of `folders.yaml`
//!
//! Copies of all four are compiled into the binary. A directory holding
//! replacement files can be selected with `--data-dir` or the
//! `COLORLS_DATA_DIR` environment variable.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const FILES: &str = "files.yaml";
pub const FILE_ALIASES: &str = "file_aliases.yaml";
pub const FOLDERS: &str = "folders.yaml";
pub const FOLDER_ALIASES: &str = "folder_aliases.yaml";

const BUILTIN_FILES: &str = include_str!("../data/files.yaml");
const BUILTIN_FILE_ALIASES: &str = include_str!("../data/file_aliases.yaml");
const BUILTIN_FOLDERS: &str = include_str!("../data/folders.yaml");
const BUILTIN_FOLDER_ALIASES: &str = include_str!("../data/folder_aliases.yaml");

/// A flat `key: value` mapping read from one YAML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Table(HashMap<String, String>);

impl Table {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a YAML mapping. An empty document yields an empty table.
    pub fn from_yaml(resource: &str, source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| Error::DataLoad {
            resource: resource.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Table(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The four tables consumed by the resolver.
///
/// Built once per process and shared read-only by every listing.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub files: Table,
    pub file_aliases: Table,
    pub folders: Table,
    pub folder_aliases: Table,
}

impl LookupTables {
    /// Tables compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            files: Table::from_yaml(FILES, BUILTIN_FILES)?,
            file_aliases: Table::from_yaml(FILE_ALIASES, BUILTIN_FILE_ALIASES)?,
            folders: Table::from_yaml(FOLDERS, BUILTIN_FOLDERS)?,
            folder_aliases: Table::from_yaml(FOLDER_ALIASES, BUILTIN_FOLDER_ALIASES)?,
        })
    }

    /// Reads all four tables from `dir`. Every file must be present.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Ok(Self {
            files: read_table(dir, FILES)?,
            file_aliases: read_table(dir, FILE_ALIASES)?,
            folders: read_table(dir, FOLDERS)?,
            folder_aliases: read_table(dir, FOLDER_ALIASES)?,
        })
    }

    /// Loads from `dir` when one is configured, the built-in tables otherwise.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }
}

fn read_table(dir: &Path, name: &str) -> Result<Table> {
    let path = dir.join(name);
    let source = std::fs::read_to_string(&path).map_err(|e| Error::DataLoad {
        resource: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Table::from_yaml(&path.display().to_string(), &source)
}

/// Get the lookup table directory
///
/// 1. An explicit `--data-dir` argument wins
/// 2. Otherwise `COLORLS_DATA_DIR` is used when set and non-empty
/// 3. Otherwise `None`, meaning the built-in tables
pub fn data_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    match std::env::var("COLORLS_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_tables_load() {
        let tables = LookupTables::builtin().expect("built-in tables should parse");
        assert!(tables.files.contains("file"));
        assert!(tables.files.contains("rs"));
        assert!(tables.folders.contains("folder"));
        assert!(!tables.file_aliases.is_empty());
        assert!(!tables.folder_aliases.is_empty());
    }

    #[test]
    fn test_builtin_aliases_point_at_primary_keys() {
        let tables = LookupTables::builtin().unwrap();
        for alias in tables.file_aliases.keys() {
            let target = tables.file_aliases.get(alias).unwrap();
            assert!(
                tables.files.contains(target),
                "file alias {alias} -> {target} is dangling"
            );
        }
        for alias in tables.folder_aliases.keys() {
            let target = tables.folder_aliases.get(alias).unwrap();
            assert!(
                tables.folders.contains(target),
                "folder alias {alias} -> {target} is dangling"
            );
        }
    }

    #[test]
    fn test_yaml_escapes_are_decoded() {
        let table = Table::from_yaml("inline", "rs: \"\\ue7a8\"\n").unwrap();
        assert_eq!(table.get("rs"), Some("\u{e7a8}"));
    }

    #[test]
    fn test_empty_document_is_empty_table() {
        let table = Table::from_yaml("inline", "\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_yaml_is_data_load_error() {
        let err = Table::from_yaml("broken.yaml", "- just\n- a list\n").unwrap_err();
        match err {
            Error::DataLoad { resource, .. } => assert_eq!(resource, "broken.yaml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_dir_reads_all_tables() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILES), "file: F\nmd: M\n").unwrap();
        fs::write(dir.path().join(FILE_ALIASES), "markdown: md\n").unwrap();
        fs::write(dir.path().join(FOLDERS), "folder: D\n").unwrap();
        fs::write(dir.path().join(FOLDER_ALIASES), "").unwrap();

        let tables = LookupTables::from_dir(dir.path()).unwrap();
        assert_eq!(tables.files.len(), 2);
        assert_eq!(tables.file_aliases.get("markdown"), Some("md"));
        assert_eq!(tables.folders.get("folder"), Some("D"));
        assert!(tables.folder_aliases.is_empty());
    }

    #[test]
    fn test_from_dir_missing_file_is_data_load_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILES), "file: F\n").unwrap();

        let err = LookupTables::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DataLoad { .. }));
        assert!(err.to_string().contains(FILE_ALIASES));
    }

    #[test]
    fn test_data_dir_prefers_explicit_path() {
        let explicit = PathBuf::from("/opt/icons");
        assert_eq!(data_dir(Some(explicit.as_path())), Some(explicit.clone()));
    }
}
