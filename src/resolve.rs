//! Category resolution for directory entries.
//!
//! [`Resolver::classify`] maps an entry name to a display key through a
//! two-tier lookup: the primary table first, then the alias table. Folders
//! are matched on their exact name; files on the lowercased text after the
//! last `.` of their name.
//!
//! Each classification bumps exactly one of the [`Counters`], which back the
//! `--report` summary.

use crate::data::Entry;
use crate::error::{Error, Result};
use crate::tables::{LookupTables, Table};
use owo_colors::OwoColorize;
use std::fmt;

/// Display key used for directories missing from both folder tables.
pub const GENERIC_FOLDER: &str = "folder";
/// Display key used for files whose key is missing from both file tables.
pub const GENERIC_FILE: &str = "file";

/// Terminal styles used by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Blue,
    Green,
    Yellow,
    White,
}

impl ColorTag {
    /// Wraps `text` in the ANSI style for this tag, or returns it untouched
    /// when color is disabled.
    pub fn paint(self, text: &str, enabled: bool) -> String {
        if !enabled {
            return text.to_string();
        }
        match self {
            ColorTag::Blue => text.blue().to_string(),
            ColorTag::Green => text.green().to_string(),
            ColorTag::Yellow => text.yellow().to_string(),
            ColorTag::White => text.white().to_string(),
        }
    }
}

/// Which running total a classification was counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Folders,
    RecognizedFiles,
    UnrecognizedFiles,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Folders => "folders",
            Category::RecognizedFiles => "recognized_files",
            Category::UnrecognizedFiles => "unrecognized_files",
        }
    }
}

/// Running totals for one listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub folders: usize,
    pub recognized_files: usize,
    pub unrecognized_files: usize,
}

impl Counters {
    pub fn bump(&mut self, category: Category) {
        match category {
            Category::Folders => self.folders += 1,
            Category::RecognizedFiles => self.recognized_files += 1,
            Category::UnrecognizedFiles => self.unrecognized_files += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.folders + self.recognized_files + self.unrecognized_files
    }

    /// Each total paired with its category, in report order.
    pub fn by_category(&self) -> [(Category, usize); 3] {
        [
            (Category::Folders, self.folders),
            (Category::RecognizedFiles, self.recognized_files),
            (Category::UnrecognizedFiles, self.unrecognized_files),
        ]
    }
}

impl fmt::Display for Counters {
    /// Formats as `folders=1 recognized_files=2 unrecognized_files=0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (category, count) in self.by_category() {
            write!(f, "{sep}{}={count}", category.as_str())?;
            sep = " ";
        }
        Ok(())
    }
}

/// Result of classifying one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub key: String,
    pub color: ColorTag,
    pub category: Category,
}

/// Lookup key for a file name: the lowercased text after the last `.`.
///
/// A name without a dot yields the whole lowercased name and a name ending
/// in `.` yields an empty key.
pub fn file_key(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => name.to_lowercase(),
    }
}

/// Classifies entries against a set of lookup tables and keeps count.
pub struct Resolver<'a> {
    tables: &'a LookupTables,
    counters: Counters,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a LookupTables) -> Self {
        Self {
            tables,
            counters: Counters::default(),
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Classifies `name` and counts it.
    ///
    /// Calling this twice for the same entry counts it twice.
    ///
    /// # Errors
    /// Returns [`Error::LookupIntegrity`] when the name only matches an alias
    /// whose target is not a primary key.
    pub fn classify(&mut self, name: &str, is_directory: bool) -> Result<Classification> {
        let classification = if is_directory {
            self.classify_folder(name)?
        } else {
            self.classify_file(name)?
        };
        self.counters.bump(classification.category);
        Ok(classification)
    }

    pub fn classify_entry(&mut self, entry: &Entry) -> Result<Classification> {
        self.classify(&entry.name, entry.is_directory())
    }

    fn classify_folder(&self, name: &str) -> Result<Classification> {
        let key = resolve(
            name,
            &self.tables.folders,
            &self.tables.folder_aliases,
            "folders",
        )?
        .unwrap_or(GENERIC_FOLDER);
        Ok(Classification {
            key: key.to_string(),
            color: ColorTag::Blue,
            category: Category::Folders,
        })
    }

    fn classify_file(&self, name: &str) -> Result<Classification> {
        let key = file_key(name);
        let classification = match resolve(
            &key,
            &self.tables.files,
            &self.tables.file_aliases,
            "files",
        )? {
            Some(canonical) => Classification {
                key: canonical.to_string(),
                color: ColorTag::Green,
                category: Category::RecognizedFiles,
            },
            None => Classification {
                key: GENERIC_FILE.to_string(),
                color: ColorTag::Yellow,
                category: Category::UnrecognizedFiles,
            },
        };
        Ok(classification)
    }

    /// Icon glyph for a classification, taken from the matching primary table.
    pub fn icon(&self, classification: &Classification) -> Result<&'a str> {
        let tables: &'a LookupTables = self.tables;
        let (table, name) = match classification.category {
            Category::Folders => (&tables.folders, "folders"),
            _ => (&tables.files, "files"),
        };
        table
            .get(&classification.key)
            .ok_or_else(|| Error::LookupIntegrity {
                table: name,
                key: classification.key.clone(),
                target: classification.key.clone(),
            })
    }
}

/// Two-tier lookup: `Ok(None)` when `key` is in neither table.
fn resolve<'t>(
    key: &'t str,
    primary: &'t Table,
    aliases: &'t Table,
    table: &'static str,
) -> Result<Option<&'t str>> {
    if primary.contains(key) {
        return Ok(Some(key));
    }
    let Some(target) = aliases.get(key) else {
        return Ok(None);
    };
    if !primary.contains(target) {
        return Err(Error::LookupIntegrity {
            table,
            key: key.to_string(),
            target: target.to_string(),
        });
    }
    Ok(Some(target))
}
