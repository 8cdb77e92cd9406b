//! Data structures for representing directory entries.
//!
//! Entries are produced once by [`crate::scan::read_entries`] and never change
//! afterwards: directory-ness is resolved up front so that layout and
//! classification work on plain data.

use unicode_width::UnicodeWidthStr;

/// A single name found in a listed directory.
///
/// # Fields
/// * `name` - The file name as returned by the directory enumeration
/// * `entry_type` - Type of entry (file or directory)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub entry_type: EntryType,
}

impl Entry {
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            name: name.into(),
            entry_type,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryType::File)
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, EntryType::Dir)
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    /// Number of terminal cells the name occupies.
    pub fn width(&self) -> usize {
        display_width(&self.name)
    }
}

/// Represents the type of a directory entry.
///
/// Symlinks are reported as `File`, even when they point at a directory.
///
/// # Variants
/// * `File` - Anything that is not a directory
/// * `Dir` - A directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Dir,
}

/// Display width of `text` in terminal cells.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}
