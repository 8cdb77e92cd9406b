//! Library crate for colorls
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Icon Classification**: Map file extensions and folder names to icons via
//!   primary and alias lookup tables
//! - **Responsive Layout**: Pack entries into as many columns as the terminal allows
//! - **Colorized Output**: Per-category colors and an optional summary report
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Entry`, `EntryType`)
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error type shared by every module
//! - [`tables`]: Loading of the YAML lookup tables
//! - [`resolve`]: Category resolution and counters
//! - [`layout`]: Column layout engine
//! - [`output`]: Terminal rendering
//! - [`scan`]: Directory reading
//! - [`listing`]: The read → layout → render pipeline for one path
//! - [`utils`]: Terminal width and color detection

pub mod cli;
pub mod data;
pub mod error;
pub mod layout;
pub mod listing;
pub mod output;
pub mod resolve;
pub mod scan;
pub mod tables;
pub mod utils;

pub use cli::Args;
pub use data::{Entry, EntryType};
pub use error::{Error, Result};
pub use listing::{ListOptions, ListSummary, list_directory};
pub use tables::LookupTables;
