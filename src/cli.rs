//! CLI interface definitions for the `colorls` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`ColorMode`]: an enum for choosing when output is colorized
//!
//! # Example
//!
//! ```bash
//! colorls --report ~/projects /tmp
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `colorls` directory lister.
#[derive(Parser, Debug)]
#[command(name = "colorls", version, about)]
pub struct Args {
    /// Directories to list (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Print a summary of folders and recognized/unrecognized files
    #[arg(short, long, default_value_t = false)]
    pub report: bool,

    /// Terminal width in cells (default: detected from the terminal)
    #[arg(short, long, value_name = "N")]
    pub width: Option<usize>,

    /// When to colorize the output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Load files.yaml, file_aliases.yaml, folders.yaml and folder_aliases.yaml
    /// from this directory instead of the built-in tables
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print table and layout details to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Enum for specifying when to emit ANSI colors.
///
/// # Variants
/// * `Auto` - Color when stdout is a terminal and `NO_COLOR` is unset
/// * `Always` - Always color
/// * `Never` - Never color
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
