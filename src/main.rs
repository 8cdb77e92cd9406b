//! Main entry point for the `colorls` CLI application.
//!
//! `colorls` lists directories in a multi-column grid, prefixing every entry
//! with an icon chosen from its extension or folder name and coloring it by
//! category.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads the icon lookup tables once for the whole run
//! - Delegates each path argument to [`list_directory`]
//! - Reports per-path failures on stderr without stopping the other paths
//!
//! # Flags of Interest
//! - `--report`, `-r`: Print folder and file counts after each listing
//! - `--width N`: Lay out for N cells instead of the detected terminal width
//! - `--color auto|always|never`: Control ANSI colors
//! - `--data-dir DIR`: Use YAML lookup tables from DIR

use anyhow::{Context, Result};
use clap::Parser;
use colorls::error::Error;
use colorls::tables::{self, LookupTables};
use colorls::utils::{color_enabled, terminal_width};
use colorls::{Args, ListOptions, list_directory};
use std::io;
use std::path::PathBuf;

/// Loads the lookup tables selected by `--data-dir` / `COLORLS_DATA_DIR`.
fn load_tables(args: &Args) -> Result<LookupTables> {
    let dir = tables::data_dir(args.data_dir.as_deref());
    let tables = LookupTables::load(dir.as_deref()).context("Failed to load icon tables")?;
    if args.verbose {
        match &dir {
            Some(dir) => eprintln!("🔧 Using icon tables from {}", dir.display()),
            None => eprintln!("🔧 Using built-in icon tables"),
        }
        eprintln!(
            "🔧 {} file icons ({} aliases), {} folder icons ({} aliases)",
            tables.files.len(),
            tables.file_aliases.len(),
            tables.folders.len(),
            tables.folder_aliases.len()
        );
    }
    Ok(tables)
}

/// Paths to list, in argument order; the current directory when none were given.
fn resolve_paths(args: &Args) -> Result<Vec<PathBuf>> {
    if args.paths.is_empty() {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        Ok(vec![cwd])
    } else {
        Ok(args.paths.clone())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse args → load_tables → list_directory per path
    let tables = load_tables(&args)?;
    let options = ListOptions {
        width: terminal_width(args.width),
        color: color_enabled(args.color),
        report: args.report,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut exit_code = 0;

    for path in resolve_paths(&args)? {
        match list_directory(&path, &tables, &options, &mut out) {
            Ok(summary) => {
                if args.verbose {
                    eprintln!(
                        "🔧 {}: {} column(s) × {} row(s) at width {}, {}",
                        path.display(),
                        summary.columns,
                        summary.rows,
                        options.width,
                        summary.counters
                    );
                }
            }
            Err(err) => {
                match &err {
                    Error::Filesystem { .. } | Error::NotADirectory(_) => {
                        eprintln!("colorls: {err}")
                    }
                    _ => eprintln!("colorls: {}: {err}", path.display()),
                }
                exit_code = exit_code.max(err.exit_code());
            }
        }
    }

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
