//! The per-path listing pipeline.
//!
//! read → layout → classify/render → optional report. Each call builds its
//! own [`Resolver`], so counters never leak between path arguments, and the
//! whole block is buffered before it reaches `out`.

use crate::data::Entry;
use crate::error::Result;
use crate::layout::layout_indices;
use crate::output::{render_grid, render_report};
use crate::resolve::{Counters, Resolver};
use crate::scan::read_entries;
use crate::tables::LookupTables;
use std::io::Write;
use std::path::Path;

/// Knobs for a single listing.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub width: usize,
    pub color: bool,
    pub report: bool,
}

/// What a finished listing looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub counters: Counters,
    pub columns: usize,
    pub rows: usize,
}

/// Lists the directory at `path` into `out`.
///
/// Nothing is written when any step fails.
pub fn list_directory<W: Write>(
    path: &Path,
    tables: &LookupTables,
    options: &ListOptions,
    out: &mut W,
) -> Result<ListSummary> {
    let entries = read_entries(path)?;
    let mut buffer = Vec::new();
    let summary = list_entries(&entries, path, tables, options, &mut buffer)?;
    out.write_all(&buffer)?;
    out.flush()?;
    Ok(summary)
}

/// Lays out and renders already-read `entries`; `path` only feeds the report.
pub fn list_entries<W: Write>(
    entries: &[Entry],
    path: &Path,
    tables: &LookupTables,
    options: &ListOptions,
    out: &mut W,
) -> Result<ListSummary> {
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let grid = layout_indices(&names, options.width);

    let mut resolver = Resolver::new(tables);
    render_grid(out, entries, &grid, &mut resolver, options.color)?;

    let counters = resolver.counters();
    if options.report {
        render_report(out, path, &counters, options.color)?;
    }

    Ok(ListSummary {
        counters,
        columns: grid.column_count(),
        rows: grid.row_count(),
    })
}
