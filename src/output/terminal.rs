//! Terminal output formatter for directory listings.
//!
//! Writes a laid-out grid as icon-prefixed, colorized cells and the optional
//! `--report` summary block.

use crate::data::Entry;
use crate::error::Result;
use crate::layout::{GUTTER, Grid};
use crate::resolve::{ColorTag, Counters, Resolver};
use std::io::Write;
use std::path::Path;

/// Marker written after directory names.
const DIR_MARKER: &str = "/ ";
/// Written after file names in place of [`DIR_MARKER`].
const FILE_MARKER: &str = "  ";
/// Written between the icon and the name.
const SEPARATOR: &str = "  ";
/// Icon glyphs are single-cell Nerd Font code points.
const ICON_CELLS: usize = 1;
/// Trailing space that keeps adjacent columns apart.
const CELL_MARGIN: usize = GUTTER - ICON_CELLS - SEPARATOR.len() - FILE_MARKER.len();

/// Renders `grid` (positions into `entries`) to `out`.
///
/// Every row starts on a fresh line and one newline follows the last row,
/// so an empty grid prints a single newline. Each entry is classified once,
/// which updates the resolver's counters.
///
/// # Errors
/// Stops at the first lookup integrity error or write failure.
pub fn render<W: Write>(
    out: &mut W,
    entries: &[Entry],
    grid: &Grid<Option<usize>>,
    resolver: &mut Resolver<'_>,
    color: bool,
) -> Result<()> {
    for row in grid.rows() {
        writeln!(out)?;
        for (col, slot) in row.iter().enumerate() {
            let Some(index) = *slot else {
                break;
            };
            let entry = &entries[index];
            let classification = resolver.classify_entry(entry)?;
            let icon = resolver.icon(&classification)?;

            let label = format!("{icon}{SEPARATOR}{}", entry.name);
            write!(out, "{}", classification.color.paint(&label, color))?;
            if entry.is_directory() {
                write!(out, "{}", ColorTag::Blue.paint(DIR_MARKER, color))?;
            } else {
                write!(out, "{FILE_MARKER}")?;
            }
            let pad = grid.widths()[col].saturating_sub(entry.width()) + CELL_MARGIN;
            write!(out, "{:pad$}", "")?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Writes the summary block printed by `--report`.
pub fn render_report<W: Write>(
    out: &mut W,
    path: &Path,
    counters: &Counters,
    color: bool,
) -> Result<()> {
    let white = |text: String| ColorTag::White.paint(&text, color);

    write!(
        out,
        "{}",
        white(format!("\n Found {} contents in directory ", counters.total()))
    )?;
    write!(
        out,
        "{}",
        ColorTag::Blue.paint(&path.display().to_string(), color)
    )?;
    write!(
        out,
        "{}",
        white(format!("\n\n\tFolders\t\t\t: {}", counters.folders))
    )?;
    write!(
        out,
        "{}",
        white(format!("\n\tRecognized files\t: {}", counters.recognized_files))
    )?;
    write!(
        out,
        "{}",
        white(format!("\n\tUnrecognized files\t: {}", counters.unrecognized_files))
    )?;
    write!(out, "\n\n")?;
    Ok(())
}
