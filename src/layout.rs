//! Column layout engine.
//!
//! Packs an ordered list of names into the widest column grid that fits the
//! terminal. Candidate column counts are tried from one-per-entry (a single
//! row) downwards, and the first candidate whose widths plus gutters fit is
//! kept. When nothing fits, the listing falls back to a single column.
//! Column counts that would leave a trailing column of nothing but padding
//! are skipped, since a smaller count yields the same arrangement.
//!
//! Cells are filled column-major, the same order `ls -C` uses:
//!
//! ```text
//! a  d  g
//! b  e
//! c  f
//! ```

use crate::data::display_width;

/// Cells reserved per column on top of the name itself: icon, two spaces,
/// the directory marker and one separating space.
pub const GUTTER: usize = 6;

/// A rectangular, row-major view of a column-major arrangement.
///
/// Slots past the last entry hold the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
    widths: Vec<usize>,
}

impl<T> Grid<T> {
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Max display width of the names in each column.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total cells needed to print the grid including gutters.
    pub fn line_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + GUTTER * self.column_count()
    }
}

/// Lays out `names` for a terminal `width` cells wide.
pub fn layout<S: AsRef<str>>(names: &[S], width: usize) -> Grid<String> {
    let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
    let grid = layout_indices(&names, width);
    Grid {
        rows: grid
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|slot| slot.map(|i| names[i].to_string()).unwrap_or_default())
                    .collect()
            })
            .collect(),
        widths: grid.widths,
    }
}

/// Lays out `names` and returns positions into `names` instead of copies.
///
/// `None` marks a padding slot.
pub fn layout_indices(names: &[&str], width: usize) -> Grid<Option<usize>> {
    if names.is_empty() {
        return Grid {
            rows: Vec::new(),
            widths: Vec::new(),
        };
    }

    let name_widths: Vec<usize> = names.iter().map(|n| display_width(n)).collect();
    let count = names.len();
    let mut columns = count;
    loop {
        // A count whose last column would be all padding repeats a smaller one
        if count.div_ceil(count.div_ceil(columns)) < columns {
            columns -= 1;
            continue;
        }
        let candidate = arrange(&name_widths, columns);
        if columns <= 1 || candidate.line_width() <= width {
            return candidate;
        }
        columns -= 1;
    }
}

/// Builds the column-major grid for a fixed column count.
fn arrange(name_widths: &[usize], columns: usize) -> Grid<Option<usize>> {
    let count = name_widths.len();
    let rows = count.div_ceil(columns);

    let mut widths = vec![0; columns];
    let grid_rows = (0..rows)
        .map(|row| {
            (0..columns)
                .map(|col| {
                    let index = col * rows + row;
                    if index < count {
                        widths[col] = widths[col].max(name_widths[index]);
                        Some(index)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();

    Grid {
        rows: grid_rows,
        widths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten_column_major(grid: &Grid<String>) -> Vec<String> {
        let mut out = Vec::new();
        for col in 0..grid.column_count() {
            for row in grid.rows() {
                if !row[col].is_empty() {
                    out.push(row[col].clone());
                }
            }
        }
        out
    }

    #[test]
    fn test_empty_input_gives_empty_grid() {
        let grid = layout::<&str>(&[], 80);
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 0);
    }

    #[test]
    fn test_everything_on_one_row_when_it_fits() {
        let names = ["a", "bb", "ccc"];
        let grid = layout(&names, 80);
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.widths(), &[1, 2, 3]);
        assert_eq!(grid.rows()[0], vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_column_major_fill_order() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        // Three one-cell columns cost 3 + 3 * GUTTER = 21 cells
        let grid = layout(&names, 21);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.rows()[0], vec!["a", "d", "g"]);
        assert_eq!(grid.rows()[1], vec!["b", "e", ""]);
        assert_eq!(grid.rows()[2], vec!["c", "f", ""]);
    }

    #[test]
    fn test_padding_never_adds_a_full_row() {
        let names: Vec<String> = (0..12).map(|i| format!("n{i:02}")).collect();
        for width in [0, 10, 20, 30, 45, 60, 90, 200] {
            let grid = layout(&names, width);
            let slots = grid.row_count() * grid.column_count();
            assert!(slots >= names.len());
            assert!(slots < names.len() + grid.column_count());
        }
    }

    #[test]
    fn test_padding_is_contiguous_at_row_ends() {
        let names: Vec<String> = (0..10).map(|i| format!("entry{i}")).collect();
        for width in [20, 40, 60, 80, 100] {
            let grid = layout(&names, width);
            for row in grid.rows() {
                let first_pad = row.iter().position(|c| c.is_empty()).unwrap_or(row.len());
                assert!(row[first_pad..].iter().all(|c| c.is_empty()));
            }
        }
    }

    #[test]
    fn test_every_entry_appears_exactly_once() {
        let names: Vec<String> = (0..17).map(|i| "x".repeat(i % 5 + 1) + &i.to_string()).collect();
        for width in [1, 30, 50, 80, 120, 500] {
            let grid = layout(&names, width);
            assert_eq!(flatten_column_major(&grid), names);
        }
    }

    #[test]
    fn test_accepted_layout_fits() {
        let names = [
            "Cargo.toml", "Cargo.lock", "README.md", "src", "tests", "benches", "target",
            "LICENSE-MIT", "LICENSE-APACHE", ".gitignore",
        ];
        for width in [30, 40, 60, 80, 100, 140] {
            let grid = layout(&names, width);
            if grid.column_count() > 1 {
                assert!(grid.line_width() <= width, "width {width}");
            }
        }
    }

    #[test]
    fn test_column_count_is_monotonic_in_width() {
        let names = [
            "alpha", "b", "gamma_delta", "e", "zeta.rs", "eta", "theta.toml", "iota", "kappa",
            "lambda_mu_nu",
        ];
        let mut previous = 0;
        for width in 0..200 {
            let columns = layout(&names, width).column_count();
            assert!(columns >= previous, "width {width}: {columns} < {previous}");
            previous = columns;
        }
    }

    #[test]
    fn test_widths_are_per_final_column() {
        let names = ["a", "bbbb", "cc", "d"];
        // Two columns: [a, bbbb] and [cc, d]
        let grid = layout(&names, 2 * GUTTER + 6);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.widths(), &[4, 2]);
    }

    #[test]
    fn test_overwide_single_entry_falls_back_to_one_column() {
        let long = "x".repeat(120);
        let grid = layout(&[long.as_str()], 40);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.rows(), &[vec![long.clone()]]);
        assert!(grid.line_width() > 40);
    }

    #[test]
    fn test_nothing_fits_gives_single_column() {
        let names = ["aaaa", "bbbb", "cccc"];
        let grid = layout(&names, 3);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 3);
    }

    #[test]
    fn test_narrow_terminal_scenario() {
        let names = ["src", "README.md", "main.rs", "Makefile"];
        let grid = layout(&names, 20);
        // Even two columns need 9 + 8 + 12 cells
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 4);

        let grid = layout(&names, 30);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.rows()[0], vec!["src", "main.rs"]);
        assert_eq!(grid.rows()[1], vec!["README.md", "Makefile"]);
    }

    #[test]
    fn test_no_column_is_only_padding() {
        // Three columns would be [a, b], [c, d] and an empty one
        let grid = layout(&["a", "b", "c", "d"], 21);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.widths(), &[1, 1]);

        let names: Vec<String> = (0..23).map(|i| format!("f{}", "y".repeat(i % 4))).collect();
        for width in 0..260 {
            let grid = layout(&names, width);
            for col in 0..grid.column_count() {
                assert!(
                    grid.rows().iter().any(|row| !row[col].is_empty()),
                    "width {width}: column {col} of {} is empty",
                    grid.column_count()
                );
            }
        }
    }

    #[test]
    fn test_layout_indices_marks_padding() {
        let grid = layout_indices(&["a", "b", "c"], 2 * GUTTER + 2);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.rows()[0], vec![Some(0), Some(2)]);
        assert_eq!(grid.rows()[1], vec![Some(1), None]);
    }
}
