//! Terminal helpers for `colorls`.
//!
//! This module provides:
//! - Terminal width detection with `--width` and `COLUMNS` fallbacks
//! - The color on/off decision for [`ColorMode`]

use crate::cli::ColorMode;
use is_terminal::IsTerminal;
use terminal_size::{Width, terminal_size};

/// Width used when nothing else tells us how wide the output is.
pub const DEFAULT_WIDTH: usize = 80;

/// Resolves the width the layout should target.
///
/// Order: explicit override, size of the terminal attached to stdout,
/// the `COLUMNS` environment variable, then [`DEFAULT_WIDTH`].
pub fn terminal_width(explicit: Option<usize>) -> usize {
    if let Some(width) = explicit {
        return width;
    }
    if let Some((Width(w), _)) = terminal_size() {
        return w as usize;
    }
    columns_from_env(std::env::var("COLUMNS").ok().as_deref()).unwrap_or(DEFAULT_WIDTH)
}

/// Parses a `COLUMNS` value, ignoring anything that is not a positive integer.
pub fn columns_from_env(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
}

/// Whether ANSI colors should be written to stdout.
pub fn color_enabled(mode: ColorMode) -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    should_color(mode, std::io::stdout().is_terminal(), no_color)
}

/// Pure form of [`color_enabled`].
pub fn should_color(mode: ColorMode, is_tty: bool, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !no_color,
    }
}
