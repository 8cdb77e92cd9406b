//! Output system for the `colorls` application.
//!
//! - [`terminal`]: colorized grid rendering and the `--report` summary
//!
//! Renderers write to any [`std::io::Write`], which keeps them testable
//! against in-memory buffers.

pub mod terminal;

/// Grid renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use terminal::render as render_grid;

/// Report renderer function.
///
/// See [`terminal::render_report`] for full documentation.
pub use terminal::render_report;
