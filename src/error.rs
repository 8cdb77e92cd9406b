//! Error types for `colorls`.
//!
//! Every failure the listing pipeline can hit falls into one of three groups:
//! - lookup integrity problems (an alias or icon key missing from its primary table)
//! - filesystem problems for a single path argument
//! - data loading problems for the icon tables, which are fatal at startup
//!
//! Write failures on the output stream are reported as [`Error::Output`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("lookup table `{table}` has no entry for `{target}` (resolved from `{key}`)")]
    LookupIntegrity {
        table: &'static str,
        key: String,
        target: String,
    },

    #[error("cannot read directory {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to load lookup table `{resource}`: {reason}")]
    DataLoad { resource: String, reason: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Filesystem { .. } | Error::NotADirectory(_) => 2,
            Error::LookupIntegrity { .. } | Error::DataLoad { .. } | Error::Output(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
