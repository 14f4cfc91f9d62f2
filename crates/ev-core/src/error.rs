//! Error type for loading and configuring an analysis run.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the results table or the analysis config.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot read {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("results table is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("results parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ev-core`.
pub type CoreResult<T> = Result<T, CoreError>;
