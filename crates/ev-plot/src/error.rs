//! Error type for figure rendering.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use ev_stats::StatsError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("results table has no rows")]
    EmptyDataset,

    #[error("cannot write {path}: {reason}")]
    OutputDir { path: PathBuf, reason: String },

    #[error("panel statistics: {0}")]
    Stats(#[from] StatsError),

    #[error("drawing error: {0}")]
    Drawing(String),
}

// The backend error type is generic over the backend; keep the message only.
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(e.to_string())
    }
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
