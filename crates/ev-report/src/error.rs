use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("results table has no rows")]
    EmptyDataset,
}

pub type ReportResult<T> = Result<T, ReportError>;
