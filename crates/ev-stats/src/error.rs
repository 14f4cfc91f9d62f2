use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("{what} has zero variance; the relation is undefined")]
    ZeroVariance { what: &'static str },

    #[error("need at least {needed} paired values, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("x has {x} values but y has {y}")]
    LengthMismatch { x: usize, y: usize },
}

pub type StatsResult<T> = Result<T, StatsError>;
