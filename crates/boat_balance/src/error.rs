use thiserror::Error;

pub type Result<T> = std::result::Result<T, BalanceError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Factorial of {n} does not fit in 64 bits")]
    Overflow { n: u64 },

    #[error("Score overflows the weight type: {0}")]
    ScoreOverflow(String),

    #[error("Invariant violation: {arrangements} arrangements but {scores} scores")]
    InvariantViolation { arrangements: usize, scores: usize },
}

impl BalanceError {
    pub(crate) fn empty_weights() -> Self {
        BalanceError::InvalidInput("at least one weight is required".to_string())
    }
}
