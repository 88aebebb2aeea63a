use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("'{0}' is not a whole number")]
    InvalidGuess(String),

    #[error("{guess} is outside the range {lower}-{upper}")]
    OutOfRange { guess: i64, lower: i64, upper: i64 },

    #[error("invalid range: minimum {min} must be below maximum {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("invalid budget: {0}")]
    InvalidBudget(String),

    #[error("the round is already over")]
    RoundOver,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
