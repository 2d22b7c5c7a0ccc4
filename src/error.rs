use std::io;

use thiserror::Error;

use crate::validate::ValidationError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid value '{value}' for environment variable {var}")]
    Config { var: &'static str, value: String },

    #[error("Vec and VecDeque disagree on the sorted output")]
    Mismatch,

    #[error(transparent)]
    Io(#[from] io::Error),
}
