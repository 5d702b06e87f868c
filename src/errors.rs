use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    // p of 0 or 1 never produces a mismatched pair, extraction would spin forever
    #[error("bias probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),

    #[error("invalid array size {0:?}")]
    InvalidSize(String),

    #[error("invalid argument {0}")]
    InvalidArgument(String),
}
