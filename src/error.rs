//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror.
//!
//! Failing to read a file and reading a file whose format is not recognized
//! are different outcomes: the first is [`Error::Io`], the second surfaces as
//! `Ok(None)` from detection and only becomes [`Error::UnrecognizedFormat`]
//! in callers that require a definite media type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not detect image type for {0}")]
    UnrecognizedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
