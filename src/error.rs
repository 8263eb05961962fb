use std::io;

use thiserror::Error;

/// Errors produced by library operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("'{0}' is already in the library")]
    DuplicateTitle(String),

    #[error("year must be between 1888 and 2024, got {0}")]
    YearOutOfRange(u32),

    #[error("rating must be between 0 and 10, got {0}")]
    RatingOutOfRange(f32),

    #[error("unknown genre '{0}'")]
    UnknownGenre(String),

    #[error("no movie at position {0}")]
    NoSuchMovie(usize),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
