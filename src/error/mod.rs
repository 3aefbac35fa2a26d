use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open sales file {}: {source}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse CSV rows to sales records: {0}")]
    CsvError(#[from] csv::Error),
    #[error("could not serialize summary: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not write summary file: {0}")]
    FileError(#[from] std::io::Error),
    #[error(transparent)]
    BusinessError(#[from] crate::domain::error::Error),
}

/// Coarse classification of an [`Error`], for callers that branch on the
/// kind of failure rather than on its cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingInput,
    MissingColumn,
    UnexpectedFailure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use crate::domain::error::Error as DomainError;

        match self {
            Error::MissingInput { .. } => ErrorKind::MissingInput,
            Error::BusinessError(DomainError::MissingColumn { .. }) => ErrorKind::MissingColumn,
            Error::BusinessError(
                DomainError::UnmatchedCategory { .. }
                | DomainError::AmountOutOfRange { .. }
                | DomainError::AmountOverflow { .. },
            )
            | Error::CsvError(_)
            | Error::JsonError(_)
            | Error::FileError(_) => ErrorKind::UnexpectedFailure,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::MissingInput => "missing input",
            ErrorKind::MissingColumn => "missing column",
            ErrorKind::UnexpectedFailure => "processing failure",
        })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
