use std::path::PathBuf;
use thiserror::Error;

/// A business rule rejected the request. The in-memory state is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Book not found.")]
    BookNotFound,

    #[error("Cannot remove a borrowed book.")]
    BookBorrowed,

    #[error("Book is already borrowed.")]
    BookUnavailable,

    #[error("Member not found.")]
    MemberNotFound,

    #[error("Member ID already exists.")]
    DuplicateMember,

    #[error("Cannot remove member with active loans.")]
    MemberHasLoans,

    #[error("Loan not found.")]
    LoanNotFound,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt data file {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StorageError::Corrupt {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LibraryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, LibraryError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
