//! Error types for catalog access

use rusqlite::ErrorCode;
use thiserror::Error;

/// Errors surfaced when reading a database catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The path does not exist or SQLite cannot open it
    #[error("cannot open database file '{path}'")]
    FileNotFound { path: String },

    /// The file exists but is not a SQLite database
    #[error("file '{path}' is not a SQLite database")]
    NotADatabase { path: String },

    /// A catalog or pragma statement failed to execute
    #[error("catalog query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("table '{table}' not found")]
    TableNotFound { table: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Classify a SQLite error raised while opening or probing `path`
    pub(crate) fn from_sqlite(path: &str, err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::NotADatabase) => CatalogError::NotADatabase {
                path: path.to_string(),
            },
            Some(ErrorCode::CannotOpen) => CatalogError::FileNotFound {
                path: path.to_string(),
            },
            _ => CatalogError::Query(err),
        }
    }

    pub fn is_file_not_found(&self) -> bool {
        matches!(self, CatalogError::FileNotFound { .. })
    }

    pub fn is_not_a_database(&self) -> bool {
        matches!(self, CatalogError::NotADatabase { .. })
    }
}
