//! Core database infrastructure
//!
//! This module provides the foundational database components used by the catalog lens:
//! - `DatabaseConn`: read-only SQLite connection wrapper
//! - `CatalogQueries`: SQL statements against `sqlite_master`
//! - `CatalogError`: typed failures for open, format and query errors

mod catalog;
mod connection;
mod error;

pub use catalog::{quote_identifier, CatalogQueries};
pub use connection::DatabaseConn;
pub use error::{CatalogError, CatalogResult};
