//! Database module
//!
//! Read-only access to local SQLite files.
//!
//! ```text
//! database/
//! └── core/
//!     ├── connection  # read-only DatabaseConn wrapper
//!     ├── catalog     # sqlite_master statements
//!     └── error       # CatalogError
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use viewdb::database::DatabaseConn;
//!
//! let db = DatabaseConn::open_read_only("./letters.db")?;
//! println!("letters table present: {}", db.table_exists("letters")?);
//! ```

pub mod core;

pub use self::core::{quote_identifier, CatalogError, CatalogQueries, CatalogResult, DatabaseConn};
