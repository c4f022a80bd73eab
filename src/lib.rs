#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! viewdb - inspect the catalog of a local SQLite database
//!
//! viewdb opens a SQLite file read-only, lists the tables recorded in its
//! catalog and describes their columns. It can be used as both a
//! command-line application and a library.
//!
//! # Feature Flags
//!
//! | Feature | Description | Key Dependencies |
//! |---------|-------------|------------------|
//! | (none) | Catalog access and configuration | `rusqlite`, `config` |
//! | `display` | Table formatting with `tabled` | `tabled` |
//! | `cli` | The `viewdb` binary | All above + `clap`, `tracing-subscriber` |
//!
//! ```toml
//! # Library only
//! viewdb = { version = "0.1", default-features = false }
//! ```
//!
//! # Architecture
//!
//! - **[`database`]**: read-only SQLite connection, catalog statements, errors
//! - **[`lens`]**: catalog lens (tables, columns, file info) and output helpers
//! - **[`config`]**: configuration loading
//!
//! # Quick Start
//!
//! ```rust,ignore
//! // list every table in ./letters.db
//! let tables = viewdb::list_tables(viewdb::DEFAULT_DATABASE_PATH)?;
//! for name in &tables {
//!     println!("{}", name);
//! }
//! ```

pub mod config;
pub mod database;
pub mod lens;

pub use config::{format_size, ViewdbConfig, DEFAULT_DATABASE_PATH, DEFAULT_TABLE};

pub use database::{CatalogError, CatalogResult, DatabaseConn};

pub use lens::catalog::{
    database_info, list_tables, CatalogLens, ColumnInfo, DatabaseInfo, TableEntry, TableName,
};
pub use lens::utils::OutputFormat;
