//! Catalog lens
//!
//! Reads the catalog (`sqlite_master`) of a local SQLite database: table names,
//! per-table column layout and file-level information. Every operation is a
//! read; the database file is never created or modified.
//!
//! # Example
//!
//! ```rust,ignore
//! use viewdb::database::DatabaseConn;
//! use viewdb::lens::catalog::CatalogLens;
//!
//! let db = DatabaseConn::open_read_only("./letters.db")?;
//! let lens = CatalogLens::new(&db);
//!
//! for name in lens.list_tables()? {
//!     println!("{}", name);
//! }
//!
//! for col in lens.describe_table("letters")? {
//!     println!("- {} | {} | NOT NULL: {}", col.name, col.data_type, col.not_null);
//! }
//! ```

mod types;

pub use types::{ColumnInfo, ColumnRow, DatabaseInfo, TableEntry, TableName};

use std::path::Path;

use tracing::{debug, info};

use crate::database::{
    quote_identifier, CatalogError, CatalogQueries, CatalogResult, DatabaseConn,
};

/// Open `path` read-only and list every table recorded in its catalog
///
/// Names are returned in the order SQLite yields them.
pub fn list_tables(path: &str) -> CatalogResult<Vec<TableName>> {
    let db = DatabaseConn::open_read_only(path)?;
    CatalogLens::new(&db).list_tables()
}

/// Collect file-level information about `path`
///
/// Never fails: fields that cannot be determined are left as `None`.
pub fn database_info(path: &str) -> DatabaseInfo {
    let file = Path::new(path);
    let exists = file.exists();
    let size_bytes = if exists {
        std::fs::metadata(file).ok().map(|m| m.len())
    } else {
        None
    };

    let table_count = if exists {
        match DatabaseConn::open_read_only(path) {
            Ok(db) => db.table_count().ok(),
            Err(e) => {
                debug!("database info: {}", e);
                None
            }
        }
    } else {
        None
    };

    DatabaseInfo {
        path: path.to_string(),
        exists,
        size_bytes,
        table_count,
    }
}

/// Read-only view over a database catalog
pub struct CatalogLens<'a> {
    db: &'a DatabaseConn,
}

impl<'a> CatalogLens<'a> {
    pub fn new(db: &'a DatabaseConn) -> Self {
        Self { db }
    }

    /// All catalog entries of type `table`, including `sqlite_*` internals
    pub fn list_tables(&self) -> CatalogResult<Vec<TableName>> {
        let tables = self.db.query_first_column(CatalogQueries::LIST_TABLES, [])?;
        info!("found {} tables", tables.len());
        Ok(tables)
    }

    /// Tables created by users, skipping engine-internal `sqlite_*` tables
    pub fn list_user_tables(&self) -> CatalogResult<Vec<TableName>> {
        let tables = self
            .db
            .query_first_column(CatalogQueries::LIST_USER_TABLES, [])?;
        info!("found {} user tables", tables.len());
        Ok(tables)
    }

    pub fn table_exists(&self, table: &str) -> CatalogResult<bool> {
        self.db.table_exists(table)
    }

    /// Column layout of a table or view in declaration order
    ///
    /// Names match case-insensitively, as SQLite identifiers do.
    pub fn describe_table(&self, table: &str) -> CatalogResult<Vec<ColumnInfo>> {
        // table_info yields no rows for unknown tables instead of failing
        if !self.db.relation_exists(table)? {
            return Err(CatalogError::TableNotFound {
                table: table.to_string(),
            });
        }

        let sql = CatalogQueries::table_info(&quote_identifier(table));
        debug!("running '{}'", sql);

        let mut stmt = self.db.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(ColumnInfo {
                cid: row.get(0)?,
                name: row.get(1)?,
                data_type: row.get(2)?,
                not_null: row.get::<_, i64>(3)? != 0,
                default_value: row.get(4)?,
                primary_key: row.get(5)?,
            })
        })?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }

        Ok(columns)
    }
}
