//! Database connection management
//!
//! This module provides the read-only connection wrapper used by the catalog lens.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rusqlite::{Connection, OpenFlags, Params};
use tracing::debug;

use super::catalog::CatalogQueries;
use super::error::{CatalogError, CatalogResult};

/// Read-only database connection wrapper
///
/// `DatabaseConn` opens an existing SQLite file without the ability to create
/// or modify it. The file format is verified on open, so a file that is not a
/// database fails here rather than on the first query.
pub struct DatabaseConn {
    pub conn: Connection,
    path: Option<String>,
}

/// Magic string at the start of every SQLite 3 database file
const SQLITE_HEADER: &[u8; 16] = b"SQLite format 3\0";

/// Reject non-empty files that do not start with the SQLite header
///
/// SQLite treats very short files as empty databases, so the open probe alone
/// would accept them. Empty files are valid empty databases.
fn check_header(path: &str) -> CatalogResult<()> {
    let not_a_database = || CatalogError::NotADatabase {
        path: path.to_string(),
    };
    let mut file = File::open(path).map_err(|_| CatalogError::FileNotFound {
        path: path.to_string(),
    })?;

    let mut header = Vec::with_capacity(SQLITE_HEADER.len());
    file.by_ref()
        .take(SQLITE_HEADER.len() as u64)
        .read_to_end(&mut header)
        .map_err(|_| not_a_database())?;

    if header.is_empty() || header.as_slice() == SQLITE_HEADER.as_slice() {
        Ok(())
    } else {
        Err(not_a_database())
    }
}

impl DatabaseConn {
    /// Open an existing database file in read-only mode
    pub fn open_read_only(path: &str) -> CatalogResult<Self> {
        if !Path::new(path).is_file() {
            return Err(CatalogError::FileNotFound {
                path: path.to_string(),
            });
        }

        check_header(path)?;

        debug!("opening database '{}' read-only", path);
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)
            .map_err(|e| CatalogError::from_sqlite(path, e))?;

        let db = DatabaseConn {
            conn,
            path: Some(path.to_string()),
        };
        db.configure()?;
        db.probe()?;
        Ok(db)
    }

    /// Wrap an already-open connection
    ///
    /// The connection is switched to query-only mode; any schema the caller
    /// needs must exist before wrapping.
    pub fn from_connection(conn: Connection) -> CatalogResult<Self> {
        let db = DatabaseConn { conn, path: None };
        db.configure()?;
        db.probe()?;
        Ok(db)
    }

    /// Path of the underlying file, `None` for wrapped connections
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    fn configure(&self) -> CatalogResult<()> {
        self.conn
            .execute_batch("PRAGMA query_only = ON")
            .map_err(|e| self.classify(e))
    }

    /// Touch the catalog once so format errors surface on open
    fn probe(&self) -> CatalogResult<()> {
        let _: i64 = self
            .conn
            .query_row(CatalogQueries::COUNT_ALL_OBJECTS, [], |row| row.get(0))
            .map_err(|e| self.classify(e))?;
        Ok(())
    }

    fn classify(&self, err: rusqlite::Error) -> CatalogError {
        CatalogError::from_sqlite(self.path.as_deref().unwrap_or(":memory:"), err)
    }

    /// Run a query and collect the first column of every row as text
    pub fn query_first_column<P: Params>(
        &self,
        sql: &str,
        params: P,
    ) -> CatalogResult<Vec<String>> {
        let mut stmt = self.conn.prepare(sql).map_err(|e| self.classify(e))?;
        let rows = stmt
            .query_map(params, |row| row.get::<_, String>(0))
            .map_err(|e| self.classify(e))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| self.classify(e))?);
        }
        Ok(results)
    }

    /// Check if a table exists in the database
    pub fn table_exists(&self, table_name: &str) -> CatalogResult<bool> {
        self.count_matching(CatalogQueries::TABLE_EXISTS, table_name)
    }

    /// Check if a table or view of this name exists
    pub fn relation_exists(&self, name: &str) -> CatalogResult<bool> {
        self.count_matching(CatalogQueries::RELATION_EXISTS, name)
    }

    fn count_matching(&self, sql: &str, name: &str) -> CatalogResult<bool> {
        let count: i64 = self
            .conn
            .query_row(sql, [name], |row| row.get(0))
            .map_err(|e| self.classify(e))?;
        Ok(count > 0)
    }

    /// Number of tables recorded in the catalog
    pub fn table_count(&self) -> CatalogResult<u64> {
        let count: u64 = self
            .conn
            .query_row(CatalogQueries::COUNT_TABLES, [], |row| row.get(0))
            .map_err(|e| self.classify(e))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_db(dir: &TempDir, name: &str, ddl: &str) -> String {
        let path = dir.path().join(name);
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(ddl).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.db");
        let path_str = path.to_string_lossy().to_string();

        let err = DatabaseConn::open_read_only(&path_str).err().unwrap();
        assert!(err.is_file_not_found());
        // opening must not create the file
        assert!(!path.exists());
    }

    #[test]
    fn test_open_directory() {
        let dir = TempDir::new().unwrap();
        let path_str = dir.path().to_string_lossy().to_string();

        let err = DatabaseConn::open_read_only(&path_str).err().unwrap();
        assert!(err.is_file_not_found());
    }

    #[test]
    fn test_open_not_a_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text, definitely not sqlite\n".repeat(64)).unwrap();

        let err = DatabaseConn::open_read_only(&path.to_string_lossy())
            .err()
            .unwrap();
        assert!(err.is_not_a_database());
    }

    #[test]
    fn test_open_short_non_database_files() {
        let dir = TempDir::new().unwrap();
        for (name, content) in [
            ("one.txt", &b"x"[..]),
            ("fifteen.txt", &b"SQLite format 3"[..]),
            ("header.txt", &b"SQLite format 2\0 and more"[..]),
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, content).unwrap();

            let err = DatabaseConn::open_read_only(&path.to_string_lossy())
                .err()
                .unwrap();
            assert!(err.is_not_a_database(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_open_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.db");
        std::fs::write(&path, b"").unwrap();

        let db = DatabaseConn::open_read_only(&path.to_string_lossy()).unwrap();
        assert_eq!(db.table_count().unwrap(), 0);
    }

    #[test]
    fn test_open_read_only_rejects_writes() {
        let dir = TempDir::new().unwrap();
        let path = create_db(&dir, "ro.db", "CREATE TABLE t (id INTEGER);");

        let db = DatabaseConn::open_read_only(&path).unwrap();
        assert_eq!(db.path(), Some(path.as_str()));
        assert!(db.conn.execute("INSERT INTO t (id) VALUES (1)", []).is_err());
    }

    #[test]
    fn test_table_exists() {
        let dir = TempDir::new().unwrap();
        let path = create_db(
            &dir,
            "exists.db",
            "CREATE TABLE test_table (id INTEGER PRIMARY KEY);",
        );

        let db = DatabaseConn::open_read_only(&path).unwrap();
        assert!(db.table_exists("test_table").unwrap());
        assert!(db.table_exists("Test_Table").unwrap());
        assert!(db.table_exists("TEST_TABLE").unwrap());
        assert!(!db.table_exists("nonexistent_table").unwrap());
    }

    #[test]
    fn test_relation_exists_includes_views() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE letters (id INTEGER);
             CREATE VIEW drafts AS SELECT id FROM letters;",
        )
        .unwrap();

        let db = DatabaseConn::from_connection(conn).unwrap();
        assert!(db.relation_exists("letters").unwrap());
        assert!(db.relation_exists("DRAFTS").unwrap());
        assert!(!db.table_exists("drafts").unwrap());
        assert!(!db.relation_exists("outbox").unwrap());
    }

    #[test]
    fn test_table_count() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE a (id INTEGER);
             CREATE TABLE b (id INTEGER);
             CREATE VIEW v AS SELECT id FROM a;",
        )
        .unwrap();

        let db = DatabaseConn::from_connection(conn).unwrap();
        assert_eq!(db.path(), None);
        assert_eq!(db.table_count().unwrap(), 2);
    }
}
