//! Catalog query definitions
//!
//! All statements read from `sqlite_master`; none of them modify the database.

/// SQL used to read the database catalog
pub struct CatalogQueries;

impl CatalogQueries {
    /// Every catalog entry of type `table`, in the order the engine returns them
    pub const LIST_TABLES: &'static str = "SELECT name FROM sqlite_master WHERE type = 'table'";

    /// Like [`Self::LIST_TABLES`] but without engine-internal `sqlite_*` tables
    pub const LIST_USER_TABLES: &'static str =
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\'";

    /// Identifiers are case-insensitive in SQLite, so the name match is too
    pub const TABLE_EXISTS: &'static str =
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE";

    /// Tables or views, i.e. anything `PRAGMA table_info` can describe
    pub const RELATION_EXISTS: &'static str = "SELECT COUNT(*) FROM sqlite_master \
         WHERE type IN ('table', 'view') AND name = ?1 COLLATE NOCASE";

    pub const COUNT_TABLES: &'static str =
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'";

    pub const COUNT_ALL_OBJECTS: &'static str = "SELECT COUNT(*) FROM sqlite_master";

    /// Column listing for a single table; the identifier must already be quoted
    pub fn table_info(quoted_table: &str) -> String {
        format!("PRAGMA table_info({})", quoted_table)
    }
}

/// Quote an identifier for interpolation into a statement
///
/// Embedded double quotes are doubled, following SQLite's identifier rules.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
