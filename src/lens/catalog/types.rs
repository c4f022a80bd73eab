//! Catalog lens types
//!
//! This module defines the records returned by the catalog lens and the
//! flattened rows used for table output.

use crate::lens::utils::{truncate_name, DEFAULT_NAME_MAX_LEN};
use serde::{Deserialize, Serialize};

/// Name of a relation stored in the database
pub type TableName = String;

/// Single-column row for rendering table names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "display", derive(tabled::Tabled))]
pub struct TableEntry {
    pub name: TableName,
}

impl From<TableName> for TableEntry {
    fn from(name: TableName) -> Self {
        TableEntry { name }
    }
}

/// One column of a table as reported by `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Ordinal position, starting at 0
    pub cid: i64,
    pub name: String,
    /// Declared type; empty when the column was declared without one
    pub data_type: String,
    pub not_null: bool,
    /// Default value expression as written in the schema
    pub default_value: Option<String>,
    /// 1-based position within the primary key, 0 if not part of it
    pub primary_key: i64,
}

/// Column record flattened for table output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "display", derive(tabled::Tabled))]
pub struct ColumnRow {
    pub cid: i64,
    pub name: String,
    #[cfg_attr(feature = "display", tabled(rename = "type"))]
    pub data_type: String,
    #[cfg_attr(feature = "display", tabled(rename = "not null"))]
    pub not_null: bool,
    #[cfg_attr(feature = "display", tabled(rename = "default"))]
    pub default_value: String,
    pub pk: i64,
}

impl ColumnInfo {
    /// Convert to a display row, optionally truncating long default expressions
    pub fn to_row(&self, truncate: bool) -> ColumnRow {
        let default_value = match &self.default_value {
            Some(v) if truncate => truncate_name(v, DEFAULT_NAME_MAX_LEN),
            Some(v) => v.clone(),
            None => "-".to_string(),
        };
        ColumnRow {
            cid: self.cid,
            name: self.name.clone(),
            data_type: self.data_type.clone(),
            not_null: self.not_null,
            default_value,
            pk: self.primary_key,
        }
    }
}

/// File-level facts about a database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    pub path: String,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_count: Option<u64>,
}
