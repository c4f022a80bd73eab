use anyhow::Result;
use clap::Args;
use viewdb::lens::catalog::ColumnRow;
use viewdb::lens::utils::{format_json, format_records};
use viewdb::{CatalogLens, DatabaseConn, OutputFormat, ViewdbConfig};

/// Arguments for the Columns command
#[derive(Args)]
pub struct ColumnsArgs {
    /// Table to describe, defaults to the configured default table
    #[clap(value_name = "TABLE")]
    pub table: Option<String>,

    /// Show full default expressions instead of truncating them
    #[clap(long)]
    pub full: bool,
}

pub fn run(config: &ViewdbConfig, args: ColumnsArgs, output_format: OutputFormat) -> Result<()> {
    let table = args.table.unwrap_or_else(|| config.default_table.clone());

    let db = DatabaseConn::open_read_only(&config.database_path)?;
    let columns = CatalogLens::new(&db).describe_table(&table)?;

    // JSON keeps nullable defaults as null
    if output_format.is_json() {
        println!("{}", format_json(&columns, output_format)?);
        return Ok(());
    }

    let rows: Vec<ColumnRow> = columns.iter().map(|c| c.to_row(!args.full)).collect();
    if output_format == OutputFormat::Plain {
        println!("{} columns:", table);
    }
    let out = format_records(&rows, output_format, |r| {
        format!(
            "- {} | type: {} | NOT NULL: {} | default: {}",
            r.name, r.data_type, r.not_null, r.default_value
        )
    })?;
    println!("{}", out);
    Ok(())
}
