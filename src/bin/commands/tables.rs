use anyhow::Result;
use clap::Args;
use tracing::info;
use viewdb::lens::utils::format_records;
use viewdb::{CatalogLens, DatabaseConn, OutputFormat, TableEntry, ViewdbConfig};

/// Arguments for the Tables command
#[derive(Args, Default)]
pub struct TablesArgs {
    /// Hide SQLite's internal tables (sqlite_*)
    #[clap(short, long)]
    pub user_only: bool,
}

pub fn run(config: &ViewdbConfig, args: TablesArgs, output_format: OutputFormat) -> Result<()> {
    info!("listing tables in {}", config.database_path);

    let db = DatabaseConn::open_read_only(&config.database_path)?;
    let lens = CatalogLens::new(&db);
    let tables = if args.user_only {
        lens.list_user_tables()?
    } else {
        lens.list_tables()?
    };

    let entries: Vec<TableEntry> = tables.into_iter().map(TableEntry::from).collect();
    if entries.is_empty() && !output_format.is_json() {
        eprintln!("no tables in {}", config.database_path);
        return Ok(());
    }

    let out = format_records(&entries, output_format, |e| e.name.clone())?;
    println!("{}", out);
    Ok(())
}
