use clap::{Parser, Subcommand};
use tracing::Level;
use viewdb::{OutputFormat, ViewdbConfig};

mod commands;

use commands::columns::ColumnsArgs;
use commands::tables::TablesArgs;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// configuration file path, by default $HOME/.viewdb/viewdb.toml is used if present
    #[clap(short, long, global = true)]
    config: Option<String>,

    /// SQLite database file to inspect, overrides the configured path
    #[clap(short, long, global = true)]
    database: Option<String>,

    /// Output format: table, markdown, json, json-pretty, json-line, plain
    #[clap(short, long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Print debug information
    #[clap(long, global = true)]
    debug: bool,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tables recorded in the database catalog (default)
    Tables(TablesArgs),

    /// Show the columns of a table
    Columns(ColumnsArgs),

    /// Show file-level information about the database
    Info,

    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Load configuration and apply the `--database` override
    fn load_config(&self) -> anyhow::Result<ViewdbConfig> {
        Ok(ViewdbConfig::new(&self.config)?.with_database_path(self.database.clone()))
    }

    /// Subcommand to run; listing tables when none is given
    fn command_or_default(&mut self) -> Commands {
        self.command
            .take()
            .unwrap_or_else(|| Commands::Tables(TablesArgs::default()))
    }
}

fn main() {
    let mut cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command_or_default() {
        Commands::Tables(args) => commands::tables::run(&config, args, cli.format),
        Commands::Columns(args) => commands::columns::run(&config, args, cli.format),
        Commands::Info => commands::info::run(&config, cli.format),
        Commands::Config => commands::config::run(&config, cli.format),
    };

    if let Err(e) = result {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
