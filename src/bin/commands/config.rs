use anyhow::Result;
use serde::Serialize;
use viewdb::{OutputFormat, ViewdbConfig};

#[derive(Debug, Serialize)]
struct ConfigInfo<'a> {
    config_file: String,
    config_file_exists: bool,
    #[serde(flatten)]
    settings: &'a ViewdbConfig,
}

pub fn run(config: &ViewdbConfig, output_format: OutputFormat) -> Result<()> {
    let config_file = ViewdbConfig::config_file_path();
    let info = ConfigInfo {
        config_file_exists: std::path::Path::new(&config_file).is_file(),
        config_file,
        settings: config,
    };

    if super::print_json(&info, output_format)? {
        return Ok(());
    }

    println!("{}", config.summary());

    eprintln!();
    eprintln!("Tips:");
    eprintln!("  Use --format json for machine-readable output");
    eprintln!("  Set VIEWDB_DATABASE_PATH or edit ~/.viewdb/viewdb.toml to change the database");
    Ok(())
}
