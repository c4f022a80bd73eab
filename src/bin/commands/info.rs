use anyhow::Result;
use viewdb::{database_info, format_size, OutputFormat, ViewdbConfig};

pub fn run(config: &ViewdbConfig, output_format: OutputFormat) -> Result<()> {
    let info = database_info(&config.database_path);

    if super::print_json(&info, output_format)? {
        return Ok(());
    }

    println!("Database:");
    println!("  Path:           {}", info.path);
    println!(
        "  Status:         {}",
        match (info.exists, info.table_count) {
            (false, _) => "not found",
            (true, Some(_)) => "ok",
            (true, None) => "unreadable",
        }
    );
    if let Some(size) = info.size_bytes {
        println!("  Size:           {}", format_size(size));
    }
    if let Some(count) = info.table_count {
        println!("  Tables:         {}", count);
    }
    Ok(())
}
