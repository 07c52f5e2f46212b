//! Initialize Inlet.

use super::CONFIG_FILE;
use anyhow::{Context, Result};
use colored::Colorize;
use inlet_config::Config;
use std::path::Path;

pub fn run() -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() {
        println!("{} Config already exists: {}", "Note:".yellow().bold(), CONFIG_FILE);
        return Ok(());
    }

    Config::create_default_file(path).context("Failed to create config file")?;
    println!("  {} Created config: {}", "✓".green(), CONFIG_FILE);

    println!();
    println!("{}", "Inlet initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} and set drive.root_folder and index.host", CONFIG_FILE.cyan());
    println!(
        "  2. Export credentials: {}",
        "INLET_DRIVE_TOKEN, INLET_EMBED_API_KEY, INLET_INDEX_API_KEY".cyan()
    );
    println!("  3. Check tools: {}", "inlet tools".cyan());
    println!("  4. Run: {}", "inlet run".cyan());

    Ok(())
}
