//! Status command - summarize the manifest.

use super::load_config;
use anyhow::Result;
use colored::Colorize;
use inlet_pipeline::Manifest;
use std::path::Path;

pub fn run() -> Result<()> {
    let config = load_config()?;
    let path = Path::new(&config.pipeline.manifest_path);

    println!("{}", "Inlet Status".cyan().bold());
    println!("{}", "─".repeat(50));

    if !path.exists() {
        println!();
        println!(
            "{}",
            "No manifest found. Run 'inlet run' to start ingesting.".dimmed()
        );
        return Ok(());
    }

    let manifest = Manifest::load(path);
    println!("  Manifest: {}", path.display());
    println!("  Processed documents: {}", manifest.len());

    // Most recently processed first.
    let mut entries: Vec<_> = manifest.iter().collect();
    entries.sort_by(|a, b| b.1.processed_at.cmp(&a.1.processed_at));

    if !entries.is_empty() {
        println!();
        println!("{}", "Recently Processed".white().bold());
        for (_, entry) in entries.iter().take(5) {
            println!(
                "  {} {} ({})",
                "•".dimmed(),
                entry.name,
                entry.processed_at.format("%Y-%m-%d %H:%M")
            );
        }
        if entries.len() > 5 {
            println!("  {}", format!("...and {} more", entries.len() - 5).dimmed());
        }
    }

    Ok(())
}
