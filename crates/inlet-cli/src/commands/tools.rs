//! Tools command - check external extraction tools.

use super::load_config;
use anyhow::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    let config = load_config()?;

    println!("{}", "External Tools".cyan().bold());
    println!("{}", "─".repeat(50));

    check("soffice (legacy slide decks)", &config.tools.soffice);
    check("antiword (legacy word documents)", &config.tools.antiword);

    println!();
    println!(
        "{}",
        "Missing tools are not fatal: affected documents fall back to a \
         binary scrape or are skipped."
            .dimmed()
    );

    Ok(())
}

fn check(label: &str, command: &str) {
    match which::which(command) {
        Ok(path) => println!("  {} {}: {}", "✓".green(), label, path.display()),
        Err(_) => println!("  {} {}: not found ({})", "✗".red(), label, command),
    }
}
