//! Run command - one incremental ingestion pass.

use super::load_config;
use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inlet_config::Credentials;
use inlet_drive::DriveClient;
use inlet_embed::EmbeddingClient;
use inlet_extract::{Extractor, ToolConfig};
use inlet_index::IndexClient;
use inlet_pipeline::{DocumentProcessor, Pipeline};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

pub fn run(dry_run: bool) -> Result<()> {
    let credentials = Credentials::from_env().context("Failed to load credentials")?;

    let mut config = load_config()?;
    if let Some(root_folder) = Credentials::root_folder_from_env() {
        config.drive.root_folder = root_folder;
    }
    config.validate().context("Configuration is incomplete")?;

    let store = Arc::new(
        DriveClient::from_config(&config.drive, credentials.drive_token)
            .context("Failed to create file-store client")?,
    );
    let embedder = Arc::new(
        EmbeddingClient::from_config(&config.embedding, credentials.embed_api_key)
            .context("Failed to create embedding client")?,
    );
    let index = Arc::new(
        IndexClient::from_config(&config.index, credentials.index_api_key)
            .context("Failed to create index client")?,
    );
    let extractor = Extractor::new(ToolConfig {
        soffice: config.tools.soffice.clone(),
        antiword: config.tools.antiword.clone(),
    });

    let processor = DocumentProcessor::new(
        store.clone(),
        embedder,
        index,
        extractor,
        config.index.namespace.clone(),
    );
    let pipeline = Pipeline::new(
        store,
        processor,
        config.drive.root_folder.clone(),
        config.pipeline.manifest_path.clone(),
    );

    let rt = Runtime::new().context("Failed to create async runtime")?;

    if dry_run {
        let candidates = rt.block_on(pipeline.plan());

        if candidates.is_empty() {
            println!("{} Nothing to process.", "✓".green());
            return Ok(());
        }

        println!(
            "{} {} document(s) would be processed:",
            "→".cyan(),
            candidates.len().to_string().yellow()
        );
        for doc in &candidates {
            println!("  {} {} ({})", "•".dimmed(), doc.name, doc.media_type);
        }
        return Ok(());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Running incremental ingestion...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = rt.block_on(pipeline.run());

    pb.finish_and_clear();

    let elapsed = (report.finished_at - report.started_at).num_seconds();

    println!("{}", "Ingestion Run".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("  Remote documents: {}", report.total_remote);
    println!("  Attempted: {}", report.attempted);
    println!(
        "  {} Succeeded: {}",
        "✓".green(),
        report.succeeded.to_string().green()
    );
    if report.failed > 0 {
        println!(
            "  {} Failed: {}",
            "✗".red(),
            report.failed.to_string().red()
        );
    }
    println!("  Manifest entries: {}", report.manifest_size);
    if report.attempted > 0 {
        println!("  Success rate: {:.0}%", report.success_rate() * 100.0);
    }
    println!("  Elapsed: {}s", elapsed);

    Ok(())
}
