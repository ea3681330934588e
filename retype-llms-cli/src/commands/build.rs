//! Build command implementation.

use crate::CorpusFormat;
use anyhow::{Context, Result};
use retype_llms_core::{discover_documents, Aggregator, Config};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct BuildOptions {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: CorpusFormat,
}

/// Build the corpus file for the project described by `config_path`.
pub fn build_corpus(config_path: &Path, opts: BuildOptions) -> Result<()> {
    tracing::info!("Checking for Retype project at {:?}", config_path);
    let config = Config::load(config_path, opts.source.as_deref())
        .context("Failed to load configuration")?;

    tracing::info!(
        "Retype input directory from {}: {}",
        config.input_source,
        config.input_dir.display()
    );

    let output_path = opts
        .output
        .unwrap_or_else(|| config.default_output_path());
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let files = discover_documents(&config.input_dir);
    tracing::info!("Processing {} markdown files", files.len());

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create output file {:?}", output_path))?;
    let mut writer = BufWriter::new(file);

    let formatter = opts.format.formatter();
    let stats = Aggregator::new(&config, formatter.as_ref())
        .run(&files, &mut writer)
        .with_context(|| format!("Failed to write {:?}", output_path))?;

    tracing::info!("✓ Done");
    if stats.skipped > 0 {
        tracing::warn!("Skipped {} unreadable files", stats.skipped);
    }

    println!("Total files count: {}", stats.documents);
    println!("Total words: {}", stats.words);
    println!("Estimated tokens (words * 1.3): {}", stats.tokens());
    println!("File saved to: {}", output_path.display());

    Ok(())
}
