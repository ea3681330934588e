//! # retype-llms CLI
//!
//! Command-line interface that flattens a Retype documentation project into
//! an `llms.txt` corpus.

mod commands;

use clap::{Parser, ValueEnum};
use retype_llms_core::{OutputFormatter, SectionFormatter, XmlFormatter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retype-llms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source directory (overrides `input` from the project file)
    source: Option<PathBuf>,

    /// Path to the project file
    #[arg(long, default_value = retype_llms_core::config::PROJECT_FILE)]
    config: PathBuf,

    /// Output file (defaults to <input>/static/llms.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = CorpusFormat::Xml)]
    format: CorpusFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum CorpusFormat {
    /// <document> envelopes
    Xml,
    /// `### SECTION` blocks with an instructions preamble
    Sections,
}

impl CorpusFormat {
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            CorpusFormat::Xml => Box::new(XmlFormatter),
            CorpusFormat::Sections => Box::new(SectionFormatter),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let opts = commands::BuildOptions {
        source: cli.source,
        output: cli.output,
        format: cli.format,
    };
    commands::build_corpus(&cli.config, opts)
}
