//! Corpus aggregation - runs every document through the pipeline and
//! writes the formatted result.

use crate::{
    config::Config,
    format::OutputFormatter,
    frontmatter::read_document,
    links::LinkRewriter,
    models::{CorpusStats, Document, RenderedDocument},
    route::{resolve_route, resolve_title},
};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to write corpus: {0}")]
    Io(#[from] std::io::Error),
}

/// Sequential corpus builder for one configuration and output format.
pub struct Aggregator<'a> {
    config: &'a Config,
    formatter: &'a dyn OutputFormatter,
    rewriter: Option<LinkRewriter>,
}

impl<'a> Aggregator<'a> {
    pub fn new(config: &'a Config, formatter: &'a dyn OutputFormatter) -> Self {
        Self {
            config,
            formatter,
            rewriter: LinkRewriter::new(&config.base_url),
        }
    }

    /// Turn an extracted document into its output form.
    pub fn render(&self, doc: &Document) -> RenderedDocument {
        let route = resolve_route(&doc.path, &self.config.input_dir, &doc.frontmatter);
        let title = resolve_title(&doc.path, &doc.frontmatter);
        let url = self.config.full_url(&route);

        let body = match &self.rewriter {
            Some(rewriter) => rewriter.rewrite(&doc.body),
            None => doc.body.clone(),
        };

        RenderedDocument {
            source: self.display_path(&doc.path),
            title,
            route,
            url,
            content: body.trim().to_string(),
        }
    }

    /// Process `files` in order, writing each section to `out` as soon as it
    /// is rendered. Unreadable files are skipped; write failures abort.
    pub fn run<W: Write>(&self, files: &[PathBuf], out: &mut W) -> Result<CorpusStats, BuildError> {
        let mut stats = CorpusStats::default();

        out.write_all(self.formatter.preamble(self.config).as_bytes())?;

        for path in files {
            tracing::info!("  → {}", path.display());

            let doc = match read_document(path) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!("Failed to read {:?}: {}", path, e);
                    stats.skipped += 1;
                    continue;
                }
            };

            let rendered = self.render(&doc);
            tracing::debug!("{} -> {}", rendered.source, rendered.url);

            if stats.documents > 0 {
                out.write_all(self.formatter.separator().as_bytes())?;
            }
            out.write_all(self.formatter.document(&rendered).as_bytes())?;
            stats.record(&rendered);
        }

        out.write_all(self.formatter.summary(&stats).as_bytes())?;
        out.flush()?;

        Ok(stats)
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.config.input_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
