//! Output formats for the aggregated corpus.
//!
//! Every format wraps each document's trimmed content between an opening
//! and a closing marker, so the text between them is exactly the content.

use crate::config::Config;
use crate::models::{CorpusStats, RenderedDocument};
use std::fmt::Write as _;

/// Renders the pieces of a corpus file.
pub trait OutputFormatter {
    /// Text written once before the first document.
    fn preamble(&self, _config: &Config) -> String {
        String::new()
    }

    /// One self-delimited document section.
    fn document(&self, doc: &RenderedDocument) -> String;

    /// Text written between consecutive documents.
    fn separator(&self) -> &str {
        "\n"
    }

    /// Text written once after the last document.
    fn summary(&self, _stats: &CorpusStats) -> String {
        String::new()
    }
}

/// XML-like envelope per document, no preamble or summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormatter;

impl XmlFormatter {
    pub const CONTENT_START: &'static str = "<content>";
    pub const CONTENT_END: &'static str = "</content>";
}

impl OutputFormatter for XmlFormatter {
    fn document(&self, doc: &RenderedDocument) -> String {
        format!(
            "<document>\n<title>{}</title>\n<url>{}</url>\n{}\n\n{}\n\n{}\n</document>\n",
            doc.title,
            doc.url,
            Self::CONTENT_START,
            doc.content,
            Self::CONTENT_END,
        )
    }
}

/// Plain `### SECTION` blocks behind an instructions preamble, followed by
/// a summary block.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionFormatter;

impl SectionFormatter {
    pub const CONTENT_START: &'static str = "<<<BEGIN CONTENT>>>";
    pub const CONTENT_END: &'static str = "<<<END CONTENT>>>";
}

impl OutputFormatter for SectionFormatter {
    fn preamble(&self, config: &Config) -> String {
        let mut out = String::new();
        out.push_str("# AI INSTRUCTIONS\n\n");
        out.push_str(
            "This file is the complete documentation of the project, flattened into plain text.\n",
        );
        out.push_str("Each document starts with a `### SECTION:` line giving its title, followed by\n");
        out.push_str("`Source:` (file path) and `URL:` (published location) lines. The document text\n");
        let _ = writeln!(
            out,
            "sits between `{}` and `{}`.",
            Self::CONTENT_START,
            Self::CONTENT_END
        );
        if !config.base_url.is_empty() {
            let _ = writeln!(
                out,
                "Relative links have been rewritten to absolute URLs under {}.",
                config.base_url
            );
        }
        out.push_str("Cite the URL of a section when answering from it.\n\n");
        out
    }

    fn document(&self, doc: &RenderedDocument) -> String {
        format!(
            "### SECTION: {}\nSource: {}\nURL: {}\n{}\n{}\n{}\n",
            doc.title,
            doc.source,
            doc.url,
            Self::CONTENT_START,
            doc.content,
            Self::CONTENT_END,
        )
    }

    fn summary(&self, stats: &CorpusStats) -> String {
        format!(
            "\n### SUMMARY\nDocuments: {}\nWords: {}\nEstimated tokens: {}\n",
            stats.documents,
            stats.words,
            stats.tokens()
        )
    }
}
