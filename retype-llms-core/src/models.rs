//! Content model for documents flowing through the corpus pipeline.

use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Front-matter metadata from a markdown file.
///
/// Keys are kept dynamically since documentation projects put arbitrary
/// settings here; only a handful (`title`, `permalink`, `route`) drive
/// the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: BTreeMap<String, Value>,
}

impl Frontmatter {
    pub fn new(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Value for a key rendered as text.
    ///
    /// Scalars are rendered the way they were written; null values count
    /// as absent. Sequences and mappings are rendered as inline YAML.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Tagged(tagged) => Some(render_yaml(&tagged.value)),
            other => Some(render_yaml(other)),
        }
    }

    pub fn title(&self) -> Option<String> {
        self.text("title")
    }

    pub fn permalink(&self) -> Option<String> {
        self.text("permalink")
    }

    pub fn route(&self) -> Option<String> {
        self.text("route")
    }
}

fn render_yaml(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_default()
}

/// A source document after front-matter extraction.
#[derive(Debug, Clone)]
pub struct Document {
    /// Location on disk (as discovered, i.e. under the input directory)
    pub path: PathBuf,

    /// Parsed front matter (empty when absent or unparsable)
    pub frontmatter: Frontmatter,

    /// Text after the front-matter block
    pub body: String,
}

/// A document ready to be written into the corpus.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Path relative to the input directory, for display
    pub source: String,

    /// Declared or derived title
    pub title: String,

    /// Resolved route (e.g. "/guide/setup/")
    pub route: String,

    /// Base URL joined with the route, or the bare route without a base URL
    pub url: String,

    /// Link-rewritten body with surrounding whitespace trimmed
    pub content: String,
}

impl RenderedDocument {
    /// Whitespace-separated tokens across title, URL and content.
    pub fn word_count(&self) -> usize {
        count_words(&self.title) + count_words(&self.url) + count_words(&self.content)
    }
}

/// Count whitespace-separated tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated LLM token count for a word count (`round(words * 1.3)`).
pub fn estimate_tokens(words: usize) -> usize {
    (words as f64 * 1.3).round() as usize
}

/// Totals accumulated over one corpus run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Documents written to the output
    pub documents: usize,

    /// Documents that could not be read
    pub skipped: usize,

    pub words: usize,
}

impl CorpusStats {
    pub fn record(&mut self, doc: &RenderedDocument) {
        self.documents += 1;
        self.words += doc.word_count();
    }

    pub fn tokens(&self) -> usize {
        estimate_tokens(self.words)
    }
}
