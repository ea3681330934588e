//! Front-matter extraction from markdown files.

use crate::models::{Document, Frontmatter};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

const DELIMITER: &str = "---";

/// Split front matter from markdown content
///
/// Returns a tuple of (frontmatter, body). The block must open on the very
/// first line and close on a later line that is exactly `---` (surrounding
/// whitespace ignored). Extraction never fails:
///
/// - no opening delimiter: empty front matter, full content as body
/// - no closing delimiter: empty front matter, full content as body
/// - unparsable or non-mapping YAML: empty front matter, body after the block
///
/// # Example
///
/// ```
/// use retype_llms_core::frontmatter::parse_frontmatter;
///
/// let (fm, body) = parse_frontmatter("---\ntitle: X\n---\nBody text\n");
/// assert_eq!(fm.title(), Some("X".to_string()));
/// assert_eq!(body, "Body text\n");
/// ```
pub fn parse_frontmatter(content: &str) -> (Frontmatter, String) {
    let mut lines = content.split_inclusive('\n');

    let mut offset = match lines.next() {
        Some(first) if first.trim() == DELIMITER => first.len(),
        _ => return (Frontmatter::default(), content.to_string()),
    };

    let mut yaml = String::new();
    let mut body_start = None;
    for line in lines {
        offset += line.len();
        if line.trim() == DELIMITER {
            body_start = Some(offset);
            break;
        }
        yaml.push_str(line);
    }

    let Some(body_start) = body_start else {
        tracing::debug!("Front matter never closed; treating document as plain content");
        return (Frontmatter::default(), content.to_string());
    };

    (parse_fields(&yaml), content[body_start..].to_string())
}

fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

fn parse_fields(yaml: &str) -> Frontmatter {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(mapping)) => {
            let fields = mapping
                .into_iter()
                .filter_map(|(key, value)| match key {
                    Value::String(k) => Some((k, value)),
                    Value::Number(n) => Some((n.to_string(), value)),
                    Value::Bool(b) => Some((b.to_string(), value)),
                    _ => None,
                })
                .collect::<BTreeMap<_, _>>();
            Frontmatter::new(fields)
        }
        Ok(Value::Null) => Frontmatter::default(),
        Ok(_) => {
            tracing::debug!("Front matter is not a mapping; ignoring it");
            Frontmatter::default()
        }
        Err(e) => {
            tracing::warn!("Invalid front matter YAML, ignoring it: {}", e);
            Frontmatter::default()
        }
    }
}

/// Read a markdown file and split off its front matter.
///
/// Line endings are normalized to `\n` (`\r\n` and lone `\r` alike).
pub fn read_document(path: &Path) -> io::Result<Document> {
    let content = normalize_newlines(&fs::read_to_string(path)?);
    let (frontmatter, body) = parse_frontmatter(&content);
    Ok(Document {
        path: path.to_path_buf(),
        frontmatter,
        body,
    })
}
