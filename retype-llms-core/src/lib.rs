//! # retype-llms-core
//!
//! Core library for turning a Retype documentation project into a single
//! plain-text corpus for LLM context windows.
//!
//! This crate resolves the published route of every markdown source, splits
//! off front matter, makes relative links absolute and aggregates everything
//! into one delimited output stream.

pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod format;
pub mod frontmatter;
pub mod links;
pub mod models;
pub mod route;
pub mod slug;

pub use aggregate::{Aggregator, BuildError};
pub use config::{Config, ConfigError, InputSource};
pub use discovery::discover_documents;
pub use format::{OutputFormatter, SectionFormatter, XmlFormatter};
pub use links::{rewrite_links, LinkRewriter};
pub use models::{estimate_tokens, CorpusStats, Document, Frontmatter, RenderedDocument};
pub use route::{resolve_route, resolve_title};
pub use slug::slugify;
