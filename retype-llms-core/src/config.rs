//! Configuration parsing and resolution.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project file that marks a documentation project.
pub const PROJECT_FILE: &str = "retype.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Not a Retype project ({0:?} not found)")]
    NotAProject(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Input directory {0:?} not found")]
    MissingInputDir(PathBuf),
}

/// The subset of the project file this tool reads. Other keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub input: Option<PathBuf>,

    #[serde(default)]
    pub url: Option<String>,
}

impl ProjectFile {
    /// Load the project file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&contents)
    }

    /// Parse project file contents. An empty document is an empty config.
    pub fn from_str(contents: &str) -> Result<Self, ConfigError> {
        let parsed: Option<ProjectFile> = serde_yaml::from_str(contents)?;
        Ok(parsed.unwrap_or_default())
    }
}

/// Where the input directory setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Default,
    ConfigFile,
    CommandLine,
}

impl InputSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputSource::Default => "default",
            InputSource::ConfigFile => "config-file",
            InputSource::CommandLine => "command-line",
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved settings for one run. Built once at startup and only read after.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the documentation sources
    pub input_dir: PathBuf,

    /// Public URL of the site without trailing slash (empty when unset)
    pub base_url: String,

    /// Provenance of `input_dir`, for display only
    pub input_source: InputSource,
}

impl Config {
    /// Load the project file at `config_path` and merge in an optional
    /// command-line source directory, which always wins over `input`.
    ///
    /// Fails when the project file is missing or unreadable, or when the
    /// resulting input directory does not exist.
    pub fn load(config_path: &Path, cli_source: Option<&Path>) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::NotAProject(config_path.to_path_buf()));
        }

        let project = ProjectFile::from_file(config_path)?;
        let config = Self::resolve(&project, config_path, cli_source);

        if !config.input_dir.exists() {
            return Err(ConfigError::MissingInputDir(config.input_dir));
        }

        Ok(config)
    }

    /// Merge the project file with the command line without touching disk.
    pub fn resolve(project: &ProjectFile, config_path: &Path, cli_source: Option<&Path>) -> Self {
        let (input_dir, input_source) = match (cli_source, &project.input) {
            (Some(source), _) => (source.to_path_buf(), InputSource::CommandLine),
            (None, Some(input)) => (
                resolve_relative(config_path, input),
                InputSource::ConfigFile,
            ),
            (None, None) => (
                resolve_relative(config_path, Path::new(".")),
                InputSource::Default,
            ),
        };

        let base_url = project
            .url
            .as_deref()
            .map(normalize_base_url)
            .unwrap_or_default();

        Self {
            input_dir,
            base_url,
            input_source,
        }
    }

    /// Base URL joined with a route, or the route alone without a base URL.
    pub fn full_url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Default location of the generated corpus
    pub fn default_output_path(&self) -> PathBuf {
        self.input_dir.join("static").join("llms.txt")
    }
}

/// Resolve a path relative to the config file location
fn resolve_relative(config_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(path),
        _ => path.to_path_buf(),
    }
}

/// Strip trailing slashes from a configured base URL
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
