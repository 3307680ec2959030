//! Batch config loading.
//!
//! The batch run is driven by a JSON document:
//!
//! ```json
//! {
//!   "entityNames": ["Account", "Contact"],
//!   "specialChildrenToMap": []
//! }
//! ```
//!
//! A parse failure aborts before any generation begins.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

/// Batch run configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// sObjects to generate, in output order. Duplicates are kept.
    pub entity_names: Vec<String>,
    /// Allow-list for anonymous non-junction child relationships.
    #[serde(default)]
    pub special_children_to_map: Vec<String>,
}

impl BatchConfig {
    /// Load the config from a JSON file.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(&raw, &path.to_string_lossy())
    }

    /// Parse the config from a JSON string.
    pub fn parse(raw: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| {
            let span = span_at(raw, source.line(), source.column());
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, raw.to_string()),
                span,
                source,
            })
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse batch config")]
    #[diagnostic(
        code(sobtype::config::parse),
        help("expected {{ \"entityNames\": [...], \"specialChildrenToMap\": [...] }}")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

/// Byte offset of a 1-based line/column position, for span labeling.
fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.lines().enumerate() {
        if index + 1 == line {
            let within = column.saturating_sub(1).min(text.len());
            return Some((offset + within, 0).into());
        }
        offset += text.len() + 1;
    }
    None
}
