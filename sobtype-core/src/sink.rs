use std::path::Path;

use eyre::Result;

/// Destination for generated files.
///
/// One call per file; a failed write is fatal for that file but files
/// written earlier in the run stay in place (no rollback).
pub trait OutputSink {
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

/// Filesystem sink. Creates missing parent directories.
pub struct FsSink;

impl OutputSink for FsSink {
    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
