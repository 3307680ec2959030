use std::path::PathBuf;

use eyre::{Context, Result};

use crate::SObjectDescribe;

/// Source of sObject describe documents.
///
/// The `Sync` bound lets batch generation fan describe calls out across
/// scoped threads. A failed describe is fatal for the whole run and is
/// surfaced verbatim, never retried.
pub trait SchemaSource: Sync {
    fn describe(&self, name: &str) -> Result<SObjectDescribe>;
}

/// Schema source backed by a directory of describe JSON dumps, one
/// `<Name>.json` file per sObject.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SchemaSource for DirSource {
    fn describe(&self, name: &str) -> Result<SObjectDescribe> {
        let path = self.dir.join(format!("{name}.json"));
        let raw = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read describe at {}", path.display()))?;
        serde_json::from_str(&raw)
            .wrap_err_with(|| format!("malformed describe document for {name}"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_dir_source_reads_describe() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Account.json"),
            r#"{ "name": "Account", "fields": [{ "name": "Name", "type": "string" }] }"#,
        )
        .unwrap();

        let source = DirSource::new(temp.path());
        let describe = source.describe("Account").unwrap();

        assert_eq!(describe.name, "Account");
        assert_eq!(describe.fields.len(), 1);
    }

    #[test]
    fn test_dir_source_missing_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let source = DirSource::new(temp.path());

        let err = source.describe("Missing").unwrap_err();
        assert!(err.to_string().contains("Missing.json"));
    }

    #[test]
    fn test_dir_source_malformed_document_is_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Broken.json"), "{ not json").unwrap();

        let source = DirSource::new(temp.path());
        let err = source.describe("Broken").unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }
}
