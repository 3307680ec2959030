//! File-level orchestration of a generation run.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use eyre::Result;
use sobtype_core::{OutputSink, SchemaSource, file_stem};

use crate::{
    IMPORT_LINES, S_OBJECT_FILE, S_OBJECT_TS, SCALARS_FILE, SCALARS_TS, assemble,
    build_entity_block,
};

/// File name of the combined batch module.
pub const BATCH_FILE: &str = "s-objects.ts";

/// Drives a generation run against a schema source and an output sink.
pub struct Generator<'a, S> {
    source: &'a S,
}

impl<'a, S: SchemaSource> Generator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Single mode: the preamble plus one module for `name`, with
    /// relationship typing degraded to scalar properties only.
    ///
    /// Returns the paths written, in write order.
    pub fn generate_single(
        &self,
        name: &str,
        out_dir: &Path,
        sink: &impl OutputSink,
    ) -> Result<Vec<PathBuf>> {
        let mut written = self.write_preamble(out_dir, sink)?;

        let describe = self.source.describe(name)?;
        let mut unmapped = BTreeSet::new();
        let mut content = String::from(IMPORT_LINES);
        content.push('\n');
        content.push_str(&build_entity_block(&describe, None, &[], &mut unmapped));

        let path = out_dir.join(format!("{}.ts", file_stem(name)));
        sink.write_text(&path, &content)?;
        written.push(path);
        Ok(written)
    }

    /// Batch mode: the preamble plus the combined module assembled from
    /// every name in input order.
    pub fn generate_batch(
        &self,
        names: &[String],
        allow_list: &[String],
        out_dir: &Path,
        sink: &impl OutputSink,
    ) -> Result<Vec<PathBuf>> {
        let mut written = self.write_preamble(out_dir, sink)?;

        let document = assemble(self.source, names, allow_list)?;
        let path = out_dir.join(BATCH_FILE);
        sink.write_text(&path, &document)?;
        written.push(path);
        Ok(written)
    }

    fn write_preamble(&self, out_dir: &Path, sink: &impl OutputSink) -> Result<Vec<PathBuf>> {
        let s_object = out_dir.join(S_OBJECT_FILE);
        sink.write_text(&s_object, S_OBJECT_TS)?;
        let scalars = out_dir.join(SCALARS_FILE);
        sink.write_text(&scalars, SCALARS_TS)?;
        Ok(vec![s_object, scalars])
    }
}
