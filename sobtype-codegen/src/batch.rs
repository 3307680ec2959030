//! Batch document assembly.

use std::collections::BTreeSet;

use eyre::Result;
use indexmap::IndexSet;
use sobtype_core::{SObjectDescribe, SchemaSource};

use crate::{IMPORT_LINES, build_entity_block};

/// Header of the stub section; present even when no stub is needed.
const UNMAPPED_HEADER: &str = "// Unmapped sObjects\n";

/// Assemble the combined batch document for `names`.
///
/// Describes are fetched concurrently, one scoped thread per name, and
/// collected in spawn order, so the document always concatenates blocks
/// in input order no matter which fetch completes first. Duplicate names
/// are fetched and emitted again, not deduplicated. Any fetch failure is
/// fatal for the whole batch.
///
/// The document is the fixed import lines, one interface block per name,
/// and the stub section: one `export type X = any;` per sObject that was
/// referenced through a named relationship but not generated, sorted
/// lexicographically.
pub fn assemble<S: SchemaSource>(
    source: &S,
    names: &[String],
    allow_list: &[String],
) -> Result<String> {
    let known: IndexSet<String> = names.iter().cloned().collect();
    let describes = fetch_describes(source, names)?;

    let mut unmapped = BTreeSet::new();
    let mut document = String::from(IMPORT_LINES);
    for describe in &describes {
        document.push('\n');
        document.push_str(&build_entity_block(
            describe,
            Some(&known),
            allow_list,
            &mut unmapped,
        ));
    }
    document.push('\n');
    document.push_str(UNMAPPED_HEADER);
    for name in &unmapped {
        document.push_str(&format!("export type {name} = any;\n"));
    }
    Ok(document)
}

/// Fetch every describe concurrently; results come back indexed by the
/// original name order, never by completion order.
fn fetch_describes<S: SchemaSource>(
    source: &S,
    names: &[String],
) -> Result<Vec<SObjectDescribe>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|name| scope.spawn(move || source.describe(name)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}
