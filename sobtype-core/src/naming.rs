//! Naming helpers for generated files.

/// Normalized file stem for an sObject name: lowercased, with one
/// trailing `__c` custom-object suffix and all underscores stripped.
pub fn file_stem(name: &str) -> String {
    let base = name.strip_suffix("__c").unwrap_or(name);
    base.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
