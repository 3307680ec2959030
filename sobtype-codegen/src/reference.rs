//! Reference field resolution against the sObjects in scope.

use indexmap::IndexSet;
use sobtype_core::FieldDescribe;

/// Resolve a reference field into a union over its in-scope targets.
///
/// Returns the ` | `-joined union of every `referenceTo` target that is
/// also in the known set, in the order the targets appear on the field.
/// `None` when the field is not a named reference, when the run has no
/// known set (single mode), or when no target is in scope — the scalar
/// id property for the field is emitted either way.
pub fn resolve_reference(
    field: &FieldDescribe,
    known: Option<&IndexSet<String>>,
) -> Option<String> {
    if !field.field_type.is_reference() || field.relationship_name.is_none() {
        return None;
    }
    let known = known?;
    let targets: Vec<&str> = field
        .reference_to
        .iter()
        .filter(|target| known.contains(*target))
        .map(String::as_str)
        .collect();
    if targets.is_empty() {
        return None;
    }
    Some(targets.join(" | "))
}
