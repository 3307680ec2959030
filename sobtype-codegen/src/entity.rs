//! Entity type block rendering.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use sobtype_core::SObjectDescribe;

use crate::{ChildEmission, classify, map_scalar, resolve_reference};

/// The identity field is declared on the `SObject` base and never
/// redeclared on entity interfaces.
const IDENTITY_FIELD: &str = "Id";

/// Render the interface declaration for one sObject.
///
/// Field properties keep describe order; a resolvable reference field
/// contributes its relationship property right after its scalar id
/// property; child relationship properties follow all fields, in
/// describe order. Names of sObjects that need a stub declaration are
/// pushed into `unmapped`, the only shared state this touches.
pub fn build_entity_block(
    describe: &SObjectDescribe,
    known: Option<&IndexSet<String>>,
    allow_list: &[String],
    unmapped: &mut BTreeSet<String>,
) -> String {
    let name = &describe.name;
    let mut block = format!("export interface {name} extends SObject<\"{name}\"> {{\n");

    for field in &describe.fields {
        if field.name == IDENTITY_FIELD {
            continue;
        }
        let scalar = map_scalar(&field.field_type);
        let mut annotations: Vec<&str> = Vec::new();
        if let Some(tag) = scalar.comment {
            annotations.push(tag);
        }
        if field.calculated {
            annotations.push("calculated");
        }
        block.push_str(&format!("  {}: {};", field.name, scalar.expr));
        if !annotations.is_empty() {
            block.push_str(&format!(" // {}", annotations.join(", ")));
        }
        block.push('\n');

        if let Some(union) = resolve_reference(field, known) {
            let property = field
                .relationship_name
                .as_deref()
                .unwrap_or(&field.name);
            block.push_str(&format!("  {property}: {union};\n"));
        }
    }

    for rel in &describe.child_relationships {
        match classify(rel, known, allow_list) {
            ChildEmission::Collection { property, child } => {
                block.push_str(&collection_line(&property, &child));
            }
            ChildEmission::UnmappedCollection { property, child } => {
                block.push_str(&collection_line(&property, &child));
                unmapped.insert(child);
            }
            ChildEmission::Junction { sides, child } => {
                for side in &sides {
                    block.push_str(&collection_line(side, &child));
                }
            }
            ChildEmission::Bare { child, stub_needed } => {
                block.push_str(&format!("  {child}: {child};\n"));
                if stub_needed {
                    unmapped.insert(child);
                }
            }
            ChildEmission::None => {}
        }
    }

    block.push_str("}\n");
    block
}

fn collection_line(property: &str, child: &str) -> String {
    format!("  {property}: ChildRecords<\"{child}\", {child}>;\n")
}
