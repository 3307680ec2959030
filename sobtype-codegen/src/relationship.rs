//! Child relationship classification.
//!
//! Describe relationship metadata is irregular: some relationships carry
//! no traversable name, junction objects carry two target sides and no
//! name at all. The classifier normalizes every case that carries enough
//! information into a collection property, and degrades the rest to no
//! emission.

use indexmap::IndexSet;
use sobtype_core::ChildRelationship;

/// How one child relationship is represented in the generated interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildEmission {
    /// Named relationship to an sObject generated in this run: one
    /// collection property named after the relationship.
    Collection { property: String, child: String },
    /// Named relationship to an sObject outside the run: the same
    /// collection property, plus a stub declaration for the child.
    UnmappedCollection { property: String, child: String },
    /// Anonymous junction object: one collection property per side.
    Junction { sides: Vec<String>, child: String },
    /// Allow-listed anonymous child, emitted as a bare singular link.
    Bare { child: String, stub_needed: bool },
    /// Not enough information to type the relationship.
    None,
}

/// Classify a child relationship. Variants are checked in precedence
/// order; the first match wins.
pub fn classify(
    rel: &ChildRelationship,
    known: Option<&IndexSet<String>>,
    allow_list: &[String],
) -> ChildEmission {
    let Some(known) = known else {
        // Single mode: relationship typing degrades to no emission.
        return ChildEmission::None;
    };
    if let Some(property) = &rel.relationship_name {
        if known.contains(&rel.child_s_object) {
            return ChildEmission::Collection {
                property: property.clone(),
                child: rel.child_s_object.clone(),
            };
        }
        return ChildEmission::UnmappedCollection {
            property: property.clone(),
            child: rel.child_s_object.clone(),
        };
    }
    if !rel.junction_id_list_names.is_empty() {
        if known.contains(&rel.child_s_object) {
            return ChildEmission::Junction {
                sides: rel.junction_id_list_names.clone(),
                child: rel.child_s_object.clone(),
            };
        }
        return ChildEmission::None;
    }
    // The first allow-list entry is skipped, a quirk kept for output
    // compatibility with the previous generator.
    match allow_list.iter().position(|entry| entry == &rel.child_s_object) {
        Some(index) if index > 0 => ChildEmission::Bare {
            child: rel.child_s_object.clone(),
            stub_needed: !known.contains(&rel.child_s_object),
        },
        _ => ChildEmission::None,
    }
}
