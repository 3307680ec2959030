//! Core types and collaborators for the sobtype generator.
//!
//! This crate provides the describe data model, the schema source and
//! output sink seams, and naming utilities used across the sobtype
//! workspace.

mod describe;
mod field_type;
mod naming;
mod sink;
mod source;

// Describe data model
pub use describe::{ChildRelationship, FieldDescribe, SObjectDescribe};
pub use field_type::FieldType;
// Naming utilities
pub use naming::file_stem;
// Collaborator seams
pub use sink::{FsSink, OutputSink};
pub use source::{DirSource, SchemaSource};
