//! TypeScript definition generator for sObject describes.
//!
//! Translates describe documents fetched from a [`SchemaSource`] into
//! TypeScript interface declarations: scalar field typing, polymorphic
//! reference typing constrained to the sObjects in scope, and child
//! relationship collections, with opaque stubs for every sObject that is
//! referenced by name but not generated in the run.
//!
//! # Usage
//!
//! ```ignore
//! use sobtype_codegen::Generator;
//! use sobtype_core::{DirSource, FsSink};
//!
//! let source = DirSource::new("describes");
//! let generator = Generator::new(&source);
//! generator.generate_batch(&names, &allow_list, Path::new("src/generated"), &FsSink)?;
//! ```
//!
//! [`SchemaSource`]: sobtype_core::SchemaSource

mod batch;
mod entity;
mod generator;
mod preamble;
mod reference;
mod relationship;
mod type_mapper;

pub use batch::assemble;
pub use entity::build_entity_block;
pub use generator::{BATCH_FILE, Generator};
pub use preamble::{IMPORT_LINES, S_OBJECT_FILE, S_OBJECT_TS, SCALARS_FILE, SCALARS_TS};
pub use reference::resolve_reference;
pub use relationship::{ChildEmission, classify};
pub use type_mapper::{ScalarType, map_scalar};
