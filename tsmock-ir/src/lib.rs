//! Intermediate representation types for the tsmock generator.
//!
//! This crate holds the data model shared by the resolver adapters and the
//! generation core.
//!
//! # Architecture
//!
//! ```text
//! declaration index (JSON) → resolver → tsmock-ir (Declaration, TypeShape) → codegen
//! ```
//!
//! The structural type ([`TypeShape`]) is opaque to the generation core,
//! which only ever asks it for the enums it references.

mod declaration;
mod import;
mod shape;

pub use declaration::Declaration;
pub use import::ImportRequirement;
pub use shape::{EnumMember, EnumRef, Field, TypeShape};
