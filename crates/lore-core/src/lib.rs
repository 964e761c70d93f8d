//! # lore-core — Foundational Types for the Lore Schema Tooling
//!
//! Defines the vocabulary shared by the schema and CLI crates: which kinds
//! of world-building documents exist, where their schemas and reference
//! examples live, and the fixed list of example/schema pairs checked by
//! `validate-schemas`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lore-*` crates (this is the leaf of the DAG).
//! - No I/O. Paths are plain data; resolving them is the caller's job.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod kind;
pub mod pair;

pub use kind::{DocumentKind, DOCUMENT_KIND_COUNT};
pub use pair::{default_pairs, ValidationPair, EXAMPLES_DIR, SCHEMAS_DIR};
