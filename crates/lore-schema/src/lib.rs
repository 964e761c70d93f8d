//! # lore-schema — Example Document Validation
//!
//! Checks JSON example documents against the JSON Schemas under
//! `docs/schemas/`.
//!
//! ## Validation (`validate`)
//!
//! [`DocumentValidator`] reads a schema and an example, compiles the schema
//! with the `jsonschema` crate and collects every violation. Failures are
//! classified as [`FailureKind::ParseError`] (unreadable file, bad JSON,
//! invalid schema) or [`FailureKind::SchemaViolation`].
//!
//! ## Advisories (`advisory`)
//!
//! Non-fatal checks for recommended fields (`schema_version`, `tags`,
//! `status`) on documents that already passed validation.
//!
//! ## Crate Policy
//!
//! - Depends only on `lore-core` internally.
//! - Never touches the network: cross-schema `$ref`s resolve to sibling
//!   files on disk or fail.
//! - Nothing here prints; reporting belongs to the CLI.

pub mod advisory;
pub mod validate;

pub use advisory::{missing_recommended_fields, Advisory, RecommendedField, RECOMMENDED_FIELDS};
pub use validate::{
    DocumentRole, DocumentValidator, FailureKind, ValidationError, ValidationResult,
    ValidationViolations, Violation,
};
