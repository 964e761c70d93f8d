//! # Document Validation
//!
//! Validates example documents against JSON Schema definitions.
//!
//! ## Failure Classification
//!
//! Every failure falls into exactly one [`FailureKind`], and the first
//! applicable one wins. Checks run in this order:
//!
//! 1. read and parse the schema,
//! 2. read and parse the example,
//! 3. compile the schema,
//! 4. validate the example.
//!
//! Steps 1–3 yield [`FailureKind::ParseError`]; step 4 yields
//! [`FailureKind::SchemaViolation`].
//!
//! ## Schema Resolution
//!
//! The draft is taken from each schema's `$schema` keyword. Cross-schema
//! `$ref`s such as `common.schema.json#/definitions/entity_id` are resolved
//! by loading the file of that name from the referencing schema's
//! directory, whatever URI prefix the reference carries. Internal
//! `#/definitions/<name>` references are resolved by the jsonschema crate
//! natively.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, Validator};
use lore_core::ValidationPair;
use serde_json::Value;
use thiserror::Error;

use crate::advisory::{missing_recommended_fields, Advisory};

/// Resolves `$ref` URIs to files next to the schema being compiled.
///
/// Only the last path segment of the URI is used, so
/// `https://schemas.lore.local/common.schema.json` and a bare
/// `common.schema.json` land on the same file. Unresolvable references
/// are errors; nothing is fetched over the network.
struct SiblingSchemaRetriever {
    base_dir: PathBuf,
}

impl Retrieve for SiblingSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let without_fragment = uri_str.split('#').next().unwrap_or(uri_str);
        let filename = without_fragment
            .rsplit('/')
            .next()
            .unwrap_or(without_fragment);

        if filename.is_empty() {
            return Err(format!("cannot resolve $ref '{uri_str}' to a file").into());
        }

        let path = self.base_dir.join(filename);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            format!(
                "cannot resolve $ref '{uri_str}' via {}: {e}",
                path.display()
            )
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Which half of a pair a load failure concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    /// The JSON Schema.
    Schema,
    /// The example instance.
    Example,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => f.write_str("schema"),
            Self::Example => f.write_str("example"),
        }
    }
}

/// Coarse classification of a failed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A file was missing, unreadable, not JSON, or not a valid schema.
    ParseError,
    /// Both files loaded but the example breaks the schema.
    SchemaViolation,
}

/// Error produced while validating one pair.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The file could not be read.
    #[error("cannot read {role} {path}: {source}")]
    Read {
        /// Which document failed.
        role: DocumentRole,
        /// Path as configured.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not well-formed JSON.
    #[error("invalid JSON in {role} {path}: {source}")]
    Parse {
        /// Which document failed.
        role: DocumentRole,
        /// Path as configured.
        path: String,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The schema parsed but could not be compiled into a validator.
    #[error("invalid schema {path}: {reason}")]
    InvalidSchema {
        /// Schema path as configured.
        path: String,
        /// Compiler message.
        reason: String,
    },

    /// The example did not conform to the schema.
    #[error("{}", .violations.summary())]
    ValidationFailed {
        /// Every violation found, in the order the validator reported them.
        violations: ValidationViolations,
    },
}

impl ValidationError {
    /// Classify this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Read { .. } | Self::Parse { .. } | Self::InvalidSchema { .. } => {
                FailureKind::ParseError
            }
            Self::ValidationFailed { .. } => FailureKind::SchemaViolation,
        }
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// One-line form: the first violation, plus a count of the rest.
    pub fn summary(&self) -> String {
        match self.violations.split_first() {
            None => "no violations".to_string(),
            Some((first, [])) => first.to_string(),
            Some((first, rest)) => format!("{first} (+{} more)", rest.len()),
        }
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {v}")?;
        }
        Ok(())
    }
}

/// Outcome of validating one [`ValidationPair`].
#[derive(Debug)]
pub struct ValidationResult {
    /// The pair that was checked.
    pub pair: ValidationPair,
    /// `None` on success.
    pub error: Option<ValidationError>,
    /// Recommended-field advisories; only populated on success.
    pub advisories: Vec<Advisory>,
}

impl ValidationResult {
    /// Whether the example satisfied its schema.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Failure classification, if the pair failed.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.error.as_ref().map(ValidationError::kind)
    }

    /// Human-readable failure reason, if the pair failed.
    pub fn reason(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Validates example documents against schemas, resolving relative paths
/// against a repository root.
#[derive(Debug, Clone)]
pub struct DocumentValidator {
    root: PathBuf,
}

impl DocumentValidator {
    /// Create a validator rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Validate one configured pair, capturing the outcome.
    ///
    /// Never fails: every error is folded into the returned
    /// [`ValidationResult`].
    pub fn validate_pair(&self, pair: &ValidationPair) -> ValidationResult {
        match self.validate_paths(&pair.example, &pair.schema) {
            Ok(advisories) => ValidationResult {
                pair: pair.clone(),
                error: None,
                advisories,
            },
            Err(e) => ValidationResult {
                pair: pair.clone(),
                error: Some(e),
                advisories: Vec::new(),
            },
        }
    }

    /// Validate the example at `example` against the schema at `schema`.
    ///
    /// Returns the recommended-field advisories for the example on success.
    ///
    /// # Errors
    ///
    /// The first applicable of [`ValidationError::Read`],
    /// [`ValidationError::Parse`], [`ValidationError::InvalidSchema`] or
    /// [`ValidationError::ValidationFailed`], checked in the order listed in
    /// the module documentation.
    pub fn validate_paths(
        &self,
        example: &Path,
        schema: &Path,
    ) -> Result<Vec<Advisory>, ValidationError> {
        let schema_value = self.load(schema, DocumentRole::Schema)?;
        let instance = self.load(example, DocumentRole::Example)?;

        let validator = self.build_validator(&schema_value, schema)?;
        check_instance(&validator, &instance)?;

        Ok(missing_recommended_fields(&instance))
    }

    /// Read and parse a JSON document.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Read`] or [`ValidationError::Parse`], reporting
    /// `path` as given rather than the root-joined form.
    pub fn load(&self, path: &Path, role: DocumentRole) -> Result<Value, ValidationError> {
        let resolved = self.root.join(path);
        let content =
            std::fs::read_to_string(&resolved).map_err(|source| ValidationError::Read {
                role,
                path: path.display().to_string(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| ValidationError::Parse {
            role,
            path: path.display().to_string(),
            source,
        })
    }

    /// Compile `schema_value`, loaded from `schema_path`, into a validator.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidSchema`] if the schema is not a valid JSON
    /// Schema or one of its `$ref`s cannot be resolved.
    pub fn build_validator(
        &self,
        schema_value: &Value,
        schema_path: &Path,
    ) -> Result<Validator, ValidationError> {
        let base_dir = self
            .root
            .join(schema_path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());

        let mut opts = jsonschema::options();
        opts.with_retriever(SiblingSchemaRetriever { base_dir });
        // `format` is an annotation only, whatever the draft.
        opts.should_validate_formats(false);

        opts.build(schema_value)
            .map_err(|e| ValidationError::InvalidSchema {
                path: schema_path.display().to_string(),
                reason: e.to_string(),
            })
    }
}

fn check_instance(validator: &Validator, instance: &Value) -> Result<(), ValidationError> {
    let violations: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::ValidationFailed {
            violations: ValidationViolations { violations },
        })
    }
}
