//! # Validation Runner
//!
//! Runs the fixed example/schema pairs in order and writes the report:
//!
//! ```text
//! Validating examples against schemas...
//! ==================================================
//! ✓ docs/schemas/examples/character_example.json validates against docs/schemas/character.schema.json
//! ✗ docs/schemas/examples/story_example.json failed validation: /title: 7 is not of type "string"
//! ✗ Error validating docs/schemas/examples/faction_example.json: cannot read example ...
//! ==================================================
//! ✗ Some examples failed validation
//! ```
//!
//! A failing pair never stops the run; every pair is attempted exactly once.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use lore_core::ValidationPair;
use lore_schema::{DocumentValidator, FailureKind, ValidationError, ValidationResult};

/// First line of the report.
pub const BANNER: &str = "Validating examples against schemas...";

/// Width of the `=` rule around the per-pair lines.
pub const RULE_WIDTH: usize = 50;

const PASS: &str = "✓";
const FAIL: &str = "✗";

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pairs attempted.
    pub total: usize,
    /// Pairs that validated.
    pub passed: usize,
}

impl RunSummary {
    /// Pairs that failed for any reason.
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// True iff every pair validated.
    pub fn all_valid(&self) -> bool {
        self.passed == self.total
    }

    /// Process exit code: 0 when all pairs validated, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_valid() {
            0
        } else {
            1
        }
    }
}

/// Render the one-line status for a result.
pub fn status_line(result: &ValidationResult) -> String {
    let example = result.pair.example.display();
    match &result.error {
        None => format!(
            "{PASS} {example} validates against {}",
            result.pair.schema.display()
        ),
        Some(e) => match e.kind() {
            FailureKind::SchemaViolation => format!("{FAIL} {example} failed validation: {e}"),
            FailureKind::ParseError => format!("{FAIL} Error validating {example}: {e}"),
        },
    }
}

/// Validate one pair and write its status line to `out`.
///
/// # Errors
///
/// Only if writing to `out` fails; validation failures are part of the
/// returned [`ValidationResult`].
pub fn validate_one<W: Write>(
    validator: &DocumentValidator,
    pair: &ValidationPair,
    out: &mut W,
) -> Result<ValidationResult> {
    let result = validator.validate_pair(pair);
    log_result(&result);
    writeln!(out, "{}", status_line(&result)).context("failed to write status line")?;
    Ok(result)
}

/// Validate every pair in order against files under `root`, writing the
/// banner, one line per pair and the summary to `out`.
///
/// # Errors
///
/// Only if writing to `out` fails.
pub fn run_all<W: Write>(
    pairs: &[ValidationPair],
    root: &Path,
    out: &mut W,
) -> Result<RunSummary> {
    let validator = DocumentValidator::new(root);
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{BANNER}").context("failed to write banner")?;
    writeln!(out, "{rule}").context("failed to write banner")?;

    let mut summary = RunSummary::default();
    for pair in pairs {
        let result = validate_one(&validator, pair, out)?;
        summary.total += 1;
        if result.is_success() {
            summary.passed += 1;
        }
    }

    let verdict = if summary.all_valid() {
        format!("{PASS} All examples validated successfully!")
    } else {
        format!("{FAIL} Some examples failed validation")
    };
    writeln!(out, "{rule}\n{verdict}").context("failed to write summary")?;

    tracing::info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed(),
        "validation run complete"
    );

    Ok(summary)
}

/// Run the fixed pair list against `repo_root`, reporting to stdout.
///
/// Returns the process exit code.
pub fn run_validate(repo_root: &Path) -> Result<u8> {
    let pairs = lore_core::default_pairs();
    tracing::debug!(
        pair_count = pairs.len(),
        repo_root = %repo_root.display(),
        "running fixed validation list"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run_all(&pairs, repo_root, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(summary.exit_code())
}

fn log_result(result: &ValidationResult) {
    let name = result.pair.name.as_str();
    match &result.error {
        None => {
            tracing::debug!(pair = name, "example validated");
            for advisory in &result.advisories {
                tracing::warn!(
                    pair = name,
                    example = %result.pair.example.display(),
                    field = advisory.field,
                    "{}",
                    advisory.message
                );
            }
        }
        Some(ValidationError::ValidationFailed { violations }) => {
            for v in violations.violations() {
                tracing::info!(
                    pair = name,
                    instance_path = %v.instance_path,
                    schema_path = %v.schema_path,
                    "{}",
                    v.message
                );
            }
        }
        Some(e) => {
            tracing::info!(pair = name, error = %e, "example could not be checked");
        }
    }
}
