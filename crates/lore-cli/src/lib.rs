//! # lore-cli — Schema Example Validation Command
//!
//! Provides the `validate-schemas` binary. Invoked without arguments it
//! checks every reference example under `docs/schemas/examples/` against
//! its schema, prints one status line per pair and exits `0` when all of
//! them pass, `1` otherwise.
//!
//! ```bash
//! validate-schemas
//! validate-schemas -vv --log-format json
//! validate-schemas --root /path/to/checkout
//! ```
//!
//! ## Crate Policy
//!
//! - The report goes to stdout; logs go to stderr.
//! - Validation logic lives in `lore-schema`; this crate only sequences
//!   and reports.

pub mod validate;

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Directory whose presence marks the repository root.
pub const REPO_ROOT_MARKER: &str = lore_core::SCHEMAS_DIR;

/// Output format for log events on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Walk up from `start` to find the repository root.
///
/// The root is the first ancestor (including `start` itself) that contains
/// `docs/schemas`.
pub fn resolve_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(REPO_ROOT_MARKER).is_dir())
        .map(Path::to_path_buf)
}
