//! # Validation Pairs
//!
//! A [`ValidationPair`] ties one example document to the schema it claims
//! to satisfy. The set checked by `validate-schemas` is fixed at compile
//! time and returned by [`default_pairs`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::kind::DocumentKind;

/// Directory holding the schema files, relative to the repository root.
pub const SCHEMAS_DIR: &str = "docs/schemas";

/// Directory holding the reference examples, relative to the repository root.
pub const EXAMPLES_DIR: &str = "docs/schemas/examples";

/// One example document and the schema it is validated against.
///
/// Paths are kept exactly as configured (usually relative) so that
/// reports print them the way they were written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationPair {
    /// Display name, e.g. `"Mechanics Rule"`.
    pub name: String,
    /// Path to the example document.
    pub example: PathBuf,
    /// Path to the schema document.
    pub schema: PathBuf,
}

impl ValidationPair {
    /// Build an arbitrary pair.
    pub fn new(
        name: impl Into<String>,
        example: impl Into<PathBuf>,
        schema: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            example: example.into(),
            schema: schema.into(),
        }
    }

    /// The configured pair for a document kind.
    pub fn for_kind(kind: DocumentKind) -> Self {
        Self::new(
            kind.display_name(),
            format!("{EXAMPLES_DIR}/{}", kind.example_file()),
            format!("{SCHEMAS_DIR}/{}", kind.schema_file()),
        )
    }

    /// The example path, joined onto `root` when relative.
    pub fn example_under(&self, root: &Path) -> PathBuf {
        root.join(&self.example)
    }

    /// The schema path, joined onto `root` when relative.
    pub fn schema_under(&self, root: &Path) -> PathBuf {
        root.join(&self.schema)
    }
}

/// The fixed list of pairs, one per [`DocumentKind`], in reporting order.
pub fn default_pairs() -> Vec<ValidationPair> {
    DocumentKind::all_kinds()
        .iter()
        .copied()
        .map(ValidationPair::for_kind)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairs_order() {
        let names: Vec<String> = default_pairs().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Character", "Location", "Faction", "Mechanics Rule", "Story"]
        );
    }

    #[test]
    fn test_default_pair_paths() {
        let pairs = default_pairs();
        assert_eq!(
            pairs[0].example,
            PathBuf::from("docs/schemas/examples/character_example.json")
        );
        assert_eq!(
            pairs[0].schema,
            PathBuf::from("docs/schemas/character.schema.json")
        );
        assert_eq!(
            pairs[3].example,
            PathBuf::from("docs/schemas/examples/mechanics_example.json")
        );
        assert_eq!(
            pairs[3].schema,
            PathBuf::from("docs/schemas/mechanics_rule.schema.json")
        );
    }

    #[test]
    fn test_under_root_joins_relative() {
        let pair = ValidationPair::for_kind(DocumentKind::Story);
        let root = Path::new("/srv/lore");
        assert_eq!(
            pair.example_under(root),
            PathBuf::from("/srv/lore/docs/schemas/examples/story_example.json")
        );
        assert_eq!(
            pair.schema_under(root),
            PathBuf::from("/srv/lore/docs/schemas/story.schema.json")
        );
    }

    #[test]
    fn test_under_root_keeps_absolute() {
        let pair = ValidationPair::new("abs", "/tmp/a.json", "/tmp/a.schema.json");
        assert_eq!(
            pair.example_under(Path::new("/srv/lore")),
            PathBuf::from("/tmp/a.json")
        );
    }
}
