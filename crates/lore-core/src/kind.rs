//! # Document Kinds
//!
//! The five categories of world-building document that carry a JSON
//! Schema and a reference example. The order of
//! [`DocumentKind::all_kinds`] is the order in which the examples are
//! validated and reported.

use serde::{Deserialize, Serialize};

/// A category of domain object described by its own schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// A person or creature in the setting.
    Character,
    /// A place on the atlas.
    Location,
    /// An organisation, house or movement.
    Faction,
    /// A game-mechanics rule.
    MechanicsRule,
    /// A story or scene collection.
    Story,
}

/// Total number of document kinds.
pub const DOCUMENT_KIND_COUNT: usize = 5;

impl DocumentKind {
    /// Returns every kind in reporting order.
    pub fn all_kinds() -> &'static [DocumentKind] {
        &[
            Self::Character,
            Self::Location,
            Self::Faction,
            Self::MechanicsRule,
            Self::Story,
        ]
    }

    /// Returns the snake_case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Location => "location",
            Self::Faction => "faction",
            Self::MechanicsRule => "mechanics_rule",
            Self::Story => "story",
        }
    }

    /// Human-readable name used in log output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Location => "Location",
            Self::Faction => "Faction",
            Self::MechanicsRule => "Mechanics Rule",
            Self::Story => "Story",
        }
    }

    /// Schema filename under [`SCHEMAS_DIR`](crate::SCHEMAS_DIR).
    pub fn schema_file(&self) -> &'static str {
        match self {
            Self::Character => "character.schema.json",
            Self::Location => "location.schema.json",
            Self::Faction => "faction.schema.json",
            Self::MechanicsRule => "mechanics_rule.schema.json",
            Self::Story => "story.schema.json",
        }
    }

    /// Example filename under [`EXAMPLES_DIR`](crate::EXAMPLES_DIR).
    ///
    /// Note the mechanics example drops the `_rule` suffix that its
    /// schema filename carries.
    pub fn example_file(&self) -> &'static str {
        match self {
            Self::Character => "character_example.json",
            Self::Location => "location_example.json",
            Self::Faction => "faction_example.json",
            Self::MechanicsRule => "mechanics_example.json",
            Self::Story => "story_example.json",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
