//! # Recommended-Field Advisories
//!
//! Schemas keep `schema_version`, `tags` and `status` optional so that
//! drafts validate, but finished documents are expected to carry them.
//! These checks run only after a document has passed validation and never
//! turn a pass into a failure.

use serde_json::Value;

/// A recommended field and where it may live.
#[derive(Debug, Clone)]
pub struct RecommendedField {
    /// Top-level key.
    pub name: &'static str,
    /// Alternative location as a JSON Pointer, if the field may also be
    /// nested.
    pub alternative: Option<&'static str>,
}

/// Fields every finished document should carry.
pub const RECOMMENDED_FIELDS: &[RecommendedField] = &[
    RecommendedField {
        name: "schema_version",
        alternative: None,
    },
    RecommendedField {
        name: "tags",
        alternative: None,
    },
    RecommendedField {
        name: "status",
        alternative: Some("/metadata/status"),
    },
];

/// A non-fatal finding about a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// The recommended field that is missing.
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Report every recommended field missing from `document`.
///
/// Non-object documents yield no advisories.
pub fn missing_recommended_fields(document: &Value) -> Vec<Advisory> {
    let Some(object) = document.as_object() else {
        return Vec::new();
    };

    RECOMMENDED_FIELDS
        .iter()
        .filter(|field| {
            let nested = field
                .alternative
                .and_then(|pointer| document.pointer(pointer))
                .is_some();
            !object.contains_key(field.name) && !nested
        })
        .map(|field| Advisory {
            field: field.name,
            message: match field.alternative {
                Some(pointer) => format!(
                    "missing recommended field: {} (top-level or {pointer})",
                    field.name
                ),
                None => format!("missing recommended field: {}", field.name),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_document_has_no_advisories() {
        let doc = json!({"schema_version": "1.0.0", "tags": [], "status": "canon"});
        assert!(missing_recommended_fields(&doc).is_empty());
    }

    #[test]
    fn nested_status_is_accepted() {
        let doc = json!({
            "schema_version": "1.0.0",
            "tags": ["noble"],
            "metadata": {"status": "draft"}
        });
        assert!(missing_recommended_fields(&doc).is_empty());
    }

    #[test]
    fn each_missing_field_reported_once() {
        let fields: Vec<&str> = missing_recommended_fields(&json!({"name": "Alice"}))
            .into_iter()
            .map(|a| a.field)
            .collect();
        assert_eq!(fields, ["schema_version", "tags", "status"]);
    }

    #[test]
    fn status_message_mentions_alternative() {
        let advisories = missing_recommended_fields(&json!({"schema_version": "1", "tags": []}));
        assert_eq!(advisories.len(), 1);
        assert!(advisories[0].message.contains("/metadata/status"));
    }

    #[test]
    fn non_object_document_is_skipped() {
        assert!(missing_recommended_fields(&json!(["a", "b"])).is_empty());
        assert!(missing_recommended_fields(&json!("text")).is_empty());
    }
}
