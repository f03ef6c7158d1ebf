//! Field descriptors — what the caller is validating and how it classifies.

use serde::{Deserialize, Serialize};

/// The closed set of field semantics the prompt builder understands.
///
/// Callers may supply the tag explicitly (`"fieldKind": "phone"`); requests
/// without it fall back to [`FieldKind::classify`] on the field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Phone,
    Generic,
}

impl FieldKind {
    /// Classifies a human-entered field label. Case-insensitive substring
    /// match: "kenyan" or "phone" anywhere in the name means a phone field.
    ///
    /// Known limitation of this fallback: any label containing "phone"
    /// (e.g. "Telephone") classifies as phone. Callers that need exact
    /// semantics send the explicit `fieldKind` tag instead.
    pub fn classify(field_name: &str) -> Self {
        let name = field_name.to_lowercase();
        if name.contains("kenyan") || name.contains("phone") {
            FieldKind::Phone
        } else {
            FieldKind::Generic
        }
    }

    /// The fallback example substituted when the model omits one.
    pub fn default_example(self) -> &'static str {
        match self {
            FieldKind::Phone => "0712345678",
            FieldKind::Generic => "user@example.com",
        }
    }
}

/// Request body for `POST /api/validation`.
///
/// `fieldName`/`userInput` match the form client's wire shape; `fieldKind`
/// is the optional explicit classification tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub field_name: String,
    #[serde(default)]
    pub user_input: Option<String>,
    #[serde(default)]
    pub field_kind: Option<FieldKind>,
}

impl ValidationRequest {
    /// Resolves the field kind: the explicit tag wins, otherwise the name
    /// heuristic.
    pub fn resolve_kind(&self) -> FieldKind {
        self.field_kind
            .unwrap_or_else(|| FieldKind::classify(&self.field_name))
    }

    /// The trimmed user input, or `None` when the field is unfilled
    /// (input absent, empty, or whitespace-only).
    pub fn filled_input(&self) -> Option<&str> {
        self.user_input
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// The structured feedback returned to the caller. Both fields are
/// guaranteed non-empty by the decoder's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub tooltip: String,
    pub example: String,
}
