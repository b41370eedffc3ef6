//! Core data models for promig.
//!
//! The profile format is camelCase JSON produced by the browser extension;
//! passthrough fields are kept in document order, so all object handling
//! goes through serde_json's preserve_order map.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// JSON object type used throughout the migration.
///
/// With serde_json's `preserve_order` feature this is IndexMap-backed, so
/// iteration and re-serialization keep the original field order.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Fixed note classification replacing free-form tags in schema v2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteType {
    /// Plain note; the default when no classifying tag is present.
    Note,

    /// Code snippet.
    Code,

    /// Documentation or platform reference material.
    Documentation,

    /// AI prompt; carries an `aiConfig` block after migration.
    AiPrompt,
}

impl std::fmt::Display for NoteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::Code => write!(f, "code"),
            Self::Documentation => write!(f, "documentation"),
            Self::AiPrompt => write!(f, "ai-prompt"),
        }
    }
}

impl std::str::FromStr for NoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "note" => Ok(Self::Note),
            "code" => Ok(Self::Code),
            "documentation" => Ok(Self::Documentation),
            "ai-prompt" => Ok(Self::AiPrompt),
            _ => Err(format!("Invalid note type: {}", s)),
        }
    }
}

/// AI settings attached to migrated `ai-prompt` notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    pub default_model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            default_model: defaults::AI_DEFAULT_MODEL.to_string(),
        }
    }
}
