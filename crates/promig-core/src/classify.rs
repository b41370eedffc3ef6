//! Tag-to-noteType classification.
//!
//! Schema v1 labelled notes with free-form tags; v2 replaces them with a
//! fixed [`NoteType`]. Classification is a priority-ordered scan of
//! [`CLASSIFICATION_RULES`]: the first rule whose trigger set intersects the
//! note's tags wins. Keeping the rules in one const slice keeps the priority
//! order auditable and testable in isolation.

use crate::models::NoteType;

/// Trigger tag sets in priority order. Matching is case-insensitive, so the
/// trigger tags are stored lowercase.
pub const CLASSIFICATION_RULES: &[(&[&str], NoteType)] = &[
    (&["ai", "joule", "prompts"], NoteType::AiPrompt),
    (&["code"], NoteType::Code),
    (&["documentation", "platform"], NoteType::Documentation),
];

/// Derive a note's v2 type from its v1 tags.
///
/// Empty tags (or none at all) classify as [`NoteType::Note`].
pub fn derive_note_type<S: AsRef<str>>(tags: &[S]) -> NoteType {
    if tags.is_empty() {
        return NoteType::Note;
    }

    let lowered: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();

    for (triggers, note_type) in CLASSIFICATION_RULES {
        if lowered.iter().any(|tag| triggers.contains(&tag.as_str())) {
            return *note_type;
        }
    }

    NoteType::Note
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_tags_classify_as_ai_prompt() {
        for tag in ["ai", "joule", "prompts"] {
            assert_eq!(derive_note_type(&[tag]), NoteType::AiPrompt, "tag {tag}");
        }
    }

    #[test]
    fn test_ai_tags_any_case() {
        assert_eq!(derive_note_type(&["AI"]), NoteType::AiPrompt);
        assert_eq!(derive_note_type(&["Joule"]), NoteType::AiPrompt);
        assert_eq!(derive_note_type(&["PROMPTS"]), NoteType::AiPrompt);
    }

    #[test]
    fn test_code_tag() {
        assert_eq!(derive_note_type(&["Code"]), NoteType::Code);
    }

    #[test]
    fn test_documentation_tags() {
        assert_eq!(
            derive_note_type(&["documentation", "platform"]),
            NoteType::Documentation
        );
        assert_eq!(derive_note_type(&["platform"]), NoteType::Documentation);
    }

    #[test]
    fn test_empty_tags_default_to_note() {
        let empty: [&str; 0] = [];
        assert_eq!(derive_note_type(&empty), NoteType::Note);
    }

    #[test]
    fn test_unknown_tags_default_to_note() {
        assert_eq!(derive_note_type(&["favorites", "misc"]), NoteType::Note);
    }

    #[test]
    fn test_ai_beats_code() {
        // Priority order: an AI tag wins even when a code tag is also present.
        assert_eq!(derive_note_type(&["code", "ai"]), NoteType::AiPrompt);
    }

    #[test]
    fn test_code_beats_documentation() {
        assert_eq!(derive_note_type(&["documentation", "code"]), NoteType::Code);
    }
}
