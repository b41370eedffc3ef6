//! The v1 -> v2 profile document migration.
//!
//! Each operation is a pure structural transform over preserve_order JSON
//! maps; nothing here touches the filesystem except
//! [`migrate_profile_file`], which composes the store and the transform.

use std::path::Path;

use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::classify::derive_note_type;
use crate::clock::Clock;
use crate::defaults;
use crate::error::Result;
use crate::models::{JsonMap, NoteType};
use crate::store;

/// Per-document counts, reported by the CLI after each file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationStats {
    /// Shortcuts migrated across `globalShortcuts` and `shortcuts`.
    pub shortcut_count: usize,
    /// Notes migrated.
    pub note_count: usize,
}

/// Copy a shortcut, dropping its `tags` field. All other fields are kept
/// verbatim and in original order.
pub fn migrate_shortcut(shortcut: &JsonMap) -> JsonMap {
    shortcut
        .iter()
        .filter(|(key, _)| key.as_str() != "tags")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Rebuild a note in the v2 shape.
///
/// The old `tags` array is consumed by classification and dropped; missing
/// fields take the defaults from [`crate::defaults`], with `id` and
/// `timestamp` synthesized from the injected clock. `aiConfig` is attached
/// iff the derived type is `ai-prompt`.
pub fn migrate_note(note: &JsonMap, clock: &dyn Clock) -> JsonMap {
    let tags = tag_strings(note.get("tags"));
    let note_type = derive_note_type(&tags);
    trace!(note_type = %note_type, "classified note");

    // Per-field default table for preserved fields, in output order.
    let head: [(&str, Value); 3] = [
        (
            "id",
            Value::String(format!("{}{}", defaults::NOTE_ID_PREFIX, clock.now_secs())),
        ),
        ("title", Value::String(defaults::NOTE_TITLE.to_string())),
        ("content", Value::String(defaults::NOTE_CONTENT.to_string())),
    ];
    let tail: [(&str, Value); 2] = [
        ("icon", Value::String(defaults::NOTE_ICON.to_string())),
        ("timestamp", Value::from(clock.now_millis())),
    ];

    let mut migrated = JsonMap::new();
    for (key, default) in head {
        migrated.insert(key.to_string(), note.get(key).cloned().unwrap_or(default));
    }
    migrated.insert("noteType".to_string(), json!(note_type));
    for (key, default) in tail {
        migrated.insert(key.to_string(), note.get(key).cloned().unwrap_or(default));
    }

    if note_type == NoteType::AiPrompt {
        migrated.insert(
            "aiConfig".to_string(),
            json!({ "defaultModel": defaults::AI_DEFAULT_MODEL }),
        );
    }

    migrated
}

/// Migrate a whole profile document in place.
///
/// Stamps the target version and migration date, migrates the
/// `globalShortcuts`, `shortcuts` and `notes` arrays element-wise when
/// present (order preserved), and leaves every other top-level field
/// untouched. Non-object array entries pass through as-is.
pub fn migrate_document(doc: &mut JsonMap, clock: &dyn Clock) -> MigrationStats {
    let mut stats = MigrationStats::default();

    doc.insert(
        "version".to_string(),
        Value::String(defaults::TARGET_VERSION.to_string()),
    );
    doc.insert(
        "lastUpdated".to_string(),
        Value::String(defaults::MIGRATION_DATE.to_string()),
    );

    for key in ["globalShortcuts", "shortcuts"] {
        let migrated = match doc.get(key) {
            Some(Value::Array(items)) => {
                stats.shortcut_count += items.len();
                Some(
                    items
                        .iter()
                        .map(|item| match item.as_object() {
                            Some(obj) => Value::Object(migrate_shortcut(obj)),
                            None => item.clone(),
                        })
                        .collect::<Vec<_>>(),
                )
            }
            _ => None,
        };
        if let Some(items) = migrated {
            doc.insert(key.to_string(), Value::Array(items));
        }
    }

    let migrated_notes = match doc.get("notes") {
        Some(Value::Array(notes)) => {
            stats.note_count += notes.len();
            Some(
                notes
                    .iter()
                    .map(|note| match note.as_object() {
                        Some(obj) => Value::Object(migrate_note(obj, clock)),
                        None => note.clone(),
                    })
                    .collect::<Vec<_>>(),
            )
        }
        _ => None,
    };
    if let Some(notes) = migrated_notes {
        doc.insert("notes".to_string(), Value::Array(notes));
    }

    debug!(
        shortcut_count = stats.shortcut_count,
        note_count = stats.note_count,
        "document migrated"
    );
    stats
}

/// Load, migrate, and write back a single profile file.
///
/// The document is fully transformed in memory before the destination is
/// replaced, so a successful run never leaves a half-migrated file.
pub fn migrate_profile_file(path: &Path, clock: &dyn Clock) -> Result<MigrationStats> {
    let mut doc = store::load_profile(path)?;
    let stats = migrate_document(&mut doc, clock);
    store::save_profile(path, &doc)?;
    Ok(stats)
}

fn tag_strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
