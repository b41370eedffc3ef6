//! # promig-core
//!
//! Data model and migration logic for promig profile documents.
//!
//! This crate implements the v1 -> v2 profile schema migration: free-form
//! `tags` on shortcuts and notes are retired, notes gain a fixed `noteType`
//! classification derived from their old tags, and AI-prompt notes gain an
//! `aiConfig` block. The CLI in `promig-cli` drives it over a directory of
//! `profile-*.json` files.

pub mod classify;
pub mod clock;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod migrate;
pub mod models;
pub mod store;

// Re-export commonly used types at crate root
pub use classify::derive_note_type;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use migrate::{
    migrate_document, migrate_note, migrate_profile_file, migrate_shortcut, MigrationStats,
};
pub use models::{AiConfig, JsonMap, NoteType};
pub use store::{discover_profiles, load_profile, save_profile};
