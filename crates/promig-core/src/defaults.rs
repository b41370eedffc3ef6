//! Centralized default constants for the promig migration.
//!
//! **This module is the single source of truth** for the fixed values the
//! v2 migration writes and for the per-field defaults applied to notes with
//! missing fields. Code must reference these constants instead of inlining
//! the values, so the migration contract stays auditable in one place.

// =============================================================================
// DOCUMENT METADATA
// =============================================================================

/// Schema version written to every migrated document.
pub const TARGET_VERSION: &str = "2.0";

/// `lastUpdated` value stamped on every migrated document.
/// The date the v2 schema shipped, not the wall clock at run time.
pub const MIGRATION_DATE: &str = "2026-01-13";

// =============================================================================
// NOTE FIELD DEFAULTS
// =============================================================================

/// Title for notes missing one.
pub const NOTE_TITLE: &str = "Untitled";

/// Content for notes missing one.
pub const NOTE_CONTENT: &str = "";

/// Icon index for notes missing one (stringly typed in the profile format).
pub const NOTE_ICON: &str = "0";

/// Prefix for synthesized note ids; the suffix is unix seconds from the
/// injected clock.
pub const NOTE_ID_PREFIX: &str = "note-";

// =============================================================================
// AI CONFIGURATION
// =============================================================================

/// `aiConfig.defaultModel` for every note classified as an AI prompt.
pub const AI_DEFAULT_MODEL: &str = "gpt-4-turbo";

// =============================================================================
// FILE DISCOVERY
// =============================================================================

/// Filename prefix of profile documents.
pub const PROFILE_PREFIX: &str = "profile-";

/// Filename suffix of profile documents.
pub const PROFILE_SUFFIX: &str = ".json";

/// Default directory the CLI scans when none is given.
pub const PROFILE_DIR: &str = "resources";
