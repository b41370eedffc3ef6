//! Structured logging schema for promig.
//!
//! Field name constants used for structured log events, so the core and
//! CLI report with consistent names.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | A file failed to migrate; the run continues |
//! | WARN  | Recoverable oddity (e.g. non-object entry skipped) |
//! | INFO  | Per-file completions, run summary |
//! | DEBUG | Per-document counts, dry-run decisions |
//! | TRACE | Per-note classification |

/// Path of the profile file being processed.
pub const FILE: &str = "file";

/// Number of notes migrated in a document.
pub const NOTE_COUNT: &str = "note_count";

/// Number of shortcuts migrated in a document (global + profile).
pub const SHORTCUT_COUNT: &str = "shortcut_count";

/// Derived note type for a single note.
pub const NOTE_TYPE: &str = "note_type";

/// Error message when a file fails.
pub const ERROR_MSG: &str = "error";

/// Wall-clock duration of the whole run in milliseconds.
pub const DURATION_MS: &str = "duration_ms";
