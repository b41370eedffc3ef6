//! promig: migrate profile JSON documents to schema v2.
//!
//! Scans a directory for `profile-*.json` files and rewrites each one in
//! place. Per-file failures are reported and skipped; the run always covers
//! every discovered file and exits non-zero if any of them failed.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use promig_core::{
    defaults, discover_profiles, load_profile, migrate_document, migrate_profile_file, Clock,
    Result, SystemClock,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "promig")]
#[command(author, version, about = "Migrate profile documents to schema v2")]
struct Cli {
    /// Directory containing profile-*.json files
    #[arg(default_value = defaults::PROFILE_DIR)]
    dir: PathBuf,

    /// Parse and transform without writing anything back
    #[arg(long)]
    dry_run: bool,
}

/// Outcome of a run over one directory.
#[derive(Debug, Default)]
struct RunSummary {
    migrated: usize,
    failed: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli, &SystemClock) {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "migration run aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, clock: &dyn Clock) -> Result<RunSummary> {
    let started = Instant::now();
    let files = discover_profiles(&cli.dir)?;
    info!(
        count = files.len(),
        dir = %cli.dir.display(),
        dry_run = cli.dry_run,
        "found profile files"
    );

    let mut summary = RunSummary::default();
    for path in &files {
        let result = if cli.dry_run {
            load_profile(path).map(|mut doc| migrate_document(&mut doc, clock))
        } else {
            migrate_profile_file(path, clock)
        };

        match result {
            Ok(stats) => {
                info!(
                    file = %path.display(),
                    shortcut_count = stats.shortcut_count,
                    note_count = stats.note_count,
                    "migrated profile"
                );
                summary.migrated += 1;
            }
            Err(e) => {
                error!(file = %path.display(), error = %e, "failed to migrate profile");
                summary.failed += 1;
            }
        }
    }

    info!(
        migrated = summary.migrated,
        failed = summary.failed,
        duration_ms = started.elapsed().as_millis() as u64,
        "migration run complete"
    );
    Ok(summary)
}
