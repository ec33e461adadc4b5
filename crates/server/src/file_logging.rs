//! Console logging plus optional daily JSON log files.
//!
//! - `RUST_LOG`: level for the workspace crates (default `info`)
//! - `GENZ_FILE_LOGGING`: `true` or `1` turns on file output
//! - `GENZ_LOG_DIR`: where files go (default `{asset_dir}/logs`)
//! - `GENZ_LOG_MAX_FILES`: daily files kept (default 7)

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use utils::assets::asset_dir;

const LOG_FILE_PREFIX: &str = "genz-smart.log";
const DEFAULT_KEEP_FILES: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    /// `Some` when file output is enabled.
    pub file_dir: Option<PathBuf>,
    pub keep_files: usize,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup("GENZ_FILE_LOGGING").is_some_and(|v| v == "true" || v == "1");

        Self {
            level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            file_dir: enabled.then(|| {
                lookup("GENZ_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| asset_dir().join("logs"))
            }),
            keep_files: lookup("GENZ_LOG_MAX_FILES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_KEEP_FILES),
        }
    }
}

/// Filter directive enabling `level` for the workspace crates and HTTP tracing.
pub fn filter_directive(level: &str) -> String {
    format!(
        "warn,server={level},db={level},utils={level},tower_http={level}",
        level = level
    )
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(filter_directive(level)).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{}': {}; using info", level, e);
        EnvFilter::new(filter_directive("info"))
    })
}

/// Install the global subscriber.
///
/// The returned guard flushes buffered file output when dropped, so `main`
/// holds it until exit. `None` when file output is off or its directory
/// cannot be created.
pub fn init_logging(settings: &LogSettings) -> Option<WorkerGuard> {
    let file_dir = settings
        .file_dir
        .as_deref()
        .filter(|dir| match std::fs::create_dir_all(dir) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Failed to create log directory {:?}: {}", dir, e);
                false
            }
        });

    let (file_layer, guard) = match file_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(build_filter(&settings.level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(build_filter(&settings.level)))
        .with(file_layer)
        .init();

    if let Some(dir) = file_dir {
        tracing::info!(log_dir = ?dir, keep = settings.keep_files, "File logging enabled");
        let dir = dir.to_path_buf();
        let keep = settings.keep_files;
        std::thread::spawn(move || prune_rotated_logs(&dir, keep));
    }

    guard
}

/// Delete all but the `keep` most recent daily files.
///
/// Rotated files are named `<prefix>.YYYY-MM-DD`, so name order is date order.
fn prune_rotated_logs(dir: &Path, keep: usize) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    let mut rotated: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        .collect();
    rotated.sort();

    let excess = rotated.len().saturating_sub(keep);
    for path in rotated.into_iter().take(excess) {
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!("Removed old log file: {:?}", path),
            Err(e) => tracing::warn!("Failed to remove old log file {:?}: {}", path, e),
        }
    }
}
