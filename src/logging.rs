//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while it runs, so events go to a log file
//! instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

/// Environment variable holding an `EnvFilter` directive, e.g. `coach=debug`.
pub const LOG_ENV: &str = "COACH_LOG";
pub const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "coach.log";

/// Default log file inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Build the filter: `COACH_LOG` wins over the configured level.
fn filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber writing to `file`.
///
/// Returns the path written to. Calling this twice keeps the first subscriber.
pub fn initialize(level: &str, file: &Path) -> Result<PathBuf> {
	if let Some(parent) = file.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let writer = OpenOptions::new()
		.create(true)
		.append(true)
		.open(file)
		.with_context(|| format!("failed to open log file {}", file.display()))?;

	let installed = tracing_subscriber::registry()
		.with(filter(level))
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(false)
				.with_target(true)
				.with_writer(Mutex::new(writer)),
		)
		.try_init();
	if installed.is_ok() {
		tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %file.display(), "logging initialised");
	}
	Ok(file.to_path_buf())
}
