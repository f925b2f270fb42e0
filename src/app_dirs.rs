//! Resolve configuration and data directories for `coach`.
//!
//! Environment overrides win; otherwise the platform locations provided by the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "coach";
const APPLICATION: &str = "coach";

pub const CONFIG_DIR_ENV: &str = "COACH_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "COACH_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for coach"))
}

/// Read a directory override. An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_is_ignored() {
		// SAFETY: no other test reads this variable
		unsafe { env::set_var("COACH_TEST_EMPTY_DIR", "") };
		assert_eq!(dir_from_env("COACH_TEST_EMPTY_DIR"), None);

		unsafe { env::set_var("COACH_TEST_EMPTY_DIR", "/tmp/coach") };
		assert_eq!(
			dir_from_env("COACH_TEST_EMPTY_DIR"),
			Some(PathBuf::from("/tmp/coach"))
		);
		unsafe { env::remove_var("COACH_TEST_EMPTY_DIR") };
	}
}
