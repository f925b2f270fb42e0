use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use coach::passengers::{DEFAULT_MAX_PASSENGERS, DEFAULT_MIN_PASSENGERS};
use coach::ui::theme;
use coach::{FormDefaults, LocationCatalog, TravelTab, app_dirs, logging};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	ui: UiSection,
	form: FormSection,
	locations: LocationsSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	start_tab: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FormSection {
	from: Option<String>,
	to: Option<String>,
	passengers: Option<u32>,
	min_passengers: Option<u32>,
	max_passengers: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LocationsSection {
	file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ResolvedConfig {
	pub theme: String,
	pub start_tab: TravelTab,
	pub form: FormDefaults,
	pub locations_file: Option<PathBuf>,
	pub log_level: String,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  UI theme: {}", self.theme);
		println!("  Start tab: {}", self.start_tab);
		println!("  From: {}", or_empty(&self.form.from));
		println!("  To: {}", or_empty(&self.form.to));
		println!(
			"  Passengers: {} (allowed {}..={})",
			self.form.passengers, self.form.min_passengers, self.form.max_passengers
		);
		match &self.locations_file {
			Some(path) => println!("  Locations: {}", path.display()),
			None => println!("  Locations: (built-in)"),
		}
		println!("  Log level: {}", self.log_level);
		match &self.log_file {
			Some(path) => println!("  Log file: {}", path.display()),
			None => println!("  Log file: (data directory)"),
		}
	}

	/// Load the configured catalogue, or the bundled one.
	pub fn catalog(&self) -> Result<LocationCatalog> {
		match &self.locations_file {
			Some(path) => Ok(LocationCatalog::from_json_file(path)?),
			None => Ok(LocationCatalog::builtin()),
		}
	}

	/// Log file to write, falling back to the data directory.
	pub fn log_path(&self) -> Result<PathBuf> {
		match &self.log_file {
			Some(path) => Ok(path.clone()),
			None => logging::default_log_file(),
		}
	}
}

fn or_empty(value: &str) -> &str {
	if value.is_empty() { "(empty)" } else { value }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("coach")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".coach.toml"));
		files.push(current_dir.join("coach.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(tab) = cli.tab {
			self.ui.start_tab = Some(tab.as_str().to_string());
		}
		if let Some(from) = cli.from.clone() {
			self.form.from = Some(from);
		}
		if let Some(to) = cli.to.clone() {
			self.form.to = Some(to);
		}
		if let Some(value) = cli.passengers {
			self.form.passengers = Some(value);
		}
		if let Some(path) = cli.locations.clone() {
			self.locations.file = Some(path);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(path) = cli.log_file.clone() {
			self.logging.file = Some(path);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let theme = match self.ui.theme {
			Some(name) => {
				let name = name.trim().to_ascii_lowercase();
				ensure!(
					theme::by_name(&name).is_some(),
					"unknown theme '{name}' (available: {})",
					theme::names().collect::<Vec<_>>().join(", ")
				);
				name
			}
			None => "slate".to_string(),
		};

		let start_tab = match self.ui.start_tab {
			Some(key) => TravelTab::from_key(&key)
				.ok_or_else(|| anyhow!("unknown start tab '{}'", key.trim()))?,
			None => TravelTab::default(),
		};

		let min_passengers = self.form.min_passengers.unwrap_or(DEFAULT_MIN_PASSENGERS);
		let max_passengers = self.form.max_passengers.unwrap_or(DEFAULT_MAX_PASSENGERS);
		ensure!(min_passengers >= 1, "form.min_passengers must be at least 1");
		if min_passengers > max_passengers {
			bail!("form.min_passengers ({min_passengers}) exceeds form.max_passengers ({max_passengers})");
		}
		let passengers = self.form.passengers.unwrap_or(min_passengers);
		ensure!(
			(min_passengers..=max_passengers).contains(&passengers),
			"form.passengers ({passengers}) must be between {min_passengers} and {max_passengers}"
		);

		let locations_file = self
			.locations
			.file
			.map(absolute)
			.transpose()
			.context("failed to resolve locations file")?;

		let log_level = self
			.logging
			.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty())
			.unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string());

		Ok(ResolvedConfig {
			theme,
			start_tab,
			form: FormDefaults {
				from: self.form.from.unwrap_or_default().trim().to_string(),
				to: self.form.to.unwrap_or_default().trim().to_string(),
				passengers,
				min_passengers,
				max_passengers,
			},
			locations_file,
			log_level,
			log_file: self.logging.file,
		})
	}
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path);
	}
	Ok(env::current_dir()?.join(path))
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::{CommandFactory, FromArgMatches};
	use tempfile::tempdir;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["coach", "--no-config"];
		argv.extend_from_slice(args);
		let mut matches = CliArgs::command().get_matches_from(argv);
		CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
	}

	#[test]
	fn defaults_resolve_without_files() {
		let resolved = load(&cli(&[])).unwrap();
		assert_eq!(resolved.theme, "slate");
		assert_eq!(resolved.start_tab, TravelTab::Bus);
		assert_eq!(resolved.form, FormDefaults::default());
		assert!(resolved.locations_file.is_none());
	}

	#[test]
	fn config_file_values_are_applied() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("coach.toml");
		fs::write(
			&path,
			"[ui]\ntheme = \"light\"\nstart_tab = \"hotel\"\n\n[form]\nfrom = \"Hue\"\npassengers = 3\nmax_passengers = 9\n",
		)
		.unwrap();

		let resolved = load(&cli(&["--config", path.to_str().unwrap()])).unwrap();
		assert_eq!(resolved.theme, "light");
		assert_eq!(resolved.start_tab, TravelTab::Hotel);
		assert_eq!(resolved.form.from, "Hue");
		assert_eq!(resolved.form.passengers, 3);
		assert_eq!(resolved.form.max_passengers, 9);
	}

	#[test]
	fn cli_overrides_take_precedence() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("coach.toml");
		fs::write(&path, "[form]\nfrom = \"Hue\"\npassengers = 3\n").unwrap();

		let resolved = load(&cli(&[
			"--config",
			path.to_str().unwrap(),
			"--from",
			"Da Lat",
			"--passengers",
			"5",
		]))
		.unwrap();
		assert_eq!(resolved.form.from, "Da Lat");
		assert_eq!(resolved.form.passengers, 5);
	}

	#[test]
	fn passenger_bounds_are_checked() {
		let err = load(&cli(&["--passengers", "0"])).unwrap_err();
		assert!(err.to_string().contains("must be between 1 and 99"));
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let err = load(&cli(&["--theme", "neon"])).unwrap_err();
		assert!(err.to_string().contains("unknown theme 'neon'"));
	}

	#[test]
	fn missing_required_config_file_fails() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("absent.toml");
		assert!(load(&cli(&["--config", missing.to_str().unwrap()])).is_err());
	}
}
