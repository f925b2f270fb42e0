use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use coach::{TravelTab, app_dirs};

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("coach {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "coach",
	version,
	long_version = long_version(),
	about = "Terminal bus ticket search form",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `coach` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COACH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 't',
		long,
		value_enum,
		help = "Choose the tab shown at start (default: bus)"
	)]
	pub(crate) tab: Option<TabArg>,
	#[arg(long, value_name = "TEXT", help = "Pre-fill the FROM field (default: empty)")]
	pub(crate) from: Option<String>,
	#[arg(long, value_name = "TEXT", help = "Pre-fill the TO field (default: empty)")]
	pub(crate) to: Option<String>,
	#[arg(
		short = 'p',
		long,
		value_name = "NUM",
		help = "Initial passenger count (default: 1)"
	)]
	pub(crate) passengers: Option<u32>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load the location catalogue from a JSON file (default: built-in list)"
	)]
	pub(crate) locations: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log filter directive, overridden by COACH_LOG (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to FILE (default: coach.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'd',
		long,
		value_name = "QUERY",
		help = "Decode a results query string and exit (default: disabled)"
	)]
	pub(crate) decode: Option<String>,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Tabs selectable from the command line.
pub(crate) enum TabArg {
	Bus,
	Hotel,
	Flight,
}

impl TabArg {
	/// Return the key consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		self.tab().key()
	}

	fn tab(self) -> TravelTab {
		match self {
			TabArg::Bus => TravelTab::Bus,
			TabArg::Hotel => TravelTab::Hotel,
			TabArg::Flight => TravelTab::Flight,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
