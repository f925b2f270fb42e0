mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_decoded_json, print_decoded_plain, print_json, print_plain};
use coach::{QueryParams, decode, logging};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in coach::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Some(query) = &cli.decode {
		// accept a full `/search?...` route as well as a bare query string
		let query = query.split_once('?').map_or(query.as_str(), |(_, rest)| rest);
		let decoded = decode(&QueryParams::parse(query));
		return match cli.output {
			OutputFormat::Plain => {
				print_decoded_plain(&decoded);
				Ok(())
			}
			OutputFormat::Json => print_decoded_json(&decoded),
		};
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(&resolved.log_level, &resolved.log_path()?)?;

	run_search(cli.output, &resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
