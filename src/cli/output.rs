use anyhow::Result;
use coach::results::{NO_DATA_MESSAGE, ResultsView};
use coach::{DecodeError, SearchOutcome, SearchQuery};
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	match &outcome.search {
		Some(search) if outcome.accepted => print_rows(search),
		_ => println!("Search cancelled (route: {})", outcome.route),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Print a decoded query string the way the results screen shows it.
pub(crate) fn print_decoded_plain(decoded: &Result<SearchQuery, DecodeError>) {
	match decoded {
		Ok(search) => print_rows(search),
		Err(err) => {
			println!("{NO_DATA_MESSAGE}");
			eprintln!("{err}");
		}
	}
}

pub(crate) fn format_decoded_json(decoded: &Result<SearchQuery, DecodeError>) -> Result<String> {
	let payload = match decoded {
		Ok(search) => json!({ "search": search, "error": null }),
		Err(err) => json!({ "search": null, "error": err.to_string() }),
	};
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_decoded_json(decoded: &Result<SearchQuery, DecodeError>) -> Result<()> {
	println!("{}", format_decoded_json(decoded)?);
	Ok(())
}

fn print_rows(search: &SearchQuery) {
	let view = ResultsView::Loaded(search.clone());
	for (label, value) in view.rows().unwrap_or_default() {
		println!("{label} {value}");
	}
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDate;
	use serde_json::Value;

	use super::*;

	fn search() -> SearchQuery {
		SearchQuery {
			origin: "Ha Noi".into(),
			destination: "Sa Pa".into(),
			departure_date: NaiveDate::from_ymd_opt(2025, 7, 1),
			..SearchQuery::default()
		}
	}

	#[test]
	fn json_format_includes_search() {
		let outcome = SearchOutcome {
			accepted: true,
			search: Some(search()),
			route: "/search?mode=bus".into(),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["search"]["origin"], "Ha Noi");
		assert_eq!(value["search"]["departure_date"], "2025-07-01");
		assert_eq!(value["search"]["passenger_count"], 1);
	}

	#[test]
	fn decode_failures_serialize_the_error() {
		let decoded = Err(DecodeError::MissingField { param: "dep" });
		let json = format_decoded_json(&decoded).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert!(value["search"].is_null());
		assert!(value["error"].as_str().unwrap().contains("dep"));
	}
}
