//! The search record and its query-parameter encoding.
//!
//! | param | meaning | format |
//! |---|---|---|
//! | `mode` | fixed literal | `bus` |
//! | `from` | origin free text | URL-encoded |
//! | `to` | destination free text | URL-encoded |
//! | `dep` | departure date | `yyyy-MM-dd` |
//! | `ret` | return date, optional | `yyyy-MM-dd` |
//! | `pax` | passenger count | decimal |

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

pub const MODE_BUS: &str = "bus";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Everything a bus search submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
	pub origin: String,
	pub destination: String,
	pub departure_date: Option<NaiveDate>,
	pub return_date: Option<NaiveDate>,
	pub is_round_trip: bool,
	pub passenger_count: u32,
}

impl Default for SearchQuery {
	fn default() -> Self {
		Self {
			origin: String::new(),
			destination: String::new(),
			departure_date: None,
			return_date: None,
			is_round_trip: false,
			passenger_count: 1,
		}
	}
}

/// Ordered, flat string-keyed parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse an `application/x-www-form-urlencoded` string.
	///
	/// A leading `?` is ignored.
	#[must_use]
	pub fn parse(input: &str) -> Self {
		let input = input.strip_prefix('?').unwrap_or(input);
		let pairs = form_urlencoded::parse(input.as_bytes())
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect();
		Self { pairs }
	}

	/// Set `key`, replacing an existing value in place.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		let value = value.into();
		match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
			Some(pair) => pair.1 = value,
			None => self.pairs.push((key, value)),
		}
	}

	/// First value for `key`.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(existing, _)| existing == key)
			.map(|(_, value)| value.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	#[must_use]
	pub fn to_query_string(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.pairs.iter())
			.finish()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (key, value) in iter {
			params.set(key, value);
		}
		params
	}
}

/// Why a parameter set could not be turned back into a [`SearchQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	#[error("missing required parameter '{param}'")]
	MissingField { param: &'static str },

	#[error("parameter '{param}' is not a yyyy-MM-dd date: '{value}'")]
	MalformedDate { param: &'static str, value: String },

	#[error("parameter '{param}' is not a decimal number: '{value}'")]
	MalformedNumber { param: &'static str, value: String },
}

/// Format a day as `yyyy-MM-dd`.
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
	date.format(DATE_FORMAT).to_string()
}

/// Parse exactly `yyyy-MM-dd`: four-digit year, two-digit month and day.
#[must_use]
pub fn parse_day(value: &str) -> Option<NaiveDate> {
	let bytes = value.as_bytes();
	let shaped = bytes.len() == 10
		&& bytes.iter().enumerate().all(|(index, byte)| match index {
			4 | 7 => *byte == b'-',
			_ => byte.is_ascii_digit(),
		});
	if !shaped {
		return None;
	}
	NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Build the parameters submitted for `query`.
#[must_use]
pub fn encode(query: &SearchQuery) -> QueryParams {
	let mut params = QueryParams::new();
	params.set("mode", MODE_BUS);
	params.set("from", query.origin.as_str());
	params.set("to", query.destination.as_str());
	if let Some(departure) = query.departure_date {
		params.set("dep", format_day(departure));
	}
	if query.is_round_trip
		&& let Some(return_date) = query.return_date
	{
		params.set("ret", format_day(return_date));
	}
	params.set("pax", query.passenger_count.to_string());
	params
}

/// Rebuild a [`SearchQuery`] from submitted parameters.
pub fn decode(params: &QueryParams) -> Result<SearchQuery, DecodeError> {
	let origin = required(params, "from")?;
	let destination = required(params, "to")?;
	let departure = required(params, "dep")?;
	let passengers = required(params, "pax")?;

	let departure_date = date_param("dep", departure)?;
	let return_date = params
		.get("ret")
		.filter(|value| !value.is_empty())
		.map(|value| date_param("ret", value))
		.transpose()?;
	let passenger_count = number_param("pax", passengers)?;

	Ok(SearchQuery {
		origin: origin.to_string(),
		destination: destination.to_string(),
		departure_date: Some(departure_date),
		is_round_trip: return_date.is_some(),
		return_date,
		passenger_count,
	})
}

fn required<'a>(params: &'a QueryParams, param: &'static str) -> Result<&'a str, DecodeError> {
	params
		.get(param)
		.filter(|value| !value.is_empty())
		.ok_or(DecodeError::MissingField { param })
}

fn date_param(param: &'static str, value: &str) -> Result<NaiveDate, DecodeError> {
	parse_day(value).ok_or_else(|| DecodeError::MalformedDate {
		param,
		value: value.to_string(),
	})
}

fn number_param(param: &'static str, value: &str) -> Result<u32, DecodeError> {
	let malformed = || DecodeError::MalformedNumber {
		param,
		value: value.to_string(),
	};
	if !value.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(malformed());
	}
	value.parse().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn day(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	fn round_trip() -> SearchQuery {
		SearchQuery {
			origin: "Ha Noi".into(),
			destination: "Ho Chi Minh City".into(),
			departure_date: Some(day(2025, 6, 1)),
			return_date: Some(day(2025, 6, 9)),
			is_round_trip: true,
			passenger_count: 3,
		}
	}

	#[test]
	fn encode_emits_parameters_in_order() {
		let params = encode(&round_trip());
		let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["mode", "from", "to", "dep", "ret", "pax"]);
		assert_eq!(params.get("mode"), Some("bus"));
		assert_eq!(params.get("dep"), Some("2025-06-01"));
		assert_eq!(params.get("ret"), Some("2025-06-09"));
		assert_eq!(params.get("pax"), Some("3"));
	}

	#[test]
	fn encode_skips_return_date_for_one_way() {
		let mut query = round_trip();
		query.is_round_trip = false;
		assert_eq!(encode(&query).get("ret"), None);
	}

	#[test]
	fn query_string_is_url_encoded() {
		let params = encode(&round_trip());
		assert_eq!(
			params.to_query_string(),
			"mode=bus&from=Ha+Noi&to=Ho+Chi+Minh+City&dep=2025-06-01&ret=2025-06-09&pax=3"
		);
	}

	#[test]
	fn round_trip_survives_encode_and_decode() {
		let query = round_trip();
		let text = encode(&query).to_query_string();
		let decoded = decode(&QueryParams::parse(&text)).expect("decode");
		assert_eq!(decoded, query);
	}

	#[test]
	fn one_way_decode_derives_flags() {
		let params: QueryParams = [("from", "A"), ("to", "B"), ("dep", "2024-01-01"), ("pax", "2")]
			.into_iter()
			.collect();
		let decoded = decode(&params).expect("decode");
		assert_eq!(
			decoded,
			SearchQuery {
				origin: "A".into(),
				destination: "B".into(),
				departure_date: Some(day(2024, 1, 1)),
				return_date: None,
				is_round_trip: false,
				passenger_count: 2,
			}
		);
	}

	#[test]
	fn malformed_departure_is_rejected() {
		let params: QueryParams = [("from", "A"), ("to", "B"), ("dep", "not-a-date"), ("pax", "2")]
			.into_iter()
			.collect();
		assert_eq!(
			decode(&params),
			Err(DecodeError::MalformedDate {
				param: "dep",
				value: "not-a-date".into(),
			})
		);
	}

	#[test]
	fn malformed_return_is_rejected() {
		let params = QueryParams::parse("from=A&to=B&dep=2024-01-01&ret=2024-1-5&pax=2");
		assert!(matches!(
			decode(&params),
			Err(DecodeError::MalformedDate { param: "ret", .. })
		));
	}

	#[test]
	fn passenger_count_must_be_decimal() {
		for bad in ["two", "+2", "-1", "2.0"] {
			let params: QueryParams = [("from", "A"), ("to", "B"), ("dep", "2024-01-01"), ("pax", bad)]
				.into_iter()
				.collect();
			assert!(
				matches!(decode(&params), Err(DecodeError::MalformedNumber { .. })),
				"{bad} should be rejected"
			);
		}
	}

	#[test]
	fn empty_required_values_count_as_missing() {
		let params = QueryParams::parse("?from=&to=B&dep=2024-01-01&pax=1");
		assert_eq!(
			decode(&params),
			Err(DecodeError::MissingField { param: "from" })
		);
	}

	#[test]
	fn strict_day_parsing() {
		assert_eq!(parse_day("2024-02-29"), Some(day(2024, 2, 29)));
		assert_eq!(parse_day("2023-02-29"), None);
		assert_eq!(parse_day("2024-2-09"), None);
		assert_eq!(parse_day("+2024-02-09"), None);
		assert_eq!(parse_day("2024/02/09"), None);
	}

	#[test]
	fn parse_decodes_percent_escapes() {
		let params = QueryParams::parse("from=H%E1%BA%A3i+Ph%C3%B2ng&to=Hu%E1%BA%BF");
		assert_eq!(params.get("from"), Some("Hải Phòng"));
		assert_eq!(params.get("to"), Some("Huế"));
	}
}
