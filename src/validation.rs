//! Form validation with a "first error wins" reporting policy.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::query::SearchQuery;

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	From,
	To,
	DepartureDate,
	ReturnDate,
	Passengers,
}

impl Field {
	fn missing_message(self) -> &'static str {
		match self {
			Field::From => "From location is required",
			Field::To => "To location is required",
			Field::DepartureDate => "Departure date is required",
			Field::ReturnDate => "Must choose the return date for round trip!!",
			Field::Passengers => "At least 1 passenger is required",
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Field::From => "from",
			Field::To => "to",
			Field::DepartureDate => "departureDate",
			Field::ReturnDate => "returnDate",
			Field::Passengers => "passengers",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The single error surfaced to the user when a search is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("{}", .field.missing_message())]
	MissingField { field: Field },

	#[error("Departure date cannot be in the past")]
	PastDate,

	#[error("The return date of the round trip must be after the departure date.")]
	InvalidRange,
}

impl ValidationError {
	/// The field the message should be attached to.
	#[must_use]
	pub fn field(&self) -> Field {
		match self {
			ValidationError::MissingField { field } => *field,
			ValidationError::PastDate => Field::DepartureDate,
			ValidationError::InvalidRange => Field::ReturnDate,
		}
	}

	fn missing(field: Field) -> Self {
		ValidationError::MissingField { field }
	}
}

/// Check the departure / return pair.
///
/// `today` is the current calendar day; a departure on `today` is allowed.
pub fn validate_dates(
	departure: Option<NaiveDate>,
	return_date: Option<NaiveDate>,
	is_round_trip: bool,
	today: NaiveDate,
) -> Result<(), ValidationError> {
	let departure = departure.ok_or(ValidationError::missing(Field::DepartureDate))?;
	if departure < today {
		return Err(ValidationError::PastDate);
	}

	if is_round_trip {
		let return_date = return_date.ok_or(ValidationError::missing(Field::ReturnDate))?;
		if return_date <= departure {
			return Err(ValidationError::InvalidRange);
		}
	}

	Ok(())
}

/// Check every field of an assembled search in display order.
pub fn validate_form(query: &SearchQuery, today: NaiveDate) -> Result<(), ValidationError> {
	if query.origin.trim().is_empty() {
		return Err(ValidationError::missing(Field::From));
	}
	if query.destination.trim().is_empty() {
		return Err(ValidationError::missing(Field::To));
	}

	validate_dates(
		query.departure_date,
		query.return_date,
		query.is_round_trip,
		today,
	)?;

	if query.passenger_count < 1 {
		return Err(ValidationError::missing(Field::Passengers));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use chrono::Days;

	use super::*;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
	}

	fn valid_query() -> SearchQuery {
		SearchQuery {
			origin: "Ha Noi".into(),
			destination: "Da Nang".into(),
			departure_date: Some(today()),
			return_date: None,
			is_round_trip: false,
			passenger_count: 1,
		}
	}

	#[test]
	fn missing_departure_is_reported_first() {
		let result = validate_dates(None, None, true, today());
		assert_eq!(
			result,
			Err(ValidationError::MissingField {
				field: Field::DepartureDate
			})
		);
	}

	#[test]
	fn yesterday_is_in_the_past() {
		let yesterday = today().checked_sub_days(Days::new(1)).unwrap();
		assert_eq!(
			validate_dates(Some(yesterday), None, false, today()),
			Err(ValidationError::PastDate)
		);
	}

	#[test]
	fn today_is_a_valid_departure() {
		assert_eq!(validate_dates(Some(today()), None, false, today()), Ok(()));
	}

	#[test]
	fn round_trip_requires_return_date() {
		let err = validate_dates(Some(today()), None, true, today()).unwrap_err();
		assert_eq!(err.field(), Field::ReturnDate);
		assert_eq!(err.to_string(), "Must choose the return date for round trip!!");
	}

	#[test]
	fn same_day_return_is_an_invalid_range() {
		assert_eq!(
			validate_dates(Some(today()), Some(today()), true, today()),
			Err(ValidationError::InvalidRange)
		);
	}

	#[test]
	fn return_date_is_ignored_for_one_way() {
		let before = today().checked_sub_days(Days::new(3)).unwrap();
		assert_eq!(validate_dates(Some(today()), Some(before), false, today()), Ok(()));
	}

	#[test]
	fn later_return_date_passes() {
		let later = today().checked_add_days(Days::new(2)).unwrap();
		assert_eq!(validate_dates(Some(today()), Some(later), true, today()), Ok(()));
	}

	#[test]
	fn empty_form_reports_only_the_origin() {
		let query = SearchQuery::default();
		let err = validate_form(&query, today()).unwrap_err();
		assert_eq!(err.field(), Field::From);
		assert_eq!(err.to_string(), "From location is required");
	}

	#[test]
	fn blank_destination_is_rejected() {
		let mut query = valid_query();
		query.destination = "   ".into();
		assert_eq!(
			validate_form(&query, today()).unwrap_err().to_string(),
			"To location is required"
		);
	}

	#[test]
	fn zero_passengers_is_rejected() {
		let mut query = valid_query();
		query.passenger_count = 0;
		assert_eq!(
			validate_form(&query, today()),
			Err(ValidationError::MissingField {
				field: Field::Passengers
			})
		);
	}

	#[test]
	fn complete_form_is_valid() {
		assert_eq!(validate_form(&valid_query(), today()), Ok(()));
	}
}
