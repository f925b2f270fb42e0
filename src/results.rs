//! The results screen's view of a submitted search.

use chrono::NaiveDate;

use crate::notify::{Notifier, Toast};
use crate::query::{DecodeError, QueryParams, SearchQuery, decode};

pub const NO_DATA_MESSAGE: &str = "No search data found";

/// Either a decoded search or the explicit "no data" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
	Loaded(SearchQuery),
	NoData,
}

impl ResultsView {
	/// Decode `params`, degrading to [`ResultsView::NoData`] on failure.
	///
	/// Parameter sets without the required keys show "no data" quietly;
	/// malformed values additionally raise an error toast.
	pub fn load(params: &QueryParams, mut notifier: impl Notifier) -> Self {
		match decode(params) {
			Ok(query) => ResultsView::Loaded(query),
			Err(DecodeError::MissingField { param }) => {
				tracing::debug!(param, "results requested without search data");
				ResultsView::NoData
			}
			Err(err) => {
				tracing::warn!(%err, "failed to decode search parameters");
				notifier.notify(Toast::error("Failed to load data", "Please try again later."));
				ResultsView::NoData
			}
		}
	}

	/// Label / value rows for display.
	#[must_use]
	pub fn rows(&self) -> Option<Vec<(&'static str, String)>> {
		let ResultsView::Loaded(query) = self else {
			return None;
		};
		Some(vec![
			("From:", or_na(&query.origin)),
			("To:", or_na(&query.destination)),
			("Departure date:", format_date(query.departure_date)),
			("Return date:", format_date(query.return_date)),
			(
				"No. of passenger:",
				if query.passenger_count == 0 {
					"N/A".to_string()
				} else {
					query.passenger_count.to_string()
				},
			),
		])
	}
}

fn or_na(value: &str) -> String {
	if value.is_empty() {
		"N/A".to_string()
	} else {
		value.to_string()
	}
}

/// `dd / MM / yyyy HH:mm`, or `No data`.
#[must_use]
pub fn format_date(date: Option<NaiveDate>) -> String {
	match date {
		Some(date) => format!("{} 00:00", date.format("%d / %m / %Y")),
		None => "No data".to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::notify::ToastQueue;

	#[test]
	fn loads_one_way_search() {
		let mut toasts = ToastQueue::new();
		let params = QueryParams::parse("mode=bus&from=A&to=B&dep=2024-01-01&pax=2");
		let view = ResultsView::load(&params, &mut toasts);

		let rows = view.rows().expect("rows");
		assert_eq!(rows[0], ("From:", "A".to_string()));
		assert_eq!(rows[2], ("Departure date:", "01 / 01 / 2024 00:00".to_string()));
		assert_eq!(rows[3], ("Return date:", "No data".to_string()));
		assert_eq!(rows[4], ("No. of passenger:", "2".to_string()));
		assert!(toasts.is_empty());
	}

	#[test]
	fn malformed_parameters_degrade_to_no_data() {
		let mut toasts = ToastQueue::new();
		let params = QueryParams::parse("from=A&to=B&dep=not-a-date&pax=2");
		let view = ResultsView::load(&params, &mut toasts);

		assert_eq!(view, ResultsView::NoData);
		assert!(view.rows().is_none());
		assert_eq!(toasts.len(), 1);
	}

	#[test]
	fn missing_parameters_show_no_data_quietly() {
		let mut toasts = ToastQueue::new();
		let view = ResultsView::load(&QueryParams::new(), &mut toasts);
		assert_eq!(view, ResultsView::NoData);
		assert!(toasts.is_empty());
	}
}
