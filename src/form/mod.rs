//! The bus search form: field widgets plus submission.
//!
//! [`SearchForm`] owns every field value. Submitting assembles a
//! [`SearchQuery`], validates it, and on success encodes it as query
//! parameters and navigates to the results route.

use std::rc::Rc;

use chrono::NaiveDate;

pub mod calendar;
mod date_picker;
mod location_field;

pub use date_picker::DatePicker;
pub use location_field::LocationField;

use crate::locations::LocationCatalog;
use crate::navigation::{Navigator, SEARCH_PATH};
use crate::notify::{Notifier, Toast};
use crate::overlay::OverlayRegistry;
use crate::passengers::{DEFAULT_MAX_PASSENGERS, DEFAULT_MIN_PASSENGERS, PassengerCounter};
use crate::query::{QueryParams, SearchQuery, encode};
use crate::validation::{Field, ValidationError, validate_form};

/// Focusable parts of the form in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFocus {
	From,
	To,
	Departure,
	RoundTrip,
	Return,
	Passengers,
	Submit,
}

impl FormFocus {
	pub const ORDER: [FormFocus; 7] = [
		FormFocus::From,
		FormFocus::To,
		FormFocus::Departure,
		FormFocus::RoundTrip,
		FormFocus::Return,
		FormFocus::Passengers,
		FormFocus::Submit,
	];
}

/// Initial values and bounds for a new form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
	pub from: String,
	pub to: String,
	pub passengers: u32,
	pub min_passengers: u32,
	pub max_passengers: u32,
}

impl Default for FormDefaults {
	fn default() -> Self {
		Self {
			from: String::new(),
			to: String::new(),
			passengers: DEFAULT_MIN_PASSENGERS,
			min_passengers: DEFAULT_MIN_PASSENGERS,
			max_passengers: DEFAULT_MAX_PASSENGERS,
		}
	}
}

#[derive(Debug)]
pub struct SearchForm {
	pub from: LocationField,
	pub to: LocationField,
	pub departure: DatePicker,
	pub return_date: DatePicker,
	pub passengers: PassengerCounter,
	round_trip: bool,
	focus: FormFocus,
	/// Last rejection and the values it was raised against.
	rejection: Option<(ValidationError, SearchQuery)>,
}

impl SearchForm {
	#[must_use]
	pub fn new(
		catalog: Rc<LocationCatalog>,
		overlays: &OverlayRegistry,
		defaults: FormDefaults,
	) -> Self {
		let mut from = LocationField::new("FROM", Rc::clone(&catalog));
		from.set_value(defaults.from);
		let mut to = LocationField::new("TO", catalog);
		to.set_value(defaults.to);

		let mut return_date = DatePicker::new("RETURN DATE", overlays);
		return_date.set_disabled(true);

		let passengers = PassengerCounter::new(
			defaults.passengers,
			defaults.min_passengers,
			defaults.max_passengers,
		)
		.with_observer(|value| tracing::debug!(passengers = value, "passenger count changed"));

		Self {
			from,
			to,
			departure: DatePicker::new("DEPARTURE DATE", overlays),
			return_date,
			passengers,
			round_trip: false,
			focus: FormFocus::From,
			rejection: None,
		}
	}

	#[must_use]
	pub fn focus(&self) -> FormFocus {
		self.focus
	}

	/// Move focus, closing popups that belong to the field being left.
	pub fn set_focus(&mut self, focus: FormFocus) {
		if focus == self.focus {
			return;
		}
		match self.focus {
			FormFocus::From => self.from.close(),
			FormFocus::To => self.to.close(),
			FormFocus::Departure => self.departure.close(),
			FormFocus::Return => self.return_date.close(),
			_ => {}
		}
		self.focus = focus;
	}

	pub fn focus_next(&mut self) {
		self.step_focus(1);
	}

	pub fn focus_prev(&mut self) {
		self.step_focus(FormFocus::ORDER.len() - 1);
	}

	fn step_focus(&mut self, step: usize) {
		let len = FormFocus::ORDER.len();
		let mut index = FormFocus::ORDER
			.iter()
			.position(|focus| *focus == self.focus)
			.unwrap_or_default();
		loop {
			index = (index + step) % len;
			let candidate = FormFocus::ORDER[index];
			if candidate != FormFocus::Return || !self.return_date.is_disabled() {
				self.set_focus(candidate);
				return;
			}
		}
	}

	#[must_use]
	pub fn is_round_trip(&self) -> bool {
		self.round_trip
	}

	/// Turning round trip off clears and disables the return date.
	pub fn set_round_trip(&mut self, round_trip: bool) {
		self.round_trip = round_trip;
		self.return_date.set_disabled(!round_trip);
		if !round_trip {
			self.return_date.set_value(None);
		}
	}

	pub fn toggle_round_trip(&mut self) {
		self.set_round_trip(!self.round_trip);
	}

	/// Close every popup owned by the form.
	pub fn close_popups(&mut self) {
		self.from.close();
		self.to.close();
		self.departure.close();
		self.return_date.close();
	}

	/// Snapshot of the current field values.
	#[must_use]
	pub fn query(&self) -> SearchQuery {
		SearchQuery {
			origin: self.from.value().to_string(),
			destination: self.to.value().to_string(),
			departure_date: self.departure.value(),
			return_date: self.return_date.value(),
			is_round_trip: self.round_trip,
			passenger_count: self.passengers.value(),
		}
	}

	/// The rejection shown under `field`, while that field still holds the
	/// value it was rejected with.
	#[must_use]
	pub fn field_error(&self, field: Field) -> Option<ValidationError> {
		let (err, rejected) = self.rejection.as_ref()?;
		if err.field() != field {
			return None;
		}
		let current = self.query();
		let unchanged = match field {
			Field::From => current.origin == rejected.origin,
			Field::To => current.destination == rejected.destination,
			Field::DepartureDate => current.departure_date == rejected.departure_date,
			Field::ReturnDate => {
				current.is_round_trip == rejected.is_round_trip
					&& current.return_date == rejected.return_date
			}
			Field::Passengers => current.passenger_count == rejected.passenger_count,
		};
		unchanged.then_some(*err)
	}

	/// Validate and submit the form.
	///
	/// On failure the first error is raised through `notifier` and `None` is
	/// returned; the form keeps its values.
	pub fn submit(
		&mut self,
		today: NaiveDate,
		mut notifier: impl Notifier,
		mut navigator: impl Navigator,
	) -> Option<QueryParams> {
		let query = self.query();
		if let Err(err) = validate_form(&query, today) {
			tracing::info!(field = %err.field(), %err, "search rejected");
			notifier.notify(Toast::error("Validation Error", err.to_string()));
			self.rejection = Some((err, query));
			return None;
		}

		self.rejection = None;

		self.close_popups();
		let params = encode(&query);
		navigator.navigate(&format!("{SEARCH_PATH}?{}", params.to_query_string()));
		notifier.notify(Toast::success(
			"Search successful!",
			"Your bus search has been submitted.",
		));
		Some(params)
	}
}

#[cfg(test)]
mod tests {
	use std::time::Instant;

	use super::*;
	use crate::notify::Severity;

	#[derive(Default)]
	struct Recorder {
		toasts: Vec<Toast>,
		targets: Vec<String>,
	}

	impl Notifier for Recorder {
		fn notify(&mut self, toast: Toast) {
			self.toasts.push(toast);
		}
	}

	struct Targets<'a>(&'a mut Vec<String>);

	impl Navigator for Targets<'_> {
		fn navigate(&mut self, target: &str) {
			self.0.push(target.to_string());
		}
	}

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
	}

	fn form() -> SearchForm {
		SearchForm::new(
			Rc::new(LocationCatalog::builtin()),
			&OverlayRegistry::new(),
			FormDefaults::default(),
		)
	}

	fn submit(form: &mut SearchForm) -> (Option<QueryParams>, Recorder) {
		let mut recorder = Recorder::default();
		let mut targets = Vec::new();
		let result = form.submit(today(), &mut recorder, Targets(&mut targets));
		recorder.targets = targets;
		(result, recorder)
	}

	#[test]
	fn empty_form_raises_single_error() {
		let mut form = form();
		let (result, recorder) = submit(&mut form);

		assert!(result.is_none());
		assert!(recorder.targets.is_empty());
		assert_eq!(recorder.toasts.len(), 1);
		assert_eq!(recorder.toasts[0].severity, Severity::Error);
		assert_eq!(
			recorder.toasts[0].description.as_deref(),
			Some("From location is required")
		);
	}

	#[test]
	fn valid_form_navigates_to_results() {
		let mut form = form();
		form.from.set_value("Ha Noi");
		form.to.set_value("Da Nang");
		form.departure.set_value(Some(today()));
		form.passengers.set(2);

		let (result, recorder) = submit(&mut form);

		let params = result.expect("submitted");
		assert_eq!(params.get("pax"), Some("2"));
		assert_eq!(
			recorder.targets,
			["/search?mode=bus&from=Ha+Noi&to=Da+Nang&dep=2025-03-14&pax=2"]
		);
		assert_eq!(recorder.toasts[0].title, "Search successful!");
	}

	#[test]
	fn rejection_sticks_to_field_until_edited() {
		let mut form = form();
		form.from.set_value("Ha Noi");
		submit(&mut form);

		assert_eq!(form.field_error(Field::From), None);
		assert_eq!(
			form.field_error(Field::To),
			Some(ValidationError::MissingField { field: Field::To })
		);

		form.to.insert_char('H');
		assert_eq!(form.field_error(Field::To), None);
	}

	#[test]
	fn successful_submit_clears_rejection() {
		let mut form = form();
		form.from.set_value("Ha Noi");
		form.to.set_value("Hue");
		form.departure.set_value(Some(today().pred_opt().unwrap()));
		submit(&mut form);
		assert_eq!(form.field_error(Field::DepartureDate), Some(ValidationError::PastDate));

		form.departure.set_value(Some(today()));
		let (result, _) = submit(&mut form);
		assert!(result.is_some());
		assert_eq!(form.field_error(Field::DepartureDate), None);
	}

	#[test]
	fn return_error_clears_when_round_trip_turns_off() {
		let mut form = form();
		form.from.set_value("Ha Noi");
		form.to.set_value("Hue");
		form.departure.set_value(Some(today()));
		form.set_round_trip(true);
		submit(&mut form);
		assert!(form.field_error(Field::ReturnDate).is_some());

		form.set_round_trip(false);
		assert_eq!(form.field_error(Field::ReturnDate), None);
	}

	#[test]
	fn round_trip_off_clears_return_date() {
		let mut form = form();
		form.set_round_trip(true);
		let later = today().succ_opt().unwrap();
		form.return_date.set_value(Some(later));
		assert_eq!(form.query().return_date, Some(later));

		form.set_round_trip(false);
		assert_eq!(form.return_date.value(), None);
		assert!(form.return_date.is_disabled());
	}

	#[test]
	fn focus_skips_disabled_return_picker() {
		let mut form = form();
		form.set_focus(FormFocus::RoundTrip);
		form.focus_next();
		assert_eq!(form.focus(), FormFocus::Passengers);

		form.set_round_trip(true);
		form.focus_prev();
		form.focus_next();
		assert_eq!(form.focus(), FormFocus::Passengers);
		form.focus_prev();
		assert_eq!(form.focus(), FormFocus::Return);
	}

	#[test]
	fn focus_wraps_around() {
		let mut form = form();
		form.focus_prev();
		assert_eq!(form.focus(), FormFocus::Submit);
		form.focus_next();
		assert_eq!(form.focus(), FormFocus::From);
	}

	#[test]
	fn leaving_a_date_field_closes_its_calendar() {
		let mut form = form();
		form.set_focus(FormFocus::Departure);
		form.departure.toggle(Instant::now(), today());
		assert!(form.departure.is_open());

		form.focus_next();
		assert!(!form.departure.is_open());
	}

	#[test]
	fn defaults_prefill_fields() {
		let form = SearchForm::new(
			Rc::new(LocationCatalog::builtin()),
			&OverlayRegistry::new(),
			FormDefaults {
				from: "Hue".into(),
				to: "Hoi An".into(),
				passengers: 4,
				min_passengers: 1,
				max_passengers: 6,
			},
		);
		let query = form.query();
		assert_eq!(query.origin, "Hue");
		assert_eq!(query.destination, "Hoi An");
		assert_eq!(query.passenger_count, 4);
		assert_eq!(form.passengers.max(), 6);
	}
}
