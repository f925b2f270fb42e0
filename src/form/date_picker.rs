use std::time::Instant;

use chrono::{Days, NaiveDate};

use super::calendar::{MonthGrid, shift_months};
use crate::overlay::{OverlayId, OverlayRegistry};

/// Date field that opens a calendar popup.
///
/// Popups are coordinated through the shared [`OverlayRegistry`] so that at
/// most one calendar is visible.
#[derive(Debug, Clone)]
pub struct DatePicker {
	title: &'static str,
	overlays: OverlayRegistry,
	id: OverlayId,
	selected: Option<NaiveDate>,
	cursor: Option<NaiveDate>,
	disabled: bool,
}

impl DatePicker {
	#[must_use]
	pub fn new(title: &'static str, overlays: &OverlayRegistry) -> Self {
		Self {
			title,
			overlays: overlays.clone(),
			id: overlays.register(),
			selected: None,
			cursor: None,
			disabled: false,
		}
	}

	#[must_use]
	pub fn title(&self) -> &'static str {
		self.title
	}

	#[must_use]
	pub fn overlay_id(&self) -> OverlayId {
		self.id
	}

	#[must_use]
	pub fn value(&self) -> Option<NaiveDate> {
		self.selected
	}

	/// Override the selected date from outside the widget.
	pub fn set_value(&mut self, value: Option<NaiveDate>) {
		self.selected = value;
		if let Some(date) = value {
			self.cursor = Some(date);
		}
	}

	#[must_use]
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
		if disabled {
			self.close();
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.overlays.is_open(self.id)
	}

	/// Open or close the popup. Disabled pickers ignore the request.
	pub fn toggle(&mut self, now: Instant, today: NaiveDate) {
		if self.disabled {
			return;
		}
		if self.is_open() {
			self.close();
		} else {
			self.open(now, today);
		}
	}

	pub fn open(&mut self, now: Instant, today: NaiveDate) {
		if self.disabled {
			return;
		}
		self.cursor = Some(self.selected.unwrap_or(today));
		self.overlays.open(self.id, now);
		tracing::debug!(picker = self.title, overlay = %self.id, "calendar opened");
	}

	pub fn close(&mut self) {
		self.overlays.close(self.id);
	}

	/// Day the keyboard cursor sits on while the popup is open.
	#[must_use]
	pub fn cursor(&self) -> Option<NaiveDate> {
		self.cursor
	}

	pub fn move_cursor_days(&mut self, days: i64) {
		let Some(cursor) = self.cursor else {
			return;
		};
		let step = Days::new(days.unsigned_abs());
		let moved = if days >= 0 {
			cursor.checked_add_days(step)
		} else {
			cursor.checked_sub_days(step)
		};
		if let Some(moved) = moved {
			self.cursor = Some(moved);
		}
	}

	pub fn move_cursor_months(&mut self, months: i32) {
		if let Some(cursor) = self.cursor {
			self.cursor = Some(shift_months(cursor, months));
		}
	}

	/// Pick `date`. The popup stays open so the choice can be revised.
	pub fn select(&mut self, date: NaiveDate) {
		if self.disabled {
			return;
		}
		self.selected = Some(date);
		self.cursor = Some(date);
		tracing::debug!(picker = self.title, %date, "date selected");
	}

	pub fn select_cursor(&mut self) {
		if let Some(cursor) = self.cursor {
			self.select(cursor);
		}
	}

	/// The two months shown side by side, starting at the cursor's month.
	#[must_use]
	pub fn visible_months(&self, today: NaiveDate) -> [MonthGrid; 2] {
		let anchor = self.cursor.or(self.selected).unwrap_or(today);
		[
			MonthGrid::containing(anchor),
			MonthGrid::containing(shift_months(anchor, 1)),
		]
	}

	/// Text shown in the field, e.g. `07 / 03 / 2025 00:00`.
	#[must_use]
	pub fn display_text(&self) -> String {
		self.selected
			.map(|date| format!("{} 00:00", date.format("%d / %m / %Y")))
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn day(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn only_one_picker_is_open_at_a_time() {
		let overlays = OverlayRegistry::new();
		let mut departure = DatePicker::new("DEPARTURE DATE", &overlays);
		let mut arrival = DatePicker::new("RETURN DATE", &overlays);
		let now = Instant::now();
		let today = day(2025, 3, 14);

		departure.toggle(now, today);
		arrival.toggle(now, today);

		assert!(!departure.is_open());
		assert!(arrival.is_open());

		departure.close();
		assert!(arrival.is_open());
	}

	#[test]
	fn disabled_picker_ignores_interaction() {
		let overlays = OverlayRegistry::new();
		let mut picker = DatePicker::new("RETURN DATE", &overlays);
		picker.set_disabled(true);
		picker.toggle(Instant::now(), day(2025, 3, 14));
		picker.select(day(2025, 3, 20));

		assert!(!picker.is_open());
		assert_eq!(picker.value(), None);
	}

	#[test]
	fn disabling_closes_open_popup() {
		let overlays = OverlayRegistry::new();
		let mut picker = DatePicker::new("RETURN DATE", &overlays);
		picker.open(Instant::now(), day(2025, 3, 14));
		picker.set_disabled(true);
		assert_eq!(overlays.active(), None);
	}

	#[test]
	fn cursor_starts_at_today_and_moves() {
		let overlays = OverlayRegistry::new();
		let mut picker = DatePicker::new("DEPARTURE DATE", &overlays);
		picker.open(Instant::now(), day(2025, 3, 14));
		assert_eq!(picker.cursor(), Some(day(2025, 3, 14)));

		picker.move_cursor_days(7);
		picker.move_cursor_months(1);
		picker.move_cursor_days(-1);
		picker.select_cursor();

		assert_eq!(picker.value(), Some(day(2025, 4, 20)));
		assert!(picker.is_open());
	}

	#[test]
	fn display_text_uses_day_month_year() {
		let overlays = OverlayRegistry::new();
		let mut picker = DatePicker::new("DEPARTURE DATE", &overlays);
		assert_eq!(picker.display_text(), "");
		picker.set_value(Some(day(2025, 3, 7)));
		assert_eq!(picker.display_text(), "07 / 03 / 2025 00:00");
	}

	#[test]
	fn visible_months_follow_cursor() {
		let overlays = OverlayRegistry::new();
		let mut picker = DatePicker::new("DEPARTURE DATE", &overlays);
		picker.set_value(Some(day(2025, 12, 24)));
		let [first, second] = picker.visible_months(day(2025, 3, 14));
		assert_eq!(first.title(), "December 2025");
		assert_eq!(second.title(), "January 2026");
	}
}
