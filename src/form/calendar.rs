//! Month grid arithmetic for the calendar popup.

use chrono::{Datelike, Months, NaiveDate, Weekday};

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One month laid out in Sunday-first weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
	pub first: NaiveDate,
	pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
	/// Grid for the month containing `date`.
	#[must_use]
	pub fn containing(date: NaiveDate) -> Self {
		let first = first_of_month(date);
		let mut weeks = Vec::with_capacity(6);
		let mut week = [None; 7];
		let mut column = first.weekday().num_days_from_sunday() as usize;

		for day in first.iter_days().take_while(|day| day.month() == first.month()) {
			week[column] = Some(day);
			column += 1;
			if column == 7 {
				weeks.push(week);
				week = [None; 7];
				column = 0;
			}
		}
		if column != 0 {
			weeks.push(week);
		}

		Self { first, weeks }
	}

	/// Heading such as `March 2025`.
	#[must_use]
	pub fn title(&self) -> String {
		self.first.format("%B %Y").to_string()
	}

	/// Day at `(week, column)`, if that cell is inside the month.
	#[must_use]
	pub fn day_at(&self, week: usize, column: usize) -> Option<NaiveDate> {
		self.weeks.get(week).and_then(|days| days.get(column).copied().flatten())
	}
}

#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
	date.with_day(1).unwrap_or(date)
}

/// Shift by whole months, clamping the day to the target month's length.
#[must_use]
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
	let amount = Months::new(months.unsigned_abs());
	let shifted = if months >= 0 {
		date.checked_add_months(amount)
	} else {
		date.checked_sub_months(amount)
	};
	shifted.unwrap_or(date)
}

/// Days drawn in the accent colour: weekends and the first of each month.
#[must_use]
pub fn is_marked(date: NaiveDate) -> bool {
	matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || date.day() == 1
}
