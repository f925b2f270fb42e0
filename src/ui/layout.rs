//! Screen geometry shared by rendering and mouse hit-testing.

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use crate::form::FormFocus;
use crate::form::calendar::MonthGrid;
use crate::tabs::TravelTab;

const FIELD_HEIGHT: u16 = 4;
const SUBMIT_WIDTH: u16 = 16;
const MAX_SUGGESTIONS: u16 = 6;
const SUGGESTION_WIDTH: u16 = 36;

/// Width of one rendered month: seven three-column day cells.
pub const MONTH_WIDTH: u16 = 21;
const MONTH_GAP: u16 = 2;
/// Title, weekday header and up to six weeks.
const MONTH_HEIGHT: u16 = 8;

/// Position of every element on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
	pub area: Rect,
	pub tabs: [Rect; 3],
	pub body: Rect,
	pub from: Rect,
	pub to: Rect,
	pub departure: Rect,
	pub return_date: Rect,
	pub passengers: Rect,
	pub submit: Rect,
	pub hint: Rect,
}

impl HomeLayout {
	#[must_use]
	pub fn new(area: Rect) -> Self {
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(FIELD_HEIGHT),
				Constraint::Length(FIELD_HEIGHT),
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(area);

		let tabs = tab_rects(rows[0]);
		let body = Rect {
			height: area.height.saturating_sub(1),
			y: area.y.saturating_add(1),
			..area
		};

		let places = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
			.spacing(2)
			.split(rows[2]);
		let dates = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([
				Constraint::Percentage(38),
				Constraint::Percentage(38),
				Constraint::Percentage(24),
			])
			.spacing(2)
			.split(rows[3]);

		let submit_row = rows[5];
		let submit_width = SUBMIT_WIDTH.min(submit_row.width);
		let submit = Rect {
			x: submit_row.x + (submit_row.width - submit_width) / 2,
			width: submit_width,
			..submit_row
		};

		Self {
			area,
			tabs,
			body,
			from: places[0],
			to: places[1],
			departure: dates[0],
			return_date: dates[1],
			passengers: dates[2],
			submit,
			hint: rows[7],
		}
	}

	/// Label row of a field block.
	#[must_use]
	pub fn label(block: Rect) -> Rect {
		Rect { height: 1.min(block.height), ..block }
	}

	/// Bordered input box of a field block.
	#[must_use]
	pub fn input(block: Rect) -> Rect {
		Rect {
			y: block.y.saturating_add(1),
			height: block.height.saturating_sub(1),
			..block
		}
	}

	/// Which focusable element contains `position`.
	#[must_use]
	pub fn focus_at(&self, position: Position) -> Option<FormFocus> {
		if Self::label(self.return_date).contains(position) {
			return Some(FormFocus::RoundTrip);
		}
		[
			(self.from, FormFocus::From),
			(self.to, FormFocus::To),
			(Self::input(self.departure), FormFocus::Departure),
			(Self::input(self.return_date), FormFocus::Return),
			(self.passengers, FormFocus::Passengers),
			(self.submit, FormFocus::Submit),
		]
		.into_iter()
		.find(|(rect, _)| rect.contains(position))
		.map(|(_, focus)| focus)
	}

	#[must_use]
	pub fn tab_at(&self, position: Position) -> Option<TravelTab> {
		self.tabs
			.iter()
			.position(|rect| rect.contains(position))
			.map(|index| TravelTab::ALL[index])
	}

	/// Suggestion list anchored under a location field.
	#[must_use]
	pub fn suggestions_popup(&self, block: Rect, count: usize) -> Rect {
		let anchor = Self::input(block);
		let rows = (count as u16).clamp(1, MAX_SUGGESTIONS) + 2;
		self.popup_below(anchor, anchor.width.max(SUGGESTION_WIDTH), rows)
	}

	/// Calendar popup anchored under a date field.
	#[must_use]
	pub fn calendar_popup(&self, block: Rect) -> Rect {
		let width = MONTH_WIDTH * 2 + MONTH_GAP + 2;
		let height = MONTH_HEIGHT + 2;
		self.popup_below(Self::input(block), width, height)
	}

	fn popup_below(&self, anchor: Rect, width: u16, height: u16) -> Rect {
		let width = width.min(self.area.width);
		let height = height.min(self.area.height);
		let x = anchor.x.min(self.area.right().saturating_sub(width));
		let y = anchor
			.bottom()
			.min(self.area.bottom().saturating_sub(height));
		Rect::new(x, y, width, height)
	}

	/// First suggestion drawn in `popup` while `highlighted` is kept in view.
	#[must_use]
	pub fn suggestion_offset(popup: Rect, highlighted: usize) -> usize {
		let visible = usize::from(popup.height.saturating_sub(2)).max(1);
		highlighted.saturating_sub(visible - 1)
	}

	/// Index of the suggestion drawn under `position`.
	#[must_use]
	pub fn suggestion_at(popup: Rect, position: Position, highlighted: usize) -> Option<usize> {
		let inner = popup.inner(Margin::new(1, 1));
		let offset = Self::suggestion_offset(popup, highlighted);
		inner
			.contains(position)
			.then(|| offset + usize::from(position.y - inner.y))
	}
}

/// Area of each month inside a calendar popup.
#[must_use]
pub fn month_areas(popup: Rect) -> [Rect; 2] {
	let inner = popup.inner(Margin::new(1, 1));
	let first = Rect {
		width: MONTH_WIDTH.min(inner.width),
		height: MONTH_HEIGHT.min(inner.height),
		..inner
	};
	let second_x = inner.x.saturating_add(MONTH_WIDTH + MONTH_GAP);
	let second = Rect {
		x: second_x,
		width: inner.right().saturating_sub(second_x).min(MONTH_WIDTH),
		..first
	};
	[first, second]
}

/// Day of `grid` drawn under `position`, when `area` holds that month.
#[must_use]
pub fn day_at(grid: &MonthGrid, area: Rect, position: Position) -> Option<NaiveDate> {
	if !area.contains(position) {
		return None;
	}
	let row = position.y - area.y;
	// title and weekday header
	let week = usize::from(row.checked_sub(2)?);
	let column = usize::from((position.x - area.x) / 3);
	grid.day_at(week, column)
}

fn tab_rects(row: Rect) -> [Rect; 3] {
	let mut x = row.x;
	TravelTab::ALL.map(|tab| {
		let width = (tab.title().chars().count() as u16 + 2).min(row.right().saturating_sub(x));
		let rect = Rect::new(x, row.y, width, row.height);
		x = x.saturating_add(width + 1).min(row.right());
		rect
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fields_do_not_overlap() {
		let layout = HomeLayout::new(Rect::new(0, 0, 100, 30));
		let blocks = [
			layout.from,
			layout.to,
			layout.departure,
			layout.return_date,
			layout.passengers,
			layout.submit,
		];
		for (index, a) in blocks.iter().enumerate() {
			for b in &blocks[index + 1..] {
				assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
			}
		}
	}

	#[test]
	fn clicks_resolve_to_fields() {
		let layout = HomeLayout::new(Rect::new(0, 0, 100, 30));
		let inside_to = Position::new(layout.to.x + 2, layout.to.y + 2);
		assert_eq!(layout.focus_at(inside_to), Some(FormFocus::To));

		let toggle = Position::new(layout.return_date.x + 1, layout.return_date.y);
		assert_eq!(layout.focus_at(toggle), Some(FormFocus::RoundTrip));

		let tab = Position::new(layout.tabs[2].x, layout.tabs[2].y);
		assert_eq!(layout.tab_at(tab), Some(TravelTab::Flight));
	}

	#[test]
	fn popups_stay_on_screen() {
		let layout = HomeLayout::new(Rect::new(0, 0, 60, 16));
		let popup = layout.calendar_popup(layout.passengers);
		assert!(popup.right() <= layout.area.right());
		assert!(popup.bottom() <= layout.area.bottom());
	}

	#[test]
	fn suggestion_rows_follow_the_scrolled_list() {
		let popup = Rect::new(4, 6, 40, 8);
		let first_row = Position::new(6, 7);
		assert_eq!(HomeLayout::suggestion_at(popup, first_row, 5), Some(0));
		assert_eq!(HomeLayout::suggestion_at(popup, first_row, 9), Some(4));
		assert_eq!(HomeLayout::suggestion_at(popup, Position::new(6, 12), 9), Some(9));
		assert_eq!(HomeLayout::suggestion_at(popup, Position::new(6, 6), 9), None);
	}

	#[test]
	fn day_hit_testing_follows_the_grid() {
		let grid = MonthGrid::containing(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
		let area = Rect::new(10, 5, MONTH_WIDTH, 8);
		// Saturday column of the first week holds the 1st
		assert_eq!(
			day_at(&grid, area, Position::new(10 + 6 * 3, 7)),
			NaiveDate::from_ymd_opt(2025, 3, 1)
		);
		assert_eq!(day_at(&grid, area, Position::new(10, 6)), None);
		assert_eq!(
			day_at(&grid, area, Position::new(10, 8)),
			NaiveDate::from_ymd_opt(2025, 3, 2)
		);
	}
}
