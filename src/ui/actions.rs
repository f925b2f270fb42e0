use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::App;
use super::layout::{HomeLayout, day_at, month_areas};
use super::state::SearchOutcome;
use crate::form::{DatePicker, FormFocus, LocationField};
use crate::tabs::TravelTab;

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<SearchOutcome>> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Ok(Some(self.outcome()));
		}
		if let KeyCode::F(number) = key.code
			&& let Some(tab) = TravelTab::ALL.get(usize::from(number).wrapping_sub(1))
		{
			self.set_tab(*tab);
			return Ok(None);
		}

		if self.results.is_some() {
			return Ok(self.handle_results_key(key));
		}

		match self.tab() {
			Some(TravelTab::Bus) => Ok(self.handle_form_key(key, now)),
			_ => match key.code {
				KeyCode::Esc | KeyCode::Char('q') => Ok(Some(self.outcome())),
				_ => Ok(None),
			},
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Char('q') => Some(self.outcome()),
			KeyCode::Esc | KeyCode::Backspace => {
				if !self.go_back() {
					self.set_tab(TravelTab::Bus);
				}
				None
			}
			_ => None,
		}
	}

	fn handle_form_key(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Tab => {
				self.form.focus_next();
				return None;
			}
			KeyCode::BackTab => {
				self.form.focus_prev();
				return None;
			}
			KeyCode::Esc => {
				if self.any_popup_open() {
					self.form.close_popups();
					return None;
				}
				return Some(self.outcome());
			}
			_ => {}
		}

		let today = self.today();
		match self.form.focus() {
			FormFocus::From => location_key(&mut self.form.from, key),
			FormFocus::To => location_key(&mut self.form.to, key),
			FormFocus::Departure => date_key(&mut self.form.departure, key, now, today),
			FormFocus::Return => date_key(&mut self.form.return_date, key, now, today),
			FormFocus::RoundTrip => {
				if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
					self.form.toggle_round_trip();
				}
			}
			FormFocus::Passengers => match key.code {
				KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => self.form.passengers.increment(),
				KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => self.form.passengers.decrement(),
				_ => {}
			},
			FormFocus::Submit => {
				if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
					self.submit();
				}
			}
		}
		None
	}

	fn any_popup_open(&self) -> bool {
		self.form.from.is_open() || self.form.to.is_open() || self.overlays.active().is_some()
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let position = Position::new(mouse.column, mouse.row);
		self.overlays.pointer_down(position, now);

		let layout = HomeLayout::new(self.last_area);
		if let Some(tab) = layout.tab_at(position) {
			self.set_tab(tab);
			return;
		}
		if self.tab() != Some(TravelTab::Bus) {
			return;
		}

		if self.click_suggestion(&layout, position) || self.click_calendar(&layout, position) {
			return;
		}

		let Some(focus) = layout.focus_at(position) else {
			self.form.from.close();
			self.form.to.close();
			return;
		};
		self.form.set_focus(focus);
		let today = self.today();
		match focus {
			FormFocus::From => self.form.from.open(),
			FormFocus::To => self.form.to.open(),
			FormFocus::Departure => self.form.departure.toggle(now, today),
			FormFocus::Return => self.form.return_date.toggle(now, today),
			FormFocus::RoundTrip => self.form.toggle_round_trip(),
			FormFocus::Passengers => self.click_passenger_arrows(layout.passengers, position),
			FormFocus::Submit => self.submit(),
		}
	}

	/// Pick a suggestion when the press lands in an open list.
	fn click_suggestion(&mut self, layout: &HomeLayout, position: Position) -> bool {
		for (field, block) in [
			(&mut self.form.from, layout.from),
			(&mut self.form.to, layout.to),
		] {
			if !field.is_open() {
				continue;
			}
			let popup = layout.suggestions_popup(block, field.suggestions().len());
			if popup.contains(position) {
				let highlighted = field.highlighted();
				if let Some(index) = HomeLayout::suggestion_at(popup, position, highlighted) {
					field.select(index);
				}
				return true;
			}
			if !block.contains(position) {
				field.close();
			}
		}
		false
	}

	/// Pick a day when the press lands in the open calendar.
	fn click_calendar(&mut self, layout: &HomeLayout, position: Position) -> bool {
		let today = self.today();
		for (picker, block) in [
			(&mut self.form.departure, layout.departure),
			(&mut self.form.return_date, layout.return_date),
		] {
			if !picker.is_open() {
				continue;
			}
			let popup = layout.calendar_popup(block);
			if !popup.contains(position) {
				continue;
			}
			let months = picker.visible_months(today);
			let picked = months
				.iter()
				.zip(month_areas(popup))
				.find_map(|(grid, area)| day_at(grid, area, position));
			if let Some(date) = picked {
				picker.select(date);
			}
			return true;
		}
		false
	}

	fn click_passenger_arrows(&mut self, block: Rect, position: Position) {
		let inner_x = HomeLayout::input(block).x + 1;
		let digits = self.form.passengers.value().to_string().len() as u16;
		let up = inner_x + digits + 1;
		if position.x == up {
			self.form.passengers.increment();
		} else if position.x == up + 1 {
			self.form.passengers.decrement();
		}
	}
}

fn location_key(field: &mut LocationField, key: KeyEvent) {
	match key.code {
		KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.insert_char(ch),
		KeyCode::Backspace => field.backspace(),
		KeyCode::Delete => field.delete(),
		KeyCode::Left => field.move_left(),
		KeyCode::Right => field.move_right(),
		KeyCode::Home => field.move_home(),
		KeyCode::End => field.move_end(),
		KeyCode::Down => field.highlight_next(),
		KeyCode::Up => field.highlight_prev(),
		KeyCode::Enter => {
			if !field.select_highlighted() {
				field.open();
			}
		}
		_ => {}
	}
}

fn date_key(picker: &mut DatePicker, key: KeyEvent, now: Instant, today: NaiveDate) {
	if !picker.is_open() {
		if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down) {
			picker.toggle(now, today);
		}
		return;
	}
	match key.code {
		KeyCode::Left => picker.move_cursor_days(-1),
		KeyCode::Right => picker.move_cursor_days(1),
		KeyCode::Up => picker.move_cursor_days(-7),
		KeyCode::Down => picker.move_cursor_days(7),
		KeyCode::PageUp => picker.move_cursor_months(-1),
		KeyCode::PageDown => picker.move_cursor_months(1),
		KeyCode::Enter | KeyCode::Char(' ') => picker.select_cursor(),
		_ => {}
	}
}
