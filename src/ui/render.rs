use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::components::{
	render_calendar, render_date_field, render_empty_tab, render_location_field, render_passengers,
	render_results, render_submit, render_suggestions, render_tabs, render_toasts,
};
use super::layout::HomeLayout;
use crate::form::FormFocus;
use crate::tabs::TravelTab;
use crate::validation::Field;

const FORM_HINT: &str = "Tab/Shift-Tab move · Enter select · Esc close · F1-F3 tabs · Ctrl-C quit";
const RESULTS_HINT: &str = "Esc back · q quit";
const EMPTY_HINT: &str = "F1-F3 tabs · Esc quit";

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		self.last_area = area;
		let layout = HomeLayout::new(area);

		let selected = self.tab().unwrap_or(TravelTab::Bus);
		render_tabs(frame, &layout.tabs, selected, &self.theme);

		let body = Rect {
			y: layout.body.y.saturating_add(1),
			height: layout.hint.y.saturating_sub(layout.body.y + 1),
			..layout.body
		};

		let hint = if let Some(view) = &self.results {
			render_results(frame, body, view, &self.theme);
			RESULTS_HINT
		} else if selected.has_form() {
			self.draw_form(frame, &layout);
			FORM_HINT
		} else {
			render_empty_tab(frame, body, &self.theme);
			EMPTY_HINT
		};
		let hint_line = Line::from(Span::styled(hint, self.theme.placeholder));
		frame.render_widget(Paragraph::new(hint_line), layout.hint);

		render_toasts(frame, layout.area, &self.toasts, &self.theme);
	}

	fn draw_form(&self, frame: &mut Frame, layout: &HomeLayout) {
		let focus = self.form.focus();
		let theme = &self.theme;

		let from_cursor = render_location_field(
			frame,
			layout.from,
			&self.form.from,
			focus == FormFocus::From,
			self.form.field_error(Field::From),
			theme,
		);
		let to_cursor = render_location_field(
			frame,
			layout.to,
			&self.form.to,
			focus == FormFocus::To,
			self.form.field_error(Field::To),
			theme,
		);
		render_date_field(
			frame,
			layout.departure,
			&self.form.departure,
			focus == FormFocus::Departure,
			None,
			self.form.field_error(Field::DepartureDate),
			theme,
		);
		render_date_field(
			frame,
			layout.return_date,
			&self.form.return_date,
			focus == FormFocus::Return,
			Some((self.form.is_round_trip(), focus == FormFocus::RoundTrip)),
			self.form.field_error(Field::ReturnDate),
			theme,
		);
		render_passengers(
			frame,
			layout.passengers,
			&self.form.passengers,
			focus == FormFocus::Passengers,
			self.form.field_error(Field::Passengers),
			theme,
		);
		render_submit(frame, layout.submit, focus == FormFocus::Submit, theme);

		// popups last so they sit on top of the fields below them
		for (field, block) in [(&self.form.from, layout.from), (&self.form.to, layout.to)] {
			if field.is_open() {
				let popup = layout.suggestions_popup(block, field.suggestions().len());
				render_suggestions(frame, popup, field, theme);
			}
		}

		let today = self.today();
		for (picker, block) in [
			(&self.form.departure, layout.departure),
			(&self.form.return_date, layout.return_date),
		] {
			if !picker.is_open() {
				continue;
			}
			let popup = layout.calendar_popup(block);
			render_calendar(frame, popup, picker, today, theme);
			self.overlays
				.set_bounds(picker.overlay_id(), vec![HomeLayout::input(block), popup]);
		}

		if let Some(position) = from_cursor.or(to_cursor) {
			frame.set_cursor_position(position);
		}
	}
}
