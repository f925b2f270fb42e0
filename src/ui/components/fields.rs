//! Input boxes of the bus search form.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::form::{DatePicker, LocationField};
use crate::passengers::PassengerCounter;
use crate::ui::layout::HomeLayout;
use crate::ui::theme::Theme;
use crate::validation::ValidationError;

const LOCATION_PLACEHOLDER: &str = "Enter city, terminal,...";
const DATE_PLACEHOLDER: &str = "DD / MM / YYYY 00:00";

fn input_block(theme: &Theme, focused: bool, disabled: bool) -> Block<'static> {
	let style = if disabled {
		theme.disabled
	} else {
		theme.border_style(focused)
	};
	Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(style)
}

/// Input box of a form field; a rejected field gets an error border with the
/// message along its bottom edge.
fn field_block(
	theme: &Theme,
	focused: bool,
	disabled: bool,
	error: Option<ValidationError>,
) -> Block<'static> {
	let boxed = input_block(theme, focused, disabled);
	match error {
		Some(err) => boxed
			.border_style(theme.error)
			.title_bottom(Line::styled(format!(" {err} "), theme.error)),
		None => boxed,
	}
}

fn render_label(frame: &mut Frame, block: Rect, text: &str, theme: &Theme) {
	let label = Paragraph::new(text.to_string()).style(theme.label);
	frame.render_widget(label, HomeLayout::label(block));
}

/// Render a FROM / TO box. Returns the terminal cursor position when focused.
pub fn render_location_field(
	frame: &mut Frame,
	block: Rect,
	field: &LocationField,
	focused: bool,
	error: Option<ValidationError>,
	theme: &Theme,
) -> Option<Position> {
	render_label(frame, block, field.title(), theme);
	let input = HomeLayout::input(block);
	let boxed = field_block(theme, focused, false, error);
	let inner = boxed.inner(input);
	frame.render_widget(boxed, input);

	let line = if field.value().is_empty() {
		Line::from(Span::styled(LOCATION_PLACEHOLDER, theme.placeholder))
	} else {
		Line::from(Span::styled(field.value().to_string(), theme.field))
	};
	frame.render_widget(Paragraph::new(line), inner);

	if !focused || inner.width == 0 {
		return None;
	}
	let before: String = field.value().chars().take(field.cursor()).collect();
	let offset = (before.width() as u16).min(inner.width.saturating_sub(1));
	Some(Position::new(inner.x + offset, inner.y))
}

/// Render a date box. The return picker carries the round-trip checkbox as
/// its label.
pub fn render_date_field(
	frame: &mut Frame,
	block: Rect,
	picker: &DatePicker,
	focused: bool,
	round_trip: Option<(bool, bool)>,
	error: Option<ValidationError>,
	theme: &Theme,
) {
	match round_trip {
		Some((checked, toggle_focused)) => {
			let mark = if checked { "[x]" } else { "[ ]" };
			let style = if toggle_focused {
				theme.accent
			} else {
				theme.label
			};
			let label = Paragraph::new(format!("{mark} ROUND TRIP?")).style(style);
			frame.render_widget(label, HomeLayout::label(block));
		}
		None => render_label(frame, block, picker.title(), theme),
	}

	let input = HomeLayout::input(block);
	let disabled = picker.is_disabled();
	let boxed = field_block(theme, focused || picker.is_open(), disabled, error);
	let inner = boxed.inner(input);
	frame.render_widget(boxed, input);

	let text = picker.display_text();
	let line = if disabled {
		Line::from(Span::styled(DATE_PLACEHOLDER, theme.disabled))
	} else if text.is_empty() {
		Line::from(Span::styled(DATE_PLACEHOLDER, theme.placeholder))
	} else {
		Line::from(Span::styled(text, theme.field))
	};
	frame.render_widget(Paragraph::new(line), inner);
}

/// Render the passenger spinner: count on the left, arrows on the right.
pub fn render_passengers(
	frame: &mut Frame,
	block: Rect,
	counter: &PassengerCounter,
	focused: bool,
	error: Option<ValidationError>,
	theme: &Theme,
) {
	render_label(frame, block, "NO. OF PASSENGER", theme);
	let input = HomeLayout::input(block);
	let boxed = field_block(theme, focused, false, error);
	let inner = boxed.inner(input);
	frame.render_widget(boxed, input);

	let arrow = |enabled: bool, symbol: &'static str| {
		let style = if enabled { theme.accent } else { theme.disabled };
		Span::styled(symbol, style)
	};
	let line = Line::from(vec![
		Span::styled(format!("{} ", counter.value()), theme.field),
		arrow(counter.can_increment(), "▲"),
		arrow(counter.can_decrement(), "▼"),
	]);
	frame.render_widget(Paragraph::new(line), inner);
}

pub fn render_submit(frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
	let boxed = input_block(theme, focused, false);
	let style = if focused { theme.selected_day } else { theme.accent };
	let button = Paragraph::new(Span::styled(" SEARCH ", style))
		.alignment(Alignment::Center)
		.block(boxed);
	frame.render_widget(button, area);
}
