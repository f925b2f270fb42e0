//! Floating suggestion list and calendar.

use chrono::{Datelike, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::form::calendar::{MonthGrid, WEEKDAY_LABELS, is_marked};
use crate::form::{DatePicker, LocationField};
use crate::ui::layout::{HomeLayout, month_areas};
use crate::ui::theme::Theme;

fn popup_block(theme: &Theme) -> Block<'static> {
	Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.focused)
}

pub fn render_suggestions(frame: &mut Frame, area: Rect, field: &LocationField, theme: &Theme) {
	frame.render_widget(Clear, area);
	let suggestions = field.suggestions();
	if suggestions.is_empty() {
		let empty = Paragraph::new("No matches found")
			.style(theme.placeholder)
			.block(popup_block(theme));
		frame.render_widget(empty, area);
		return;
	}

	let items: Vec<ListItem> = suggestions
		.iter()
		.map(|location| {
			ListItem::new(Line::from(vec![
				Span::styled(
					format!("{} - {}", location.short_code, location.display_name),
					theme.field.add_modifier(Modifier::BOLD),
				),
				Span::styled(format!("  {}", location.region_label), theme.label),
			]))
		})
		.collect();
	let list = List::new(items)
		.block(popup_block(theme))
		.highlight_style(theme.selected_day);
	let highlighted = field.highlighted();
	let mut state = ListState::default()
		.with_selected(Some(highlighted))
		.with_offset(HomeLayout::suggestion_offset(area, highlighted));
	frame.render_stateful_widget(list, area, &mut state);
}

pub fn render_calendar(
	frame: &mut Frame,
	area: Rect,
	picker: &DatePicker,
	today: NaiveDate,
	theme: &Theme,
) {
	frame.render_widget(Clear, area);
	frame.render_widget(popup_block(theme), area);

	let months = picker.visible_months(today);
	for (grid, month_area) in months.iter().zip(month_areas(area)) {
		if month_area.width == 0 || month_area.height == 0 {
			continue;
		}
		let lines = month_lines(grid, picker, today, theme);
		frame.render_widget(Paragraph::new(lines), month_area);
	}
}

fn month_lines(
	grid: &MonthGrid,
	picker: &DatePicker,
	today: NaiveDate,
	theme: &Theme,
) -> Vec<Line<'static>> {
	let mut lines = Vec::with_capacity(grid.weeks.len() + 2);
	lines.push(Line::from(Span::styled(grid.title(), theme.accent)).alignment(Alignment::Center));
	lines.push(Line::from(
		WEEKDAY_LABELS
			.iter()
			.map(|label| Span::styled(format!("{label} "), theme.label))
			.collect::<Vec<_>>(),
	));

	for week in &grid.weeks {
		let spans = week
			.iter()
			.map(|day| match day {
				Some(date) => Span::styled(
					format!("{:>2} ", date.day()),
					day_style(*date, picker, today, theme),
				),
				None => Span::raw("   "),
			})
			.collect::<Vec<_>>();
		lines.push(Line::from(spans));
	}
	lines
}

fn day_style(
	date: NaiveDate,
	picker: &DatePicker,
	today: NaiveDate,
	theme: &Theme,
) -> ratatui::style::Style {
	let mut style = if is_marked(date) {
		theme.marked_day
	} else {
		theme.field
	};
	if date == today {
		style = style.add_modifier(Modifier::UNDERLINED);
	}
	if picker.value() == Some(date) {
		style = theme.selected_day;
	}
	if picker.cursor() == Some(date) {
		style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
	}
	style
}
