use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::results::{NO_DATA_MESSAGE, ResultsView};
use crate::ui::theme::Theme;

pub fn render_results(frame: &mut Frame, area: Rect, view: &ResultsView, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.field)
		.title(Span::styled(" Bus search ", theme.accent));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let Some(rows) = view.rows() else {
		let message = Paragraph::new(NO_DATA_MESSAGE)
			.alignment(Alignment::Center)
			.style(theme.placeholder);
		let middle = Rect {
			y: inner.y + inner.height / 2,
			height: 1.min(inner.height),
			..inner
		};
		frame.render_widget(message, middle);
		return;
	};

	let slots = Layout::default()
		.direction(Direction::Vertical)
		.constraints(rows.iter().map(|_| Constraint::Length(2)))
		.margin(1)
		.split(inner);
	for ((label, value), slot) in rows.into_iter().zip(slots.iter()) {
		let line = Line::from(vec![
			Span::styled(format!("{label} "), theme.label),
			Span::styled(value, theme.accent),
		]);
		frame.render_widget(Paragraph::new(line), *slot);
	}
}
