use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::notify::{Severity, Toast, ToastQueue};
use crate::ui::theme::Theme;

const TOAST_WIDTH: u16 = 44;

/// Stack visible toasts in the top-right corner, newest at the bottom.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue, theme: &Theme) {
	let width = TOAST_WIDTH.min(area.width);
	let mut y = area.y;
	for toast in toasts.visible() {
		let height = if toast.description.is_some() { 4 } else { 3 };
		if y + height > area.bottom() {
			break;
		}
		let rect = Rect::new(area.right() - width, y, width, height);
		render_toast(frame, rect, toast, theme);
		y += height;
	}
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
	let (style, icon) = match toast.severity {
		Severity::Success => (theme.success, "✔"),
		Severity::Error => (theme.error, "✖"),
		Severity::Info => (theme.accent, "i"),
	};
	let mut lines = vec![Line::from(vec![
		Span::styled(format!("{icon} "), style),
		Span::styled(toast.title.clone(), style),
	])];
	if let Some(description) = &toast.description {
		lines.push(Line::from(Span::styled(description.clone(), theme.field)));
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(style);
	frame.render_widget(Clear, area);
	frame.render_widget(
		Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
		area,
	);
}
