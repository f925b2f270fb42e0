use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;

use crate::tabs::TravelTab;
use crate::ui::theme::Theme;

/// Render the travel category tabs into the rectangles computed by the layout.
pub fn render_tabs(frame: &mut Frame, areas: &[Rect; 3], selected: TravelTab, theme: &Theme) {
	for (tab, area) in TravelTab::ALL.iter().zip(areas) {
		if area.width == 0 {
			continue;
		}
		let style = if *tab == selected {
			theme.tab_highlight_style()
		} else {
			theme.tab_inactive_style()
		};
		let title = Paragraph::new(tab.title())
			.alignment(Alignment::Center)
			.style(style);
		frame.render_widget(title, *area);
	}
}

/// Placeholder body for tabs without a search form.
pub fn render_empty_tab(frame: &mut Frame, area: Rect, theme: &Theme) {
	let message = Paragraph::new("No data")
		.alignment(Alignment::Center)
		.style(theme.placeholder);
	let row = Rect {
		y: area.y + area.height / 2,
		height: 1.min(area.height),
		..area
	};
	frame.render_widget(message, row);
}
