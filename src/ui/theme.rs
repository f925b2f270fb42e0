//! Colour schemes for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub label: Style,
	pub field: Style,
	pub focused: Style,
	pub placeholder: Style,
	pub disabled: Style,
	pub accent: Style,
	pub marked_day: Style,
	pub selected_day: Style,
	pub error: Style,
	pub success: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		self.label
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused { self.focused } else { self.field }
	}
}

/// Definition for a theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	label: Style::new().fg(Color::Rgb(124, 141, 166)),
	field: Style::new().fg(Color::Rgb(148, 163, 184)),
	focused: Style::new().fg(Color::Rgb(25, 192, 255)),
	placeholder: Style::new().fg(Color::Rgb(100, 116, 139)),
	disabled: Style::new()
		.fg(Color::Rgb(71, 85, 105))
		.add_modifier(Modifier::DIM),
	accent: Style::new()
		.fg(Color::Rgb(25, 192, 255))
		.add_modifier(Modifier::BOLD),
	marked_day: Style::new().fg(Color::Rgb(239, 68, 68)),
	selected_day: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(25, 192, 255)),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	success: Style::new().fg(Color::Rgb(74, 222, 128)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(235, 249, 255)),
	label: Style::new().fg(Color::Rgb(124, 141, 166)),
	field: Style::new().fg(Color::Rgb(29, 35, 56)),
	focused: Style::new().fg(Color::Rgb(0, 102, 153)),
	placeholder: Style::new().fg(Color::Rgb(150, 150, 150)),
	disabled: Style::new()
		.fg(Color::Rgb(180, 180, 180))
		.add_modifier(Modifier::DIM),
	accent: Style::new()
		.fg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	marked_day: Style::new().fg(Color::Rgb(220, 38, 38)),
	selected_day: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(0, 102, 153)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	success: Style::new().fg(Color::Rgb(21, 128, 61)),
};

const BUILT_IN: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark", "default"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &[],
	},
];

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

/// Canonical names of the bundled themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILT_IN.iter().map(|definition| definition.name)
}

/// Look a theme up by name or alias, ignoring case and surrounding space.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	BUILT_IN
		.iter()
		.find(|definition| {
			definition.name == normalized || definition.aliases.contains(&normalized.as_str())
		})
		.map(|definition| definition.theme)
}
