use anyhow::Result;

use super::App;
use super::state::SearchOutcome;
use super::theme::{self, Theme};
use crate::form::FormDefaults;
use crate::locations::LocationCatalog;
use crate::tabs::TravelTab;

/// A small builder for configuring the interactive bus search before it runs.
pub struct SearchUi {
	catalog: LocationCatalog,
	defaults: FormDefaults,
	theme: Option<Theme>,
	start_tab: Option<TravelTab>,
	initial_route: Option<String>,
}

impl SearchUi {
	/// Create a search UI suggesting locations from `catalog`.
	pub fn new(catalog: LocationCatalog) -> Self {
		Self {
			catalog,
			defaults: FormDefaults::default(),
			theme: None,
			start_tab: None,
			initial_route: None,
		}
	}

	/// Unknown names keep the default theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_defaults(mut self, defaults: FormDefaults) -> Self {
		self.defaults = defaults;
		self
	}

	pub fn with_start_tab(mut self, tab: TravelTab) -> Self {
		self.start_tab = Some(tab);
		self
	}

	/// Start on a `path?query` route instead of the home screen.
	pub fn with_initial_route(mut self, route: impl Into<String>) -> Self {
		self.initial_route = Some(route.into());
		self
	}

	/// Assemble the [`App`] without entering the terminal.
	pub fn build(self) -> App {
		let mut app = App::new(self.catalog, self.defaults);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(tab) = self.start_tab {
			app.set_tab(tab);
		}
		if let Some(route) = self.initial_route {
			app.open(&route);
		}
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::results::ResultsView;

	#[test]
	fn builder_applies_options() {
		let app = SearchUi::new(LocationCatalog::builtin())
			.with_theme_name("light")
			.with_start_tab(TravelTab::Flight)
			.with_defaults(FormDefaults {
				from: "Hue".into(),
				passengers: 3,
				..FormDefaults::default()
			})
			.build();

		assert_eq!(app.theme, theme::by_name("light").unwrap());
		assert_eq!(app.tab(), Some(TravelTab::Flight));
		assert_eq!(app.form.from.value(), "Hue");
		assert_eq!(app.form.passengers.value(), 3);
	}

	#[test]
	fn unknown_theme_name_keeps_default() {
		let app = SearchUi::new(LocationCatalog::builtin())
			.with_theme_name("neon")
			.build();
		assert_eq!(app.theme, Theme::default());
	}

	#[test]
	fn initial_route_opens_results() {
		let app = SearchUi::new(LocationCatalog::builtin())
			.with_initial_route("/search?from=Hue&to=Hoi+An&pax=2")
			.build();
		assert_eq!(app.results(), Some(&ResultsView::NoData));
	}
}
