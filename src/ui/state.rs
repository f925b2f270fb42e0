use std::rc::Rc;

use chrono::{Local, NaiveDate};
use ratatui::layout::Rect;
use serde::Serialize;

use super::theme::Theme;
use crate::form::{FormDefaults, SearchForm};
use crate::locations::LocationCatalog;
use crate::navigation::{Navigator, Route, Router};
use crate::notify::ToastQueue;
use crate::overlay::OverlayRegistry;
use crate::query::SearchQuery;
use crate::results::ResultsView;
use crate::tabs::TravelTab;

/// What the user ended the session with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// Whether a search was submitted during the session.
	pub accepted: bool,
	/// The last submitted search.
	pub search: Option<SearchQuery>,
	/// Route shown when the session ended, e.g. `/search?mode=bus&...`.
	pub route: String,
}

pub struct App {
	pub router: Router,
	pub form: SearchForm,
	pub overlays: OverlayRegistry,
	pub toasts: ToastQueue,
	pub theme: Theme,
	pub(crate) results: Option<ResultsView>,
	pub(crate) last_area: Rect,
	pub(crate) today_override: Option<NaiveDate>,
	pub(crate) last_submitted: Option<SearchQuery>,
}

impl App {
	pub fn new(catalog: LocationCatalog, defaults: FormDefaults) -> Self {
		let overlays = OverlayRegistry::new();
		let form = SearchForm::new(Rc::new(catalog), &overlays, defaults);
		Self {
			router: Router::new(Route::Home {
				tab: TravelTab::default(),
			}),
			form,
			overlays,
			toasts: ToastQueue::new(),
			theme: Theme::default(),
			results: None,
			last_area: Rect::default(),
			today_override: None,
			last_submitted: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	/// Pin the calendar day used for validation and the calendar cursor.
	pub fn set_today(&mut self, today: NaiveDate) {
		self.today_override = Some(today);
	}

	#[must_use]
	pub fn today(&self) -> NaiveDate {
		self.today_override
			.unwrap_or_else(|| Local::now().date_naive())
	}

	/// Tab shown on the home route; `None` on other routes.
	#[must_use]
	pub fn tab(&self) -> Option<TravelTab> {
		match self.router.current() {
			Route::Home { tab } => Some(*tab),
			Route::Search { .. } => None,
		}
	}

	pub fn set_tab(&mut self, tab: TravelTab) {
		if self.tab() == Some(tab) {
			return;
		}
		self.form.close_popups();
		self.router.replace(Route::Home { tab });
		self.sync_route();
	}

	/// Open an arbitrary `path?query` target, e.g. a shared results link.
	pub fn open(&mut self, target: &str) {
		self.router.navigate(target);
		self.sync_route();
	}

	pub(crate) fn go_back(&mut self) -> bool {
		let moved = self.router.back();
		if moved {
			self.sync_route();
		}
		moved
	}

	pub(crate) fn submit(&mut self) {
		let today = self.today();
		let submitted = self
			.form
			.submit(today, &mut self.toasts, &mut self.router);
		if submitted.is_some() {
			self.last_submitted = Some(self.form.query());
			self.sync_route();
		}
	}

	/// Rebuild route-dependent state after navigation.
	pub(crate) fn sync_route(&mut self) {
		self.results = match self.router.current() {
			Route::Search { params } => Some(ResultsView::load(params, &mut self.toasts)),
			Route::Home { .. } => None,
		};
	}

	#[must_use]
	pub fn results(&self) -> Option<&ResultsView> {
		self.results.as_ref()
	}

	pub(crate) fn outcome(&self) -> SearchOutcome {
		SearchOutcome {
			accepted: self.last_submitted.is_some(),
			search: self.last_submitted.clone(),
			route: self.router.current().to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn app() -> App {
		let mut app = App::new(LocationCatalog::builtin(), FormDefaults::default());
		app.set_today(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
		app
	}

	#[test]
	fn starts_on_bus_tab() {
		let app = app();
		assert_eq!(app.tab(), Some(TravelTab::Bus));
		assert!(app.results().is_none());
	}

	#[test]
	fn valid_submit_shows_results() {
		let mut app = app();
		app.form.from.set_value("Ha Noi");
		app.form.to.set_value("Hue");
		app.form.departure.set_value(Some(app.today()));

		app.submit();

		assert!(matches!(app.router.current(), Route::Search { .. }));
		assert!(matches!(app.results(), Some(ResultsView::Loaded(_))));
		let outcome = app.outcome();
		assert!(outcome.accepted);
		assert!(outcome.route.starts_with("/search?mode=bus&from=Ha+Noi"));
	}

	#[test]
	fn invalid_submit_stays_on_form() {
		let mut app = app();
		app.submit();
		assert_eq!(app.tab(), Some(TravelTab::Bus));
		assert_eq!(app.toasts.len(), 1);
		assert!(!app.outcome().accepted);
	}

	#[test]
	fn opening_malformed_results_link_degrades() {
		let mut app = app();
		app.open("/search?from=A&to=B&dep=soon&pax=1");
		assert_eq!(app.results(), Some(&ResultsView::NoData));
		assert!(app.go_back());
		assert_eq!(app.tab(), Some(TravelTab::Bus));
	}

	#[test]
	fn switching_tabs_replaces_history_entry() {
		let mut app = app();
		app.set_tab(TravelTab::Flight);
		assert_eq!(app.tab(), Some(TravelTab::Flight));
		assert_eq!(app.router.depth(), 1);
	}
}
