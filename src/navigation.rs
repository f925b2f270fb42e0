//! In-app routing between the search form and the results view.

use std::fmt;

use thiserror::Error;

use crate::query::QueryParams;
use crate::tabs::TravelTab;

pub const HOME_PATH: &str = "/";
pub const SEARCH_PATH: &str = "/search";

/// A screen the application can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Home { tab: TravelTab },
	Search { params: QueryParams },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no screen is registered for path '{path}'")]
pub struct RouteError {
	pub path: String,
}

impl Route {
	/// Parse a `path?query` target.
	pub fn parse(target: &str) -> Result<Self, RouteError> {
		let (path, query) = target.split_once('?').unwrap_or((target, ""));
		let params = QueryParams::parse(query);
		match path {
			"" | HOME_PATH => {
				let tab = params
					.get("tab")
					.and_then(TravelTab::from_key)
					.unwrap_or_default();
				Ok(Route::Home { tab })
			}
			SEARCH_PATH => Ok(Route::Search { params }),
			other => Err(RouteError {
				path: other.to_string(),
			}),
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Route::Home { tab } => write!(f, "{HOME_PATH}?tab={}", tab.key()),
			Route::Search { params } => write!(f, "{SEARCH_PATH}?{}", params.to_query_string()),
		}
	}
}

/// Accepts navigation requests from the form.
pub trait Navigator {
	fn navigate(&mut self, target: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
	fn navigate(&mut self, target: &str) {
		(**self).navigate(target);
	}
}

/// History stack of visited routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
	history: Vec<Route>,
}

impl Router {
	#[must_use]
	pub fn new(initial: Route) -> Self {
		Self {
			history: vec![initial],
		}
	}

	#[must_use]
	pub fn current(&self) -> &Route {
		// history is never empty: `back` keeps the first entry
		&self.history[self.history.len() - 1]
	}

	pub fn push(&mut self, route: Route) {
		tracing::info!(route = %route, "navigate");
		self.history.push(route);
	}

	/// Swap the current entry without growing history.
	pub fn replace(&mut self, route: Route) {
		if let Some(current) = self.history.last_mut() {
			*current = route;
		}
	}

	/// Return to the previous route. Returns `false` at the first entry.
	pub fn back(&mut self) -> bool {
		if self.history.len() > 1 {
			self.history.pop();
			true
		} else {
			false
		}
	}

	#[must_use]
	pub fn depth(&self) -> usize {
		self.history.len()
	}
}

impl Navigator for Router {
	fn navigate(&mut self, target: &str) {
		match Route::parse(target) {
			Ok(route) => self.push(route),
			Err(err) => tracing::warn!(%err, "navigation ignored"),
		}
	}
}
