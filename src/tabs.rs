//! Travel categories shown in the tab bar.

use std::fmt;

/// A top-level tab. Only [`TravelTab::Bus`] has a search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TravelTab {
	#[default]
	Bus,
	Hotel,
	Flight,
}

impl TravelTab {
	pub const ALL: [TravelTab; 3] = [TravelTab::Bus, TravelTab::Hotel, TravelTab::Flight];

	/// Key used in `?tab=` and configuration files.
	#[must_use]
	pub fn key(self) -> &'static str {
		match self {
			TravelTab::Bus => "bus",
			TravelTab::Hotel => "hotel",
			TravelTab::Flight => "flight",
		}
	}

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			TravelTab::Bus => "Bus & Shuttle",
			TravelTab::Hotel => "Hotel & Accommodation",
			TravelTab::Flight => "Flight",
		}
	}

	#[must_use]
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|tab| tab.key().eq_ignore_ascii_case(key.trim()))
	}

	#[must_use]
	pub fn index(self) -> usize {
		Self::ALL
			.iter()
			.position(|tab| *tab == self)
			.unwrap_or_default()
	}

	#[must_use]
	pub fn has_form(self) -> bool {
		matches!(self, TravelTab::Bus)
	}
}

impl fmt::Display for TravelTab {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}
