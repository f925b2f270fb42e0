//! Static location reference data used by the FROM / TO autocomplete fields.
//!
//! The catalogue is loaded once at startup, either from the built-in list or
//! from a JSON file supplied through configuration, and is never mutated
//! afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod matcher;

pub use matcher::filter;

/// A bus terminal or city that can be picked as origin or destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
	pub short_code: String,
	#[serde(alias = "english_name")]
	pub display_name: String,
	#[serde(alias = "code_state")]
	pub region_label: String,
}

impl Location {
	pub fn new(
		short_code: impl Into<String>,
		display_name: impl Into<String>,
		region_label: impl Into<String>,
	) -> Self {
		Self {
			short_code: short_code.into(),
			display_name: display_name.into(),
			region_label: region_label.into(),
		}
	}

	/// Text the matcher searches: every field joined by a single space.
	pub(crate) fn haystack(&self) -> String {
		format!(
			"{} {} {}",
			self.short_code, self.display_name, self.region_label
		)
	}
}

/// Errors raised while loading a catalogue file.
#[derive(Debug, Error)]
pub enum LocationCatalogError {
	#[error("failed to read location file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("location file {path} is not valid JSON: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("location file {path} does not contain any locations")]
	Empty { path: PathBuf },
}

/// Read-only list of locations in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCatalog {
	locations: Vec<Location>,
}

const BUILTIN: &[(&str, &str, &str)] = &[
	("HAN", "Ha Noi", "Northern Vietnam"),
	("HPH", "Hai Phong", "Northern Vietnam"),
	("SPA", "Sa Pa", "Lao Cai"),
	("NBH", "Ninh Binh", "Northern Vietnam"),
	("HUE", "Hue", "Thua Thien Hue"),
	("DAD", "Da Nang", "Central Vietnam"),
	("HOI", "Hoi An", "Quang Nam"),
	("NHA", "Nha Trang", "Khanh Hoa"),
	("DLT", "Da Lat", "Lam Dong"),
	("SGN", "Ho Chi Minh City", "Southern Vietnam"),
	("VTU", "Vung Tau", "Ba Ria - Vung Tau"),
	("CTH", "Can Tho", "Mekong Delta"),
];

impl Default for LocationCatalog {
	fn default() -> Self {
		Self::builtin()
	}
}

impl LocationCatalog {
	#[must_use]
	pub fn new(locations: Vec<Location>) -> Self {
		Self { locations }
	}

	/// The catalogue bundled with the binary.
	#[must_use]
	pub fn builtin() -> Self {
		let locations = BUILTIN
			.iter()
			.map(|(code, name, region)| Location::new(*code, *name, *region))
			.collect();
		Self { locations }
	}

	/// Load a catalogue from a JSON array of locations.
	pub fn from_json_file(path: &Path) -> Result<Self, LocationCatalogError> {
		let contents = fs::read_to_string(path).map_err(|source| LocationCatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let locations: Vec<Location> =
			serde_json::from_str(&contents).map_err(|source| LocationCatalogError::Parse {
				path: path.to_path_buf(),
				source,
			})?;
		if locations.is_empty() {
			return Err(LocationCatalogError::Empty {
				path: path.to_path_buf(),
			});
		}
		tracing::debug!(path = %path.display(), count = locations.len(), "loaded location catalogue");
		Ok(Self { locations })
	}

	#[must_use]
	pub fn locations(&self) -> &[Location] {
		&self.locations
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.locations.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.locations.is_empty()
	}

	/// Locations matching `query`, in catalogue order.
	#[must_use]
	pub fn search(&self, query: &str) -> Vec<&Location> {
		filter(query, &self.locations)
	}
}
