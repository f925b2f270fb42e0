use anyhow::Result;
use coach::{SearchOutcome, SearchUi};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUi::new(config.catalog()?)
			.with_theme_name(&config.theme)
			.with_defaults(config.form.clone())
			.with_start_tab(config.start_tab);
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.search_ui.run()
	}
}
