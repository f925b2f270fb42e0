use std::rc::Rc;

use crate::locations::{Location, LocationCatalog};

/// Free-text location input with a suggestion list.
///
/// The field owns its text; [`LocationField::set_value`] is the only way for
/// outside code to override it.
#[derive(Debug, Clone)]
pub struct LocationField {
	title: &'static str,
	text: String,
	cursor: usize,
	open: bool,
	highlighted: usize,
	catalog: Rc<LocationCatalog>,
}

impl LocationField {
	#[must_use]
	pub fn new(title: &'static str, catalog: Rc<LocationCatalog>) -> Self {
		Self {
			title,
			text: String::new(),
			cursor: 0,
			open: false,
			highlighted: 0,
			catalog,
		}
	}

	#[must_use]
	pub fn title(&self) -> &'static str {
		self.title
	}

	#[must_use]
	pub fn value(&self) -> &str {
		&self.text
	}

	/// Cursor position in characters.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn set_value(&mut self, value: impl Into<String>) {
		self.text = value.into();
		self.cursor = self.text.chars().count();
		self.highlighted = 0;
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn open(&mut self) {
		self.open = true;
		self.clamp_highlight();
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	#[must_use]
	pub fn suggestions(&self) -> Vec<&Location> {
		self.catalog.search(&self.text)
	}

	#[must_use]
	pub fn highlighted(&self) -> usize {
		self.highlighted
	}

	pub fn insert_char(&mut self, ch: char) {
		let at = self.byte_offset(self.cursor);
		self.text.insert(at, ch);
		self.cursor += 1;
		self.edited();
	}

	pub fn backspace(&mut self) {
		if self.cursor == 0 {
			return;
		}
		let at = self.byte_offset(self.cursor - 1);
		self.text.remove(at);
		self.cursor -= 1;
		self.edited();
	}

	pub fn delete(&mut self) {
		if self.cursor >= self.text.chars().count() {
			return;
		}
		let at = self.byte_offset(self.cursor);
		self.text.remove(at);
		self.edited();
	}

	pub fn move_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_right(&mut self) {
		self.cursor = (self.cursor + 1).min(self.text.chars().count());
	}

	pub fn move_home(&mut self) {
		self.cursor = 0;
	}

	pub fn move_end(&mut self) {
		self.cursor = self.text.chars().count();
	}

	pub fn highlight_next(&mut self) {
		if !self.open {
			self.open();
			return;
		}
		let len = self.suggestions().len();
		if self.highlighted + 1 < len {
			self.highlighted += 1;
		}
	}

	pub fn highlight_prev(&mut self) {
		self.highlighted = self.highlighted.saturating_sub(1);
	}

	/// Accept the suggestion at `index` of the current list.
	///
	/// Returns `false` when the index is out of range.
	pub fn select(&mut self, index: usize) -> bool {
		let Some(name) = self
			.suggestions()
			.get(index)
			.map(|location| location.display_name.clone())
		else {
			return false;
		};
		self.set_value(name);
		self.open = false;
		true
	}

	pub fn select_highlighted(&mut self) -> bool {
		self.open && self.select(self.highlighted)
	}

	fn edited(&mut self) {
		self.open = true;
		self.highlighted = 0;
	}

	fn clamp_highlight(&mut self) {
		let len = self.suggestions().len();
		if self.highlighted >= len {
			self.highlighted = len.saturating_sub(1);
		}
	}

	fn byte_offset(&self, chars: usize) -> usize {
		self.text
			.char_indices()
			.nth(chars)
			.map_or(self.text.len(), |(offset, _)| offset)
	}
}
