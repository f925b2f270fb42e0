//! Coordination for popups that must never overlap.
//!
//! Every overlay widget (the calendar popups) registers with a shared
//! [`OverlayRegistry`] handle it receives at construction. Opening one overlay
//! implicitly closes whichever overlay was open before; the last claimer wins.
//! Pointer presses outside the open overlay's bounds dismiss it, except during
//! a short window right after opening so the press that opened it does not
//! immediately close it again.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

/// Delay after opening before outside presses are honoured.
pub const OUTSIDE_PRESS_SUPPRESSION: Duration = Duration::from_millis(100);

/// Identifier handed out by [`OverlayRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u32);

impl fmt::Display for OverlayId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "overlay-{}", self.0)
	}
}

#[derive(Debug, Default)]
struct RegistryState {
	next_id: u32,
	active: Option<OverlayId>,
	opened_at: Option<Instant>,
	bounds: HashMap<OverlayId, Vec<Rect>>,
}

/// Shared handle to the single "currently open overlay" slot.
///
/// Cloning the handle shares the slot. The registry lives on the UI thread.
#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
	state: Rc<RefCell<RegistryState>>,
}

impl OverlayRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocate a fresh identifier for an overlay widget.
	pub fn register(&self) -> OverlayId {
		let mut state = self.state.borrow_mut();
		let id = OverlayId(state.next_id);
		state.next_id += 1;
		id
	}

	/// Make `id` the open overlay, closing any other.
	pub fn open(&self, id: OverlayId, now: Instant) {
		let mut state = self.state.borrow_mut();
		if let Some(previous) = state.active
			&& previous != id
		{
			tracing::debug!(%previous, next = %id, "overlay replaced");
		}
		state.active = Some(id);
		state.opened_at = Some(now);
	}

	/// Close `id` if it is the open overlay. Stale closes are ignored.
	pub fn close(&self, id: OverlayId) {
		let mut state = self.state.borrow_mut();
		if state.active == Some(id) {
			state.active = None;
			state.opened_at = None;
		}
	}

	#[must_use]
	pub fn is_open(&self, id: OverlayId) -> bool {
		self.state.borrow().active == Some(id)
	}

	#[must_use]
	pub fn active(&self) -> Option<OverlayId> {
		self.state.borrow().active
	}

	/// Record the screen areas owned by `id` (anchor field and popup).
	pub fn set_bounds(&self, id: OverlayId, rects: Vec<Rect>) {
		self.state.borrow_mut().bounds.insert(id, rects);
	}

	/// Offer a pointer press to the registry.
	///
	/// Returns the overlay that was dismissed, if the press landed outside the
	/// open overlay after the suppression window elapsed.
	pub fn pointer_down(&self, position: Position, now: Instant) -> Option<OverlayId> {
		let mut state = self.state.borrow_mut();
		let active = state.active?;
		let armed = state
			.opened_at
			.is_none_or(|opened| now.saturating_duration_since(opened) >= OUTSIDE_PRESS_SUPPRESSION);
		if !armed {
			return None;
		}

		let inside = state
			.bounds
			.get(&active)
			.is_some_and(|rects| rects.iter().any(|rect| rect.contains(position)));
		if inside {
			return None;
		}

		state.active = None;
		state.opened_at = None;
		tracing::debug!(overlay = %active, x = position.x, y = position.y, "overlay dismissed by outside press");
		Some(active)
	}
}
