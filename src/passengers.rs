//! Bounded passenger counter backing the spinner control.

use std::fmt;

pub const DEFAULT_MIN_PASSENGERS: u32 = 1;
pub const DEFAULT_MAX_PASSENGERS: u32 = 99;

type Observer = Box<dyn FnMut(u32)>;

/// Integer in `[min, max]` that notifies an observer on every change.
///
/// Hitting either bound is absorbed silently.
pub struct PassengerCounter {
	value: u32,
	min: u32,
	max: u32,
	observer: Option<Observer>,
}

impl fmt::Debug for PassengerCounter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PassengerCounter")
			.field("value", &self.value)
			.field("min", &self.min)
			.field("max", &self.max)
			.field("observer", &self.observer.is_some())
			.finish()
	}
}

impl Default for PassengerCounter {
	fn default() -> Self {
		Self::new(
			DEFAULT_MIN_PASSENGERS,
			DEFAULT_MIN_PASSENGERS,
			DEFAULT_MAX_PASSENGERS,
		)
	}
}

impl PassengerCounter {
	/// Build a counter; `initial` is clamped into `[min, max]`.
	///
	/// `max` is raised to `min` when the bounds are inverted.
	#[must_use]
	pub fn new(initial: u32, min: u32, max: u32) -> Self {
		let max = max.max(min);
		Self {
			value: initial.clamp(min, max),
			min,
			max,
			observer: None,
		}
	}

	/// Register the callback invoked with each new value.
	#[must_use]
	pub fn with_observer(mut self, observer: impl FnMut(u32) + 'static) -> Self {
		self.observer = Some(Box::new(observer));
		self
	}

	#[must_use]
	pub fn value(&self) -> u32 {
		self.value
	}

	#[must_use]
	pub fn min(&self) -> u32 {
		self.min
	}

	#[must_use]
	pub fn max(&self) -> u32 {
		self.max
	}

	#[must_use]
	pub fn can_increment(&self) -> bool {
		self.value < self.max
	}

	#[must_use]
	pub fn can_decrement(&self) -> bool {
		self.value > self.min
	}

	pub fn increment(&mut self) {
		if self.can_increment() {
			self.change_to(self.value + 1);
		}
	}

	pub fn decrement(&mut self) {
		if self.can_decrement() {
			self.change_to(self.value - 1);
		}
	}

	/// Override the value from outside the widget, clamped into range.
	pub fn set(&mut self, value: u32) {
		let value = value.clamp(self.min, self.max);
		if value != self.value {
			self.change_to(value);
		}
	}

	fn change_to(&mut self, value: u32) {
		self.value = value;
		if let Some(observer) = self.observer.as_mut() {
			observer(value);
		}
	}
}
