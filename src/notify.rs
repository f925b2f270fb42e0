//! Fire-and-forget user notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Success,
	Error,
	Info,
}

/// A short message with a title and optional detail line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub severity: Severity,
	pub title: String,
	pub description: Option<String>,
}

impl Toast {
	pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			severity: Severity::Success,
			title: title.into(),
			description: Some(description.into()),
		}
	}

	pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			title: title.into(),
			description: Some(description.into()),
		}
	}

	pub fn info(title: impl Into<String>) -> Self {
		Self {
			severity: Severity::Info,
			title: title.into(),
			description: None,
		}
	}
}

/// Sink for toasts raised by the form and the results view.
pub trait Notifier {
	fn notify(&mut self, toast: Toast);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
	fn notify(&mut self, toast: Toast) {
		(**self).notify(toast);
	}
}

/// Collects toasts for display and expires them after [`TOAST_LIFETIME`].
#[derive(Debug, Default)]
pub struct ToastQueue {
	entries: VecDeque<(Toast, Instant)>,
}

impl ToastQueue {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push_at(&mut self, toast: Toast, now: Instant) {
		self.entries.push_back((toast, now + TOAST_LIFETIME));
		while self.entries.len() > MAX_VISIBLE {
			self.entries.pop_front();
		}
	}

	/// Drop toasts whose lifetime has ended.
	pub fn expire(&mut self, now: Instant) {
		self.entries.retain(|(_, deadline)| *deadline > now);
	}

	/// Visible toasts, oldest first.
	pub fn visible(&self) -> impl Iterator<Item = &Toast> {
		self.entries.iter().map(|(toast, _)| toast)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Notifier for ToastQueue {
	fn notify(&mut self, toast: Toast) {
		match toast.severity {
			Severity::Error => tracing::warn!(title = %toast.title, description = ?toast.description, "error toast"),
			_ => tracing::info!(title = %toast.title, "toast"),
		}
		self.push_at(toast, Instant::now());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toasts_expire_after_lifetime() {
		let mut queue = ToastQueue::new();
		let now = Instant::now();
		queue.push_at(Toast::info("hello"), now);

		queue.expire(now + Duration::from_secs(1));
		assert_eq!(queue.len(), 1);

		queue.expire(now + TOAST_LIFETIME);
		assert!(queue.is_empty());
	}

	#[test]
	fn only_the_newest_toasts_are_kept() {
		let mut queue = ToastQueue::new();
		let now = Instant::now();
		for index in 0..5 {
			queue.push_at(Toast::info(format!("toast {index}")), now);
		}
		let titles: Vec<_> = queue.visible().map(|toast| toast.title.as_str()).collect();
		assert_eq!(titles, ["toast 2", "toast 3", "toast 4"]);
	}
}
