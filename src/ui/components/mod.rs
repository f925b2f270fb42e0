//! UI building blocks shared across rendering and state modules.

/// Form input boxes.
pub mod fields;
/// Suggestion list and calendar popups.
pub mod popups;
/// Results screen body.
pub mod results;
/// Tab bar.
pub mod tabs;
/// Notification stack.
pub mod toasts;

pub use fields::{render_date_field, render_location_field, render_passengers, render_submit};
pub use popups::{render_calendar, render_suggestions};
pub use results::render_results;
pub use tabs::{render_empty_tab, render_tabs};
pub use toasts::render_toasts;
