//! Interactive terminal UI for the bus search.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, screen geometry, rendering,
//! input handling and the widgets and colour schemes they share.

mod actions;
mod builder;
pub mod components;
pub mod layout;
pub mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::SearchUi;
pub use runtime::run;
pub use state::{App, SearchOutcome};
pub use theme::Theme;
