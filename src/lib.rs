//! Core crate exports for the `coach` bus search terminal interface.
//!
//! The domain modules (location matching, validation, the passenger counter,
//! the query codec and the overlay registry) are independent of the terminal.
//! [`ui`] wires them into an interactive form; the root re-exports what
//! embedders need without digging through the module hierarchy.

pub mod app_dirs;
pub mod form;
pub mod locations;
pub mod logging;
pub mod navigation;
pub mod notify;
pub mod overlay;
pub mod passengers;
pub mod query;
pub mod results;
pub mod tabs;
pub mod ui;
pub mod validation;

pub use form::{FormDefaults, SearchForm};
pub use locations::{Location, LocationCatalog, LocationCatalogError};
pub use navigation::{Navigator, Route, Router};
pub use notify::{Notifier, Severity, Toast, ToastQueue};
pub use overlay::{OverlayId, OverlayRegistry};
pub use passengers::PassengerCounter;
pub use query::{DecodeError, QueryParams, SearchQuery, decode, encode};
pub use results::ResultsView;
pub use tabs::TravelTab;
pub use ui::{App, SearchOutcome, SearchUi, Theme, run};
pub use validation::{Field, ValidationError, validate_dates, validate_form};
