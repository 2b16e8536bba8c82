//! UI Components
//!
//! Leptos components for the accounts page.

pub mod account_card;
pub mod account_form;
pub mod error_panel;
pub mod loading;
pub mod settings;
pub mod summary;

pub use account_card::AccountGrid;
pub use account_form::AccountForm;
pub use error_panel::ErrorPanel;
pub use loading::Loading;
pub use settings::EndpointSettings;
pub use summary::SummaryPanel;
