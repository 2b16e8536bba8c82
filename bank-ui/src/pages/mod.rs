//! Pages
//!
//! The application has a single page.

pub mod accounts;

pub use accounts::AccountsPage;
