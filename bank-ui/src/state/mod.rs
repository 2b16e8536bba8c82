//! State Management
//!
//! The dashboard state machine wrapped in a Leptos signal, plus the async
//! glue that runs its requests.

mod dashboard;

pub use dashboard::{provide_dashboard_state, DashboardState};
