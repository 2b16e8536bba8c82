//! Dashboard State
//!
//! Reactive wrapper around the core [`Dashboard`]: every transition goes
//! through the signal so the page re-renders, and every request the state
//! machine asks for is run with `spawn_local`.

use bank_dashboard::accounts::AccountType;
use bank_dashboard::dashboard::{Dashboard, PageView, Troubleshooting};
use bank_dashboard::graphql::FetchPolicy;
use leptos::*;

use crate::api::GraphQLClient;

/// Dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    client: GraphQLClient,
    dashboard: RwSignal<Dashboard>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state(client: GraphQLClient) {
    provide_context(DashboardState {
        client,
        dashboard: create_rw_signal(Dashboard::new()),
    });
}

impl DashboardState {
    /// Derived view; tracks the underlying signal
    pub fn view(&self) -> PageView {
        self.dashboard.with(Dashboard::view)
    }

    pub fn troubleshooting(&self) -> Troubleshooting {
        Troubleshooting::for_endpoint(self.client.endpoint())
            .endpoint_setting("the endpoint field at the bottom of the page")
    }

    /// Issue the read on mount
    pub fn load(&self) {
        if let Some(policy) = self.dashboard.try_update(Dashboard::load) {
            self.fetch(policy);
        }
    }

    pub fn set_amount(&self, amount: String) {
        self.dashboard.update(|d| d.set_amount(amount));
    }

    pub fn set_account_type(&self, account_type: AccountType) {
        self.dashboard.update(|d| d.set_account_type(account_type));
    }

    /// Send the create mutation for the current draft, if it is sendable
    pub fn submit(&self) {
        let Some(input) = self.dashboard.try_update(Dashboard::submit).flatten() else {
            return;
        };

        let state = self.clone();
        spawn_local(async move {
            let result = state.client.create_account(input).await;
            if let Some(policy) = state.dashboard.try_update(|d| d.finish_submit(result)).flatten() {
                state.fetch(policy);
            }
        });
    }

    fn fetch(&self, policy: FetchPolicy) {
        let state = self.clone();
        spawn_local(async move {
            let result = state.client.fetch_accounts(policy).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("GraphQL error: {}", e).into());
            }
            state.dashboard.update(|d| d.finish_load(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::DEFAULT_ENDPOINT;

    fn with_state(test: impl FnOnce(DashboardState)) {
        let runtime = create_runtime();
        test(DashboardState {
            client: GraphQLClient::new(DEFAULT_ENDPOINT),
            dashboard: create_rw_signal(Dashboard::new()),
        });
        runtime.dispose();
    }

    #[test]
    fn test_starts_pending_with_browser_help() {
        with_state(|state| {
            assert_eq!(state.view(), PageView::Pending);

            let help = state.troubleshooting();
            assert_eq!(help.endpoint, DEFAULT_ENDPOINT);
            assert!(help.steps()[0].contains("the endpoint field at the bottom of the page"));
        });
    }

    #[test]
    fn test_form_edits_reach_the_draft() {
        with_state(|state| {
            state.set_amount("1500.50".to_string());
            state.set_account_type(AccountType::Savings);

            state.dashboard.with(|d| {
                assert_eq!(d.draft().amount, "1500.50");
                assert_eq!(d.draft().account_type, AccountType::Savings);
            });
        });
    }

    #[test]
    fn test_unsendable_submit_stays_local() {
        with_state(|state| {
            state.submit();
            state.dashboard.with(|d| assert!(!d.is_creating() && d.submit_error().is_none()));

            state.set_amount("lots".to_string());
            state.submit();
            state.dashboard.with(|d| {
                assert!(!d.is_creating());
                assert_eq!(d.submit_error(), Some("Invalid amount: lots"));
            });
        });
    }

    #[test]
    fn test_submit_is_ignored_while_creating() {
        with_state(|state| {
            state.dashboard.update(|d| {
                d.set_amount("5");
                d.submit();
            });
            state.set_amount("6".to_string());
            state.submit();

            state.dashboard.with(|d| {
                assert!(d.is_creating());
                assert_eq!(d.draft().amount, "6");
            });
        });
    }
}
