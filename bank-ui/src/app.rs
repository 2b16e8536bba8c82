//! App Root Component
//!
//! Builds the one GraphQL client for the session and provides the dashboard
//! state to the page.

use leptos::*;

use crate::api::{get_endpoint, GraphQLClient};
use crate::components::EndpointSettings;
use crate::pages::AccountsPage;
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state(GraphQLClient::new(get_endpoint()));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <AccountsPage />
            </main>

            <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
                <div class="container mx-auto text-sm">
                    <EndpointSettings />
                </div>
            </footer>
        </div>
    }
}
