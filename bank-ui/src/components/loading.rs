//! Loading Component

use bank_dashboard::dashboard::LOADING_MESSAGE;
use leptos::*;

/// Full-page loading state shown while the read query is pending
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] space-y-4">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400">{LOADING_MESSAGE}</p>
        </div>
    }
}
