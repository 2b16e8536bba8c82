//! Endpoint Settings
//!
//! Lets the user point the page at another GraphQL server. The new endpoint
//! is stored in local storage and used after a reload.

use leptos::*;

use crate::api::{get_endpoint, set_endpoint};

#[component]
pub fn EndpointSettings() -> impl IntoView {
    let (endpoint, set_endpoint_input) = create_signal(get_endpoint());

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_endpoint(&endpoint.get_untracked());
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <form on:submit=on_save class="flex items-center space-x-2">
            <label class="text-gray-400">"GraphQL endpoint"</label>
            <input
                type="url"
                class="flex-1 bg-gray-700 rounded px-2 py-1"
                prop:value=move || endpoint.get()
                on:input=move |ev| set_endpoint_input.set(event_target_value(&ev))
            />
            <button type="submit" class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded">"Save"</button>
        </form>
    }
}
