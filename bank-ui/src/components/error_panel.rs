//! Error Panel Component
//!
//! Diagnostic view for a failed read: the error itself, then the
//! troubleshooting steps and the current configuration.

use bank_dashboard::dashboard::{FailureView, Troubleshooting};
use leptos::*;

#[component]
pub fn ErrorPanel(failure: FailureView, help: Troubleshooting) -> impl IntoView {
    let FailureView { message, network_detail, server_errors } = failure;

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-red-400">"GraphQL connection error"</h1>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-2">"Error message:"</h2>
                <pre class="whitespace-pre-wrap text-sm text-red-300">{message}</pre>
            </section>

            {network_detail.map(|detail| view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-2">"Network error detected:"</h2>
                    <pre class="text-xs text-gray-300 overflow-x-auto">{detail}</pre>
                </section>
            })}

            {(!server_errors.is_empty()).then(|| view! {
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-2">"Server errors:"</h2>
                    <ul class="list-disc list-inside text-sm text-red-300">
                        {server_errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </section>
            })}

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-2">"Possible fixes:"</h2>
                <ol class="list-decimal list-inside space-y-1 text-sm">
                    {help.steps().into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                </ol>
            </section>

            <section class="bg-gray-800 rounded-xl p-6 text-sm">
                <h2 class="text-lg font-semibold mb-2">"Current configuration:"</h2>
                <p>"GraphQL URL: " <code>{help.endpoint.clone()}</code></p>
                <p>
                    "GraphiQL URL: "
                    <a href=help.graphiql_url.clone() target="_blank" class="text-primary-400 underline">
                        {help.graphiql_url.clone()}
                    </a>
                </p>
            </section>
        </div>
    }
}
