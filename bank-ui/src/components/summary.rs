//! Global Statistics

use bank_dashboard::dashboard::SummaryView;
use leptos::*;

#[component]
pub fn SummaryPanel(
    #[prop(into)]
    summary: Signal<SummaryView>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Global statistics"</h2>
            <div class="grid grid-cols-3 gap-4">
                <Stat label="Number of accounts" value=Signal::derive(move || summary.with(|s| s.count.to_string())) />
                <Stat label="Total balance" value=Signal::derive(move || summary.with(|s| s.sum.clone())) />
                <Stat label="Average balance" value=Signal::derive(move || summary.with(|s| s.average.clone())) />
            </div>
        </section>
    }
}

#[component]
fn Stat(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div>
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-2xl font-bold mt-1">{move || value.get()}</div>
        </div>
    }
}
