//! Account Form Component
//!
//! Amount and type inputs for a new account. The draft lives in the
//! dashboard state; this component only forwards edits and the submit.

use bank_dashboard::accounts::AccountType;
use bank_dashboard::dashboard::FormView;
use leptos::*;

use crate::state::DashboardState;

/// Account creation form
#[component]
pub fn AccountForm(
    #[prop(into)]
    form: Signal<FormView>,
) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let on_submit = {
        let state = state.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            state.submit();
        }
    };

    let on_amount = {
        let state = state.clone();
        move |ev: web_sys::Event| state.set_amount(event_target_value(&ev))
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-1">"Initial balance"</label>
                <input
                    type="number"
                    step="0.01"
                    placeholder="1500.50"
                    class="w-full bg-gray-700 rounded px-3 py-2"
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=on_amount
                />
            </div>

            <div class="flex space-x-4">
                {AccountType::ALL.into_iter().map(|account_type| {
                    let state = state.clone();
                    view! {
                        <label class="flex items-center space-x-2 cursor-pointer">
                            <input
                                type="radio"
                                name="account-type"
                                prop:checked=move || form.with(|f| f.account_type == account_type)
                                on:change=move |_| state.set_account_type(account_type)
                            />
                            <span>{account_type.label()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>

            <button
                type="submit"
                class="px-6 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium disabled:opacity-50"
                disabled=move || form.with(|f| f.creating)
            >
                {move || form.with(|f| f.submit_label)}
            </button>

            {move || form.with(|f| f.error.clone()).map(|error| view! {
                <p class="text-red-400 text-sm">{error}</p>
            })}
        </form>
    }
}
