//! Account Cards
//!
//! One card per account, keyed by account id.

use bank_dashboard::dashboard::AccountCard;
use leptos::*;

/// Grid of account cards, or a placeholder when there are none
#[component]
pub fn AccountGrid(
    #[prop(into)]
    cards: Signal<Vec<AccountCard>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || cards.with(|c| !c.is_empty())
            fallback=|| view! { <p class="text-gray-400 text-sm">"No accounts yet"</p> }
        >
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <For
                    each=move || cards.get()
                    key=|card| card.id.clone()
                    children=|card| view! { <AccountTile card=card /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn AccountTile(card: AccountCard) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">"ID: #" {card.id}</span>
                <span class="text-gray-500 text-xs capitalize">{card.account_type}</span>
            </div>

            <div class="text-3xl font-bold mt-2">{card.balance}</div>

            <div class="text-sm text-gray-500 mt-2">"Created " {card.creation_date}</div>
        </div>
    }
}
