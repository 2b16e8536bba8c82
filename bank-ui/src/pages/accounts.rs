//! Accounts Page
//!
//! Runs the read query on mount and shows the loading, failure or data view.
//! Each section reads its own memo of the page view so typing in the form
//! only touches the form.

use bank_dashboard::dashboard::{DashboardView, PageView, PAGE_TITLE};
use leptos::*;

use crate::components::{AccountForm, AccountGrid, ErrorPanel, Loading, SummaryPanel};
use crate::state::DashboardState;

/// Accounts page component
#[component]
pub fn AccountsPage() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Fetch initial data on mount
    state.load();

    let help = state.troubleshooting();
    let page = create_memo(move |_| state.view());

    let pending = create_memo(move |_| page.with(|p| matches!(p, PageView::Pending)));
    let ready = create_memo(move |_| page.with(|p| matches!(p, PageView::Ready(_))));
    let failure = create_memo(move |_| {
        page.with(|p| match p {
            PageView::Failed(failure) => Some(failure.clone()),
            _ => None,
        })
    });

    view! {
        <Show when=move || pending.get()>
            <Loading />
        </Show>

        {move || failure.get().map(|failure| view! {
            <ErrorPanel failure=failure help=help.clone() />
        })}

        <Show when=move || ready.get()>
            <AccountsView page=page />
        </Show>
    }
}

#[component]
fn AccountsView(page: Memo<PageView>) -> impl IntoView {
    let form = select(page, |d| d.form.clone());
    let summary = select(page, |d| d.summary.clone());
    let cards = select(page, |d| d.cards.clone());

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold">{PAGE_TITLE}</h1>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"New account"</h2>
                <AccountForm form=form />
            </section>

            <SummaryPanel summary=summary />

            <section>
                <h2 class="text-lg font-semibold mb-4">"Accounts"</h2>
                <AccountGrid cards=cards />
            </section>
        </div>
    }
}

/// Memo of one part of the data view; the default only shows while unmounting
fn select<T>(page: Memo<PageView>, part: impl Fn(&DashboardView) -> T + 'static) -> Memo<T>
where
    T: Clone + Default + PartialEq + 'static,
{
    create_memo(move |_| {
        page.with(|p| match p {
            PageView::Ready(dashboard) => part(dashboard),
            _ => T::default(),
        })
    })
}
