//! Bank Dashboard
//!
//! Browser front-end built with Leptos (WASM). Lists every account with the
//! global statistics and offers a form to open a new one.
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. Page logic lives in the
//! shared `bank-dashboard` core; this crate only supplies the gloo-net
//! GraphQL transport and the components.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
