//! # tienda-dashboard-leptos
//!
//! Client-side storefront built with Leptos. Fetches the catalog from the
//! `tiendad` JSON API and renders it as product cards. Card content and
//! image fallback rules come from `tienda_domain::card`, shared with the
//! server-rendered pages.

use leptos::prelude::*;

pub mod api;
mod components;
mod pages;

pub use components::ProductCard;
use pages::Catalog;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <Catalog/>
        </main>
    }
}
