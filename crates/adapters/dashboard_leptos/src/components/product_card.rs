//! Product card component: one catalog product as a clickable tile.

use leptos::prelude::*;
use tienda_domain::card::ProductCardView;
use tienda_domain::image::IconImage;
use tienda_domain::product::Product;

/// Inline style of the name icon for the card's current icon state.
fn icon_style(card: &ProductCardView) -> &'static str {
    if card.icon.as_ref().is_some_and(IconImage::is_visible) {
        ""
    } else {
        "display: none;"
    }
}

/// A card summarizing a product and linking to its detail page.
///
/// The card model lives in a signal; each image's `error` event applies its
/// own transition (thumbnail to placeholder, icon to hidden) and neither
/// touches the other image.
#[component]
pub fn ProductCard(
    /// The product to display.
    product: Product,
    /// Position in the listing; staggers the entrance animation.
    #[prop(default = 0)]
    index: usize,
) -> impl IntoView {
    let card = ProductCardView::new(&product, index);
    let state = RwSignal::new(card.clone());

    let href = card.href.clone();
    let style = card.animation_style();
    let alt = card.thumbnail_alt().to_string();
    let stock_class = format!("badge badge-stock {}", card.stock_badge_class());
    let stock_label = card.stock_label();
    let icon_src = card.icon_src().map(str::to_string);
    let icon_alt = card.icon_alt();
    let tax_marker = card.tax_marker();

    let icon_view = icon_src.map(|src| {
        view! {
            <img
                class="card-icon"
                src=src
                alt=icon_alt
                style=move || state.with(icon_style)
                on:error=move |_| state.update(ProductCardView::on_icon_error)
            />
        }
    });

    view! {
        <a href=href class="product-card" style=style>
            <div class="card-media">
                <img
                    src=move || state.with(|card| card.thumbnail.src().to_string())
                    alt=alt
                    on:error=move |_| state.update(ProductCardView::on_thumbnail_error)
                />
                <span class="badge badge-category">{card.category}</span>
                <span class=stock_class>{stock_label}</span>
            </div>
            <div class="card-body">
                <p class="card-brand">{card.brand}</p>
                <h3 class="card-title">
                    {icon_view}
                    <span>{card.name}</span>
                </h3>
                <p class="card-compat">{card.compatibility}</p>
                <div class="card-price">
                    <strong>{card.price}</strong>
                    {tax_marker.map(|marker| view! { <span class="card-tax">{marker}</span> })}
                </div>
                <p class="card-stock">{card.stock_summary}</p>
            </div>
        </a>
    }
}
