//! Product card: everything a renderer needs to draw one product tile.
//!
//! [`ProductCardView`] is built once per render from a [`Product`] and holds
//! display-ready text plus the state of the two card images. Renderers (the
//! SSR templates and the Leptos component) only lay it out.

use crate::image::{IconImage, PLACEHOLDER_IMAGE, ThumbnailImage};
use crate::price::{TAX_INCLUDED_MARKER, format_clp};
use crate::product::Product;
use crate::stock::StockStatus;

/// Delay added per grid position to stagger the card entrance animation.
pub const ANIMATION_STAGGER_MS: u64 = 50;

/// Display model of a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    /// Link target of the whole card.
    pub href: String,
    /// Entrance animation delay in milliseconds.
    pub animation_delay_ms: u64,
    pub thumbnail: ThumbnailImage,
    pub category: String,
    pub stock_status: StockStatus,
    pub brand: String,
    pub name: String,
    pub icon: Option<IconImage>,
    /// `"{modelo} ({desde}-{hasta})"`.
    pub compatibility: String,
    /// Formatted sale price.
    pub price: String,
    pub tax_included: bool,
    /// `"{n} {unidad}(s) disponible(s)"`.
    pub stock_summary: String,
}

impl ProductCardView {
    /// Build the card for `product` shown at grid position `index`.
    ///
    /// `index` only affects [`animation_delay_ms`](Self::animation_delay_ms).
    #[must_use]
    pub fn new(product: &Product, index: usize) -> Self {
        Self {
            href: product.detail_path(),
            animation_delay_ms: u64::try_from(index)
                .unwrap_or(u64::MAX)
                .saturating_mul(ANIMATION_STAGGER_MS),
            thumbnail: ThumbnailImage::for_product(product),
            category: product.categoria.clone(),
            stock_status: product.stock_status(),
            brand: product.marca.clone(),
            name: product.nombre.clone(),
            icon: IconImage::for_product(product),
            compatibility: product.compatibility(),
            price: format_clp(product.precio_venta_clp),
            tax_included: product.iva_incluido,
            stock_summary: product.stock_summary(),
        }
    }

    /// Inline style carrying the animation delay.
    #[must_use]
    pub fn animation_style(&self) -> String {
        format!("animation-delay: {}ms", self.animation_delay_ms)
    }

    /// Alt text of the thumbnail.
    #[must_use]
    pub fn thumbnail_alt(&self) -> &str {
        &self.name
    }

    /// Image the thumbnail switches to when it fails.
    #[must_use]
    pub fn fallback_src(&self) -> &'static str {
        PLACEHOLDER_IMAGE
    }

    /// Icon URL while the icon is shown.
    #[must_use]
    pub fn icon_src(&self) -> Option<&str> {
        self.icon.as_ref().and_then(IconImage::src)
    }

    /// Alt text of the name icon.
    #[must_use]
    pub fn icon_alt(&self) -> String {
        format!("Icono de {}", self.name)
    }

    #[must_use]
    pub fn stock_label(&self) -> &'static str {
        self.stock_status.label()
    }

    #[must_use]
    pub fn stock_badge_class(&self) -> &'static str {
        self.stock_status.badge_class()
    }

    /// The VAT marker, present only when the price includes it.
    #[must_use]
    pub fn tax_marker(&self) -> Option<&'static str> {
        self.tax_included.then_some(TAX_INCLUDED_MARKER)
    }

    /// The thumbnail failed to load.
    pub fn on_thumbnail_error(&mut self) {
        self.thumbnail.fail();
    }

    /// The name icon failed to load.
    pub fn on_icon_error(&mut self) {
        if let Some(icon) = self.icon.as_mut() {
            icon.fail();
        }
    }
}

/// Cards for a listing, in order, with staggered animation delays.
#[must_use]
pub fn cards_for<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductCardView> {
    products
        .into_iter()
        .enumerate()
        .map(|(index, product)| ProductCardView::new(product, index))
        .collect()
}
