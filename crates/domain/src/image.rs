//! Card images and what happens when they fail to load.
//!
//! The card shows two images with different failure rules: the thumbnail
//! falls back to a placeholder, the name icon disappears. Each is a
//! two-state machine with no way back from its failure state.

use crate::product::Product;

/// Generic image shown when a product has no usable picture.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Trimmed URL, or `None` when absent or blank.
fn usable_url(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|url| !url.is_empty())
}

/// Source picked for the card thumbnail.
///
/// Priority: `img_thumbnail_url`, then `img_principal_url`, then
/// [`PLACEHOLDER_IMAGE`]. Blank URLs are skipped.
#[must_use]
pub fn thumbnail_source(product: &Product) -> &str {
    usable_url(product.img_thumbnail_url.as_deref())
        .or_else(|| usable_url(product.img_principal_url.as_deref()))
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Source picked for the large image on the detail page.
///
/// Same rules as [`thumbnail_source`] with the priority reversed: the main
/// image first, the thumbnail as a stand-in.
#[must_use]
pub fn main_image_source(product: &Product) -> &str {
    usable_url(product.img_principal_url.as_deref())
        .or_else(|| usable_url(product.img_thumbnail_url.as_deref()))
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Main card image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailImage {
    /// Showing the selected source; loaded or still loading.
    Requested(String),
    /// The source failed once and was swapped for the placeholder.
    Placeholder,
}

impl ThumbnailImage {
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self::Requested(thumbnail_source(product).to_string())
    }

    /// URL to put in the `src` attribute.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Requested(src) => src,
            Self::Placeholder => PLACEHOLDER_IMAGE,
        }
    }

    /// Apply a load failure. Idempotent.
    pub fn fail(&mut self) {
        *self = Self::Placeholder;
    }
}

/// Small icon in front of the product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconImage {
    Visible(String),
    /// The icon failed to load and takes no space any more.
    Hidden,
}

impl IconImage {
    /// The icon for `product`, or `None` when `img_icono_url` is blank.
    #[must_use]
    pub fn for_product(product: &Product) -> Option<Self> {
        usable_url(product.img_icono_url.as_deref()).map(|src| Self::Visible(src.to_string()))
    }

    /// URL to put in the `src` attribute, `None` once hidden.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Visible(src) => Some(src),
            Self::Hidden => None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    /// Apply a load failure. Idempotent.
    pub fn fail(&mut self) {
        *self = Self::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_thumbnail_url() {
        let product = Product::builder()
            .thumbnail_url("http://x/t.png")
            .main_image_url("http://x/p.png")
            .build();
        assert_eq!(thumbnail_source(&product), "http://x/t.png");
    }

    #[test]
    fn should_fall_through_to_main_image_when_thumbnail_blank() {
        let product = Product::builder()
            .thumbnail_url("  ")
            .main_image_url("http://x/p.png")
            .build();
        assert_eq!(thumbnail_source(&product), "http://x/p.png");
    }

    #[test]
    fn should_use_placeholder_when_no_image_given() {
        let blank = Product::builder()
            .thumbnail_url("")
            .main_image_url(" \t")
            .build();
        assert_eq!(thumbnail_source(&blank), PLACEHOLDER_IMAGE);
        assert_eq!(thumbnail_source(&Product::default()), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn should_prefer_main_image_on_detail_page() {
        let product = Product::builder()
            .thumbnail_url("http://x/t.png")
            .main_image_url("http://x/p.png")
            .build();
        assert_eq!(main_image_source(&product), "http://x/p.png");

        let thumb_only = Product::builder().thumbnail_url("http://x/t.png").build();
        assert_eq!(main_image_source(&thumb_only), "http://x/t.png");
        assert_eq!(main_image_source(&Product::default()), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn should_trim_selected_url() {
        let product = Product::builder().thumbnail_url(" http://x/t.png ").build();
        assert_eq!(thumbnail_source(&product), "http://x/t.png");
    }

    #[test]
    fn should_show_placeholder_after_thumbnail_failure() {
        let product = Product::builder().thumbnail_url("http://x/t.png").build();
        let mut image = ThumbnailImage::for_product(&product);
        assert_eq!(image.src(), "http://x/t.png");

        image.fail();
        assert_eq!(image, ThumbnailImage::Placeholder);
        assert_eq!(image.src(), PLACEHOLDER_IMAGE);

        image.fail();
        assert_eq!(image.src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn should_omit_icon_when_url_blank() {
        let product = Product::builder().icon_url("   ").build();
        assert!(IconImage::for_product(&product).is_none());
        assert!(IconImage::for_product(&Product::default()).is_none());
    }

    #[test]
    fn should_hide_icon_after_failure() {
        let product = Product::builder().icon_url("http://x/i.svg").build();
        let mut icon = IconImage::for_product(&product).unwrap();
        assert!(icon.is_visible());
        assert_eq!(icon.src(), Some("http://x/i.svg"));

        icon.fail();
        assert!(!icon.is_visible());
        assert_eq!(icon.src(), None);

        icon.fail();
        assert_eq!(icon, IconImage::Hidden);
    }
}
