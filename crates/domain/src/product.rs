//! Product: one catalog item as supplied by the catalog.
//!
//! Field names follow the catalog sheet columns so records deserialize
//! without a mapping layer.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::id::ProductId;
use crate::stock::StockStatus;

/// Path prefix of the product detail page.
pub const DETAIL_PATH_PREFIX: &str = "/producto/";

/// A catalog item.
///
/// Every field defaults when absent or `null` so that incomplete rows still
/// render; spreadsheet exports write empty cells as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: ProductId,
    #[serde(deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categoria: String,
    #[serde(deserialize_with = "null_as_default")]
    pub marca: String,
    #[serde(deserialize_with = "null_as_default")]
    pub modelo_compatible: String,
    #[serde(deserialize_with = "null_as_default")]
    pub anio_desde: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub anio_hasta: i32,
    /// Sale price in Chilean pesos.
    #[serde(deserialize_with = "null_as_default")]
    pub precio_venta_clp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub iva_incluido: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub stock_actual: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub stock_minimo: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub unidad_medida: String,
    pub img_thumbnail_url: Option<String>,
    pub img_principal_url: Option<String>,
    pub img_icono_url: Option<String>,
}

/// Read a value that may be `null`, mapping `null` to `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Product {
    /// Create a builder for constructing a [`Product`].
    #[must_use]
    pub fn builder() -> ProductBuilder {
        ProductBuilder::default()
    }

    /// Path of this product's detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("{DETAIL_PATH_PREFIX}{}", self.product_id)
    }

    /// Stock level classified against `stock_minimo`.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock_actual, self.stock_minimo)
    }

    /// Compatible vehicle with its year range, e.g. `Corsa (2010-2015)`.
    #[must_use]
    pub fn compatibility(&self) -> String {
        format!(
            "{} ({}-{})",
            self.modelo_compatible, self.anio_desde, self.anio_hasta
        )
    }

    /// Quantity on hand, e.g. `5 unidad(s) disponible(s)`.
    #[must_use]
    pub fn stock_summary(&self) -> String {
        format!(
            "{} {}(s) disponible(s)",
            self.stock_actual, self.unidad_medida
        )
    }

    /// Check catalog invariants.
    ///
    /// Rendering never calls this; a card shows whatever it is given. The
    /// catalog loader uses it to flag suspicious rows.
    ///
    /// # Errors
    ///
    /// Returns the first broken invariant:
    /// - [`ValidationError::EmptyProductId`] when `product_id` is blank
    /// - [`ValidationError::NegativeStock`] when either stock quantity is negative
    /// - [`ValidationError::InvertedYearRange`] when `anio_desde > anio_hasta`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_id.is_blank() {
            return Err(ValidationError::EmptyProductId);
        }
        if self.stock_actual < 0 || self.stock_minimo < 0 {
            return Err(ValidationError::NegativeStock);
        }
        if self.anio_desde > self.anio_hasta {
            return Err(ValidationError::InvertedYearRange);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Product`].
#[derive(Debug, Default)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ProductId>) -> Self {
        self.product.product_id = id.into();
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.product.nombre = name.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.product.categoria = category.into();
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.product.marca = brand.into();
        self
    }

    #[must_use]
    pub fn compatible_with(mut self, model: impl Into<String>, from: i32, to: i32) -> Self {
        self.product.modelo_compatible = model.into();
        self.product.anio_desde = from;
        self.product.anio_hasta = to;
        self
    }

    #[must_use]
    pub fn price(mut self, clp: i64) -> Self {
        self.product.precio_venta_clp = clp;
        self
    }

    #[must_use]
    pub fn tax_included(mut self, included: bool) -> Self {
        self.product.iva_incluido = included;
        self
    }

    #[must_use]
    pub fn stock(mut self, current: i64, minimum: i64) -> Self {
        self.product.stock_actual = current;
        self.product.stock_minimo = minimum;
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.product.unidad_medida = unit.into();
        self
    }

    #[must_use]
    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.product.img_thumbnail_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn main_image_url(mut self, url: impl Into<String>) -> Self {
        self.product.img_principal_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.product.img_icono_url = Some(url.into());
        self
    }

    /// Consume the builder and return the [`Product`].
    ///
    /// No invariants are enforced here; see [`Product::validate`].
    #[must_use]
    pub fn build(self) -> Product {
        self.product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> Product {
        Product::builder()
            .id("FIL-001")
            .name("Filtro de aceite")
            .category("Filtros")
            .brand("Bosch")
            .compatible_with("Corsa", 2010, 2015)
            .price(8_990)
            .tax_included(true)
            .stock(5, 2)
            .unit("unidad")
            .build()
    }

    #[test]
    fn should_build_detail_path_from_id() {
        assert_eq!(filter().detail_path(), "/producto/FIL-001");
    }

    #[test]
    fn should_format_compatibility_with_year_range() {
        assert_eq!(filter().compatibility(), "Corsa (2010-2015)");
    }

    #[test]
    fn should_format_stock_summary_with_unit() {
        assert_eq!(filter().stock_summary(), "5 unidad(s) disponible(s)");
    }

    #[test]
    fn should_derive_stock_status_from_quantities() {
        assert_eq!(filter().stock_status(), StockStatus::Available);
        let low = Product::builder().id("x").stock(2, 2).build();
        assert_eq!(low.stock_status(), StockStatus::Low);
    }

    #[test]
    fn should_accept_well_formed_product() {
        assert!(filter().validate().is_ok());
    }

    #[test]
    fn should_reject_blank_id() {
        let product = Product::builder().id("   ").build();
        assert_eq!(product.validate(), Err(ValidationError::EmptyProductId));
    }

    #[test]
    fn should_reject_negative_stock() {
        let product = Product::builder().id("x").stock(-1, 0).build();
        assert_eq!(product.validate(), Err(ValidationError::NegativeStock));
    }

    #[test]
    fn should_reject_inverted_year_range() {
        let product = Product::builder()
            .id("x")
            .compatible_with("Yaris", 2020, 2012)
            .build();
        assert_eq!(product.validate(), Err(ValidationError::InvertedYearRange));
    }

    #[test]
    fn should_default_missing_fields_when_deserializing() {
        let product: Product =
            serde_json::from_str(r#"{"product_id":"P-9","nombre":"Bujía"}"#).unwrap();
        assert_eq!(product.product_id.as_str(), "P-9");
        assert_eq!(product.nombre, "Bujía");
        assert!(product.marca.is_empty());
        assert_eq!(product.precio_venta_clp, 0);
        assert!(!product.iva_incluido);
        assert!(product.img_thumbnail_url.is_none());
    }

    #[test]
    fn should_default_null_fields_when_deserializing() {
        let product: Product = serde_json::from_str(
            r#"{"product_id":"P-9","nombre":"Bujía","marca":null,"stock_actual":null,"iva_incluido":null,"img_icono_url":null}"#,
        )
        .unwrap();
        assert_eq!(product.nombre, "Bujía");
        assert!(product.marca.is_empty());
        assert_eq!(product.stock_actual, 0);
        assert!(!product.iva_incluido);
        assert!(product.img_icono_url.is_none());
    }
}
