use leptos::prelude::*;

use crate::api;
use crate::components::{Loading, ProductCard};

/// Catalog page: every product as a card, in catalog order.
#[component]
pub fn Catalog() -> impl IntoView {
    let products = LocalResource::new(|| api::fetch_products());

    view! {
        <div>
            <h1>"Catálogo"</h1>
            <Suspense fallback=move || view! { <Loading message="Cargando productos\u{2026}"/> }>
                {move || {
                    products.read().as_deref().map(|result| match result {
                        Ok(list) if list.is_empty() => view! {
                            <p>"No hay productos disponibles."</p>
                        }.into_any(),
                        Ok(list) => view! {
                            <div class="product-grid">
                                {list.iter().cloned().enumerate().map(|(index, product)| {
                                    view! { <ProductCard product index/> }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"No se pudo cargar el catálogo: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
