//! Product Card Component
//!
//! Image, name, category, optional hardware specs, price and add-to-cart.

use leptos::prelude::*;
use techstore_domain::Product;

use crate::context::use_shop_context;
use crate::store::{store_add_to_cart, use_shop_store};

/// A single product tile
///
/// # Arguments
/// * `product` - Catalog entry to render
/// * `show_specs` - Render RAM/CPU/GPU lines (only for products that have RAM)
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(optional)] show_specs: bool,
) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let specs = (show_specs && product.has_ram()).then(|| view! {
        <div class="product-specs">
            <p>{format!("RAM: {} ГБ", product.ram)}</p>
            <p>{format!("CPU: {}", product.cpu)}</p>
            <p>{format!("GPU: {}", product.gpu)}</p>
        </div>
    });
    let id = product.id;
    let price = ctx.price_label(u64::from(product.price));
    let Product { name, image, category, .. } = product;

    view! {
        <div class="card product-card">
            <div class="card-header">
                <img src=image alt=name.clone() class="product-image" />
            </div>
            <div class="card-content">
                <h3 class="card-title">{name}</h3>
                <span class="badge">{category}</span>
                {specs}
                <p class="product-price">{price}</p>
            </div>
            <div class="card-footer">
                <button class="primary-btn wide" on:click=move |_| store_add_to_cart(&store, id)>
                    "🛒 В корзину"
                </button>
            </div>
        </div>
    }
}
