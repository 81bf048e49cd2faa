//! Catalog Section
//!
//! Filter sidebar and the filtered product grid.

use leptos::prelude::*;

use crate::components::{EmptyResults, FilterPanel, ProductCard};
use crate::store::{filtered_products, use_shop_store};

#[component]
pub fn CatalogSection() -> impl IntoView {
    let store = use_shop_store();
    let filtered = filtered_products(store);

    view! {
        <div class="fade-in">
            <h2 class="page-title">"Каталог товаров"</h2>

            <div class="catalog-layout">
                <aside class="catalog-sidebar">
                    <FilterPanel />
                </aside>

                <div class="catalog-results">
                    <div class="product-grid">
                        <For
                            each=move || filtered.get()
                            key=|product| product.id
                            children=move |product| view! { <ProductCard product=product show_specs=true /> }
                        />
                    </div>
                    <Show when=move || filtered.with(|products| products.is_empty())>
                        <EmptyResults />
                    </Show>
                </div>
            </div>
        </div>
    }
}
