//! Home Section
//!
//! Hero banner and the first few catalog products.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::context::use_shop_context;
use crate::models::Section;
use crate::store::{store_set_section, use_shop_store, ShopStateStoreFields};

#[component]
pub fn HomeSection() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let popular_count = ctx.config().popular_count;

    let popular = move || {
        store.catalog().with(|catalog| {
            catalog.iter().take(popular_count).cloned().collect::<Vec<_>>()
        })
    };

    view! {
        <div class="fade-in">
            <section class="hero">
                <h2>"Компьютеры и комплектующие"</h2>
                <p class="muted large">"Лучшие цены на технику для работы и игр"</p>
                <button class="primary-btn large" on:click=move |_| store_set_section(&store, Section::Catalog)>
                    "Перейти в каталог →"
                </button>
            </section>

            <section>
                <h3 class="section-title">"Популярные товары"</h3>
                <div class="product-grid">
                    <For
                        each=popular
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
            </section>
        </div>
    }
}
