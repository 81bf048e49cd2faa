//! Empty Results Component
//!
//! Shown instead of the product grid when no product passes the filters.

use leptos::prelude::*;

use crate::store::{store_reset_filters, use_shop_store};

#[component]
pub fn EmptyResults() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="empty-results">
            <span class="empty-icon">"📦"</span>
            <p class="muted large">"Товары не найдены"</p>
            <button class="outline-btn" on:click=move |_| store_reset_filters(&store)>
                "Сбросить фильтры"
            </button>
        </div>
    }
}
