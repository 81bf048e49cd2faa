//! Header Component
//!
//! Sticky top bar: store name, section navigation, cart button with badge.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::models::Section;
use crate::store::{cart_count, store_set_section, use_shop_store, ShopStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let count = cart_count(store);
    let store_name = ctx.config().store_name;

    view! {
        <header class="site-header">
            <div class="header-inner">
                <div class="header-brand">
                    <span class="brand-icon">"🖥"</span>
                    <h1>{store_name}</h1>
                </div>

                <nav class="header-nav">
                    {Section::ALL.iter().map(|&section| {
                        let is_active = move || store.active_section().get() == section;
                        view! {
                            <button
                                class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                                on:click=move |_| store_set_section(&store, section)
                            >
                                {section.label()}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                <button class="cart-btn" title="Корзина" on:click=move |_| ctx.open_cart()>
                    "🛒"
                    <Show when=move || { count.get() > 0 }>
                        <span class="cart-badge">{move || count.get()}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}
