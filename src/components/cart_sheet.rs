//! Cart Sheet Component
//!
//! Slide-in panel listing cart entries with per-entry removal and the total.

use leptos::prelude::*;
use techstore_domain::{CartState, Product};

use crate::context::use_shop_context;
use crate::store::{cart_total, store_remove_from_cart, use_shop_store, ShopStateStoreFields};

/// One cart line
#[component]
fn CartLine(item: Product) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let id = item.id;

    view! {
        <div class="cart-line">
            <div>
                <p class="cart-line-name">{item.name}</p>
                <p class="cart-line-price">{ctx.price_label(u64::from(item.price))}</p>
            </div>
            <button
                class="cart-remove-btn"
                title="Удалить"
                on:click=move |_| store_remove_from_cart(&store, id)
            >
                "🗑"
            </button>
        </div>
    }
}

#[component]
pub fn CartSheet() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let total = cart_total(store);

    let cart_state = move || store.cart().with(|cart| cart.state());
    // Entries may repeat, so key lines by position as well as id
    let lines = move || {
        store.cart().with(|cart| {
            cart.entries().iter().cloned().enumerate().collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || ctx.cart_open.get()>
            <div class="sheet-overlay" on:click=move |_| ctx.close_cart()></div>
            <aside class="sheet">
                <div class="sheet-header">
                    <h2>"Корзина"</h2>
                    <button class="sheet-close" on:click=move |_| ctx.close_cart()>"✕"</button>
                </div>

                <div class="sheet-body">
                    {move || match cart_state() {
                        CartState::Empty => view! {
                            <p class="muted">"Корзина пуста"</p>
                        }.into_any(),
                        CartState::NonEmpty => view! {
                            <For
                                each=lines
                                key=|(index, item)| (*index, item.id)
                                children=move |(_, item)| view! { <CartLine item=item /> }
                            />
                            <div class="cart-summary">
                                <div class="cart-total">
                                    <span>"Итого:"</span>
                                    <span class="cart-total-value">
                                        {move || ctx.price_label(total.get())}
                                    </span>
                                </div>
                                <button class="checkout-btn">"Оформить заказ"</button>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </aside>
        </Show>
    }
}
