//! Filter Panel Component
//!
//! Price range, RAM and CPU checkboxes, reset button.

use leptos::prelude::*;
use techstore_domain::{parse_price, CPU_OPTIONS, PRICE_MAX, PRICE_MIN, RAM_OPTIONS};

use crate::context::use_shop_context;
use crate::store::{
    store_reset_filters, store_set_price_range, store_toggle_cpu, store_toggle_ram,
    use_shop_store, ShopStateStoreFields,
};

/// Which slider thumb an input drives
#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
}

/// Price range control built from two range inputs
#[component]
fn PriceSlider() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let step = ctx.config().price_step;

    let range = move || store.filters().with(|f| f.price_range);

    let on_input = move |bound: Bound, raw: String| {
        match parse_price(&raw) {
            Ok(value) => {
                let current = range();
                let next = match bound {
                    Bound::Min => current.with_min(value),
                    Bound::Max => current.with_max(value),
                };
                store_set_price_range(&store, next);
            }
            Err(e) => log::warn!("[Filter] Ignoring slider value: {}", e),
        }
    };

    view! {
        <div class="filter-group">
            <label class="filter-label">
                {move || {
                    let r = range();
                    format!(
                        "Цена: {} - {}",
                        techstore_domain::format_price(u64::from(r.min())),
                        ctx.price_label(u64::from(r.max())),
                    )
                }}
            </label>
            <div class="price-slider">
                <input
                    type="range"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=step.to_string()
                    prop:value=move || range().min().to_string()
                    on:input=move |ev| on_input(Bound::Min, event_target_value(&ev))
                />
                <input
                    type="range"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=step.to_string()
                    prop:value=move || range().max().to_string()
                    on:input=move |ev| on_input(Bound::Max, event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
pub fn FilterPanel() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <div class="card filter-panel">
            <div class="card-header">
                <h3 class="card-title">"Фильтры"</h3>
            </div>
            <div class="card-content">
                <PriceSlider />

                <div class="filter-group">
                    <label class="filter-label">"Оперативная память (ГБ)"</label>
                    {RAM_OPTIONS.iter().map(|&ram| {
                        view! {
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || store.filters().with(|f| f.selected_ram.contains(&ram))
                                    on:change=move |ev| store_toggle_ram(&store, ram, event_target_checked(&ev))
                                />
                                {format!("{} ГБ", ram)}
                            </label>
                        }
                    }).collect_view()}
                </div>

                <div class="filter-group">
                    <label class="filter-label">"Процессор"</label>
                    {CPU_OPTIONS.iter().map(|&cpu| {
                        let family = cpu.to_string();
                        view! {
                            <label class="checkbox-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || store.filters().with(|f| f.selected_cpu.contains(&family))
                                    on:change=move |ev| store_toggle_cpu(&store, cpu, event_target_checked(&ev))
                                />
                                {cpu}
                            </label>
                        }
                    }).collect_view()}
                </div>

                <button class="outline-btn wide" on:click=move |_| store_reset_filters(&store)>
                    "Сбросить фильтры"
                </button>
            </div>
        </div>
    }
}
