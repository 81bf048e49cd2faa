//! Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All filter and
//! cart mutations go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use techstore_domain::{
    filter_products, find_product, seed_catalog, Cart, FilterState, PriceRange, Product,
};

use crate::models::Section;

/// Whole storefront state for one session
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Static catalog, seeded once
    pub catalog: Vec<Product>,
    /// Filter panel state
    pub filters: FilterState,
    /// Shopping cart
    pub cart: Cart,
    /// Section shown in the main area
    pub active_section: Section,
}

impl ShopState {
    pub fn new() -> Self {
        Self {
            catalog: seed_catalog(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Derived Values
// ========================

/// Catalog products passing the current filters
pub fn filtered_products(store: ShopStore) -> Memo<Vec<Product>> {
    Memo::new(move |_| {
        let filters = store.filters().get();
        store.catalog().with(|catalog| filter_products(catalog, &filters))
    })
}

/// Sum of cart prices
pub fn cart_total(store: ShopStore) -> Memo<u64> {
    Memo::new(move |_| store.cart().with(|cart| cart.total()))
}

/// Number of cart entries
pub fn cart_count(store: ShopStore) -> Memo<usize> {
    Memo::new(move |_| store.cart().with(|cart| cart.len()))
}

// ========================
// Store Helper Functions
// ========================

/// Switch the main area section (filters and cart are untouched)
pub fn store_set_section(store: &ShopStore, section: Section) {
    log::debug!("[Nav] {:?}", section);
    *store.active_section().write() = section;
}

/// Append a copy of the catalog product with this id to the cart
pub fn store_add_to_cart(store: &ShopStore, product_id: u32) {
    let found = store.catalog().with(|catalog| find_product(catalog, product_id).cloned());
    match found {
        Ok(product) => {
            store.cart().write().add(&product);
            log::debug!("[Cart] Added #{} {}", product.id, product.name);
        }
        Err(e) => log::warn!("[Cart] Not added: {}", e),
    }
}

/// Remove the first cart entry with this id
pub fn store_remove_from_cart(store: &ShopStore, product_id: u32) {
    match store.cart().write().remove(product_id) {
        Some(removed) => log::debug!("[Cart] Removed #{} {}", removed.id, removed.name),
        None => log::debug!("[Cart] Nothing to remove for #{}", product_id),
    }
}

pub fn store_set_price_range(store: &ShopStore, range: PriceRange) {
    store.filters().write().set_price_range(range);
}

pub fn store_toggle_ram(store: &ShopStore, ram: u32, checked: bool) {
    log::debug!("[Filter] RAM {} GB -> {}", ram, checked);
    store.filters().write().toggle_ram(ram, checked);
}

pub fn store_toggle_cpu(store: &ShopStore, cpu: &str, checked: bool) {
    log::debug!("[Filter] CPU {} -> {}", cpu, checked);
    store.filters().write().toggle_cpu(cpu, checked);
}

/// Restore the default filters; the cart is left alone
pub fn store_reset_filters(store: &ShopStore) {
    if store.filters().with_untracked(|f| f.is_default()) {
        log::debug!("[Filter] Reset skipped, filters already default");
        return;
    }
    log::debug!("[Filter] Reset");
    store.filters().write().reset();
}
