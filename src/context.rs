//! Application Context
//!
//! UI state shared via the Leptos Context API that is not part of the shop
//! state itself: loaded config and whether the cart panel is open.

use leptos::prelude::*;

use crate::config::ShopConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    config: StoredValue<ShopConfig>,
    /// Cart panel visibility - read
    pub cart_open: ReadSignal<bool>,
    /// Cart panel visibility - write
    set_cart_open: WriteSignal<bool>,
}

impl ShopContext {
    pub fn new(config: ShopConfig, cart_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            config: StoredValue::new(config),
            cart_open: cart_open.0,
            set_cart_open: cart_open.1,
        }
    }

    pub fn config(&self) -> ShopConfig {
        self.config.get_value()
    }

    /// Format a price with the configured currency
    pub fn price_label(&self, amount: u64) -> String {
        self.config.with_value(|c| c.price_label(amount))
    }

    pub fn open_cart(&self) {
        self.set_cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.set_cart_open.set(false);
    }
}

/// Get the shop context
pub fn use_shop_context() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}
