//! TechStore Frontend App
//!
//! Header with navigation and cart, the active section, footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AboutSection, CartSheet, CatalogSection, ContactsSection, Footer, Header, HomeSection,
    LogPanel,
};
use crate::config::ShopConfig;
use crate::context::ShopContext;
use crate::models::Section;
use crate::store::{ShopState, ShopStateStoreFields};

#[component]
pub fn App(config: ShopConfig) -> impl IntoView {
    let store = Store::new(ShopState::new());
    let (cart_open, set_cart_open) = signal(false);

    log::info!(
        "[APP] {} started with {} products",
        config.store_name,
        store.catalog().with_untracked(|c| c.len())
    );

    // Provide context to all children
    provide_context(store);
    provide_context(ShopContext::new(config, (cart_open, set_cart_open)));

    view! {
        <div class="app-layout">
            <Header />
            <CartSheet />

            <main class="main-content">
                {move || match store.active_section().get() {
                    Section::Home => view! { <HomeSection /> }.into_any(),
                    Section::Catalog => view! { <CatalogSection /> }.into_any(),
                    Section::About => view! { <AboutSection /> }.into_any(),
                    Section::Contacts => view! { <ContactsSection /> }.into_any(),
                }}
            </main>

            <LogPanel />
            <Footer />
        </div>
    }
}
