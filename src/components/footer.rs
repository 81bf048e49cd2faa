use leptos::prelude::*;

use crate::context::use_shop_context;

#[component]
pub fn Footer() -> impl IntoView {
    let store_name = use_shop_context().config().store_name;

    view! {
        <footer class="site-footer">
            <p>{format!("© 2024 {}. Все права защищены.", store_name)}</p>
        </footer>
    }
}
