use leptos::prelude::*;

use crate::context::use_shop_context;

/// (icon, title, text)
const FEATURES: &[(&str, &str, &str)] = &[
    ("🏆", "Качество", "Только оригинальная техника"),
    ("🚚", "Доставка", "Быстрая доставка по РФ"),
    ("🛡", "Гарантия", "Официальная гарантия"),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    let store_name = use_shop_context().config().store_name;

    view! {
        <div class="fade-in narrow">
            <h2 class="page-title">"О магазине"</h2>
            <div class="card">
                <div class="card-content">
                    <p class="large">
                        {store_name}
                        " — ваш надёжный партнёр в мире компьютерной техники. Мы предлагаем широкий ассортимент компьютеров, ноутбуков, комплектующих и периферии от ведущих производителей."
                    </p>
                    <p class="large">
                        "Наша команда экспертов поможет подобрать оптимальное решение для любых задач — от офисной работы до профессионального гейминга и видеомонтажа."
                    </p>
                    <div class="feature-grid">
                        {FEATURES.iter().map(|(icon, title, text)| view! {
                            <div class="feature">
                                <span class="feature-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p class="muted small">{*text}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
