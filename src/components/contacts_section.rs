use leptos::prelude::*;

/// (icon, title, lines)
const CONTACTS: &[(&str, &str, &[&str])] = &[
    ("📍", "Адрес", &["г. Москва, ул. Технологическая, д. 1"]),
    ("📞", "Телефон", &["+7 (495) 123-45-67"]),
    ("✉", "Email", &["info@techstore.ru"]),
    ("🕘", "Режим работы", &["Пн-Пт: 9:00 - 20:00", "Сб-Вс: 10:00 - 18:00"]),
];

#[component]
pub fn ContactsSection() -> impl IntoView {
    view! {
        <div class="fade-in narrow">
            <h2 class="page-title">"Контакты"</h2>
            <div class="card">
                <div class="card-content">
                    {CONTACTS.iter().map(|(icon, title, lines)| view! {
                        <div class="contact-row">
                            <span class="contact-icon">{*icon}</span>
                            <div>
                                <h3>{*title}</h3>
                                {lines.iter().map(|line| view! { <p class="muted">{*line}</p> }).collect_view()}
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
