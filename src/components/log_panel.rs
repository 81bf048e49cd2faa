//! Log Panel Component
//!
//! Collapsible list of the most recent log lines, shown only when the
//! configured level is `debug` or more verbose.

use leptos::prelude::*;

use crate::context::use_shop_context;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_shop_context();
    let enabled = ctx.config().shows_log_panel();
    let (expanded, set_expanded) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(console_logger::recent());

    let toggle = move |_| {
        if !expanded.get_untracked() {
            refresh();
        }
        set_expanded.update(|v| *v = !*v);
    };

    view! {
        <Show when=move || enabled>
            <div class="log-panel">
                <div class="log-panel-header">
                    <button class="outline-btn" on:click=toggle>
                        {move || if expanded.get() { "Скрыть журнал" } else { "Журнал" }}
                    </button>
                    <Show when=move || expanded.get()>
                        <button class="outline-btn" on:click=move |_| refresh()>"Обновить"</button>
                    </Show>
                </div>
                <Show when=move || expanded.get()>
                    <pre class="log-lines">
                        {move || lines.get().join("\n")}
                    </pre>
                </Show>
            </div>
        </Show>
    }
}
