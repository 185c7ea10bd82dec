//! Tab bar and panels

use leptos::{logging, prelude::*};

use shopfront::tabs::TabSet;

/// Tabs in display order.
pub(crate) const TAB_NAMES: [&str; 3] = ["products", "editor", "stats"];

/// Activate the panel and button for `name`.
pub(crate) fn switch_tab(tabs: RwSignal<TabSet>, name: &str) {
    if let Some(Err(error)) = tabs.try_update(|tabs| tabs.switch(name)) {
        logging::error!("Error switching tab: {error}");
    }
}

fn tab_label(name: &'static str) -> &'static str {
    match name {
        "products" => "Sản phẩm",
        "editor" => "Biên tập",
        "stats" => "Thống kê",
        other => other,
    }
}

fn marker_class(base: &'static str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// One `.tab-btn` per tab.
#[component]
pub fn TabButtons(tabs: RwSignal<TabSet>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {TAB_NAMES
                .iter()
                .map(|&name| {
                    view! {
                        <button
                            type="button"
                            class=move || marker_class("tab-btn", tabs.with(|tabs| tabs.button_active(name)))
                            on:click=move |_| switch_tab(tabs, name)
                        >
                            {tab_label(name)}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// The `tab-<name>` panel.
#[component]
pub fn TabPanel(tabs: RwSignal<TabSet>, name: &'static str, children: Children) -> impl IntoView {
    view! {
        <section
            id=format!("tab-{name}")
            class=move || marker_class("tab-content", tabs.with(|tabs| tabs.panel_active(name)))
        >
            {children()}
        </section>
    }
}
