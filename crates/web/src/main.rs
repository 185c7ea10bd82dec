//! Shopfront browser front end

use leptos::{logging, prelude::*, task};

use shopfront::prelude::*;
use shopfront_client::{ClientConfig, HttpCatalogApi};

mod browser;
mod form;
mod notices;
mod tabs;
mod timers;

#[cfg(test)]
mod test_helpers;

use browser::{Filters, ProductBrowser, StatShopSelect};
use form::ProductFormPanel;
use notices::{NotificationBanner, show_notice};
use tabs::{TAB_NAMES, TabButtons, TabPanel, switch_tab};

/// Page shell: banner, tabs, browser and form.
#[component]
fn App() -> impl IntoView {
    let api = match HttpCatalogApi::new(ClientConfig::default()) {
        Ok(api) => StoredValue::new_local(api),
        Err(error) => {
            logging::error!("{error}");

            return view! {
                <main class="app-shell">
                    <p class="notification error">{error.to_string()}</p>
                </main>
            }
            .into_any();
        }
    };

    let banner = RwSignal::new(NoticeBanner::default());
    let tabs = RwSignal::new(TabSet::new(TAB_NAMES));
    let page = RwSignal::new(BrowserPage::default());
    let filters = Filters::new();
    let shops = RwSignal::new(Vec::<Shop>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let edit_data = RwSignal::new(None::<ProductRecord>);

    switch_tab(tabs, "products");

    task::spawn_local(async move {
        let api = api.get_value();

        browser::load_shops(&api, page, shops).await;
        browser::render_table(&api, page, filters.query()).await;
    });

    task::spawn_local(async move {
        form::load_categories(&api.get_value(), categories).await;
    });

    let on_edit = Callback::new(move |id: String| {
        edit_data.set(page.with_untracked(|page| page.product(&id).cloned()));
        switch_tab(tabs, "editor");
    });

    let on_cancel = Callback::new(move |()| {
        edit_data.set(None);
        switch_tab(tabs, "products");
    });

    let on_notify = Callback::new(move |(message, severity): (String, Severity)| {
        show_notice(banner, message, severity);
    });

    let on_success = Callback::new(move |()| {
        edit_data.set(None);
        switch_tab(tabs, "products");

        task::spawn_local(async move {
            browser::render_table(&api.get_value(), page, filters.query()).await;
        });
    });

    view! {
        <main class="app-shell">
            <NotificationBanner banner=banner />
            <TabButtons tabs=tabs />
            <TabPanel tabs=tabs name="products">
                <ProductBrowser api=api page=page filters=filters on_edit=on_edit />
            </TabPanel>
            <TabPanel tabs=tabs name="editor">
                <ProductFormPanel
                    api=api
                    shops=shops
                    categories=categories
                    edit_data=edit_data
                    on_cancel=on_cancel
                    on_notify=on_notify
                    on_success=on_success
                />
            </TabPanel>
            <TabPanel tabs=tabs name="stats">
                <StatShopSelect page=page />
            </TabPanel>
        </main>
    }
    .into_any()
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
