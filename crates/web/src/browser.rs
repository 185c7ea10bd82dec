//! Product browser page

use leptos::{logging, prelude::*, task};

use shopfront::prelude::*;
use shopfront_client::HttpCatalogApi;

/// Raw contents of the three search inputs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Filters {
    keyword: RwSignal<String>,
    min: RwSignal<String>,
    max: RwSignal<String>,
}

impl Filters {
    pub(crate) fn new() -> Self {
        Self {
            keyword: RwSignal::new(String::new()),
            min: RwSignal::new(String::new()),
            max: RwSignal::new(String::new()),
        }
    }

    /// Snapshot of the inputs, trimmed.
    pub(crate) fn query(self) -> ProductQuery {
        ProductQuery::new(
            &self.keyword.get_untracked(),
            &self.min.get_untracked(),
            &self.max.get_untracked(),
        )
    }
}

/// Fetch shops into both selectors and the shared shop list.
pub(crate) async fn load_shops<A: CatalogApi>(
    api: &A,
    page: RwSignal<BrowserPage>,
    shops: RwSignal<Vec<Shop>>,
) {
    match api.list_shops().await {
        Ok(loaded) => {
            page.update(|page| page.apply_shops(&loaded));
            shops.set(loaded);
        }
        Err(error) => logging::error!("Error loading shops: {error}"),
    }
}

/// Clear the table, fetch `query` and show the rows unless a newer render started.
pub(crate) async fn render_table<A: CatalogApi>(
    api: &A,
    page: RwSignal<BrowserPage>,
    query: ProductQuery,
) {
    let Some(ticket) = page.try_update(BrowserPage::begin_render) else {
        return;
    };

    match api.list_products(&query).await {
        Ok(products) => page.update(|page| {
            page.finish_render(ticket, &products);
        }),
        Err(error) => logging::error!("Error rendering product table: {error}"),
    }
}

fn selector_options(options: &[ShopOption]) -> AnyView {
    options
        .iter()
        .map(|option| {
            view! { <option value=option.value.clone()>{option.label.clone()}</option> }
        })
        .collect_view()
        .into_any()
}

#[component]
fn ProductRows(page: RwSignal<BrowserPage>, on_edit: Callback<String>) -> impl IntoView {
    view! {
        {move || page.with(|page| match page.table() {
            TableBody::Blank => ().into_any(),
            TableBody::Empty => view! {
                <tr>
                    <td colspan=PLACEHOLDER_COLSPAN.to_string() class="table-placeholder">
                        {EMPTY_RESULT_MESSAGE}
                    </td>
                </tr>
            }
            .into_any(),
            TableBody::Rows(rows) => rows
                .iter()
                .map(|row| {
                    let id = row.id.clone();

                    view! {
                        <tr class="product-row" on:click=move |_| on_edit.run(id.clone())>
                            <td>{row.id.clone()}</td>
                            <td>{row.name.clone()}</td>
                            <td>{row.category.clone()}</td>
                            <td>{row.shop.clone()}</td>
                            <td class="price">{row.price.clone()}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        })}
    }
}

/// Filters, shop selector and the product table.
#[component]
pub fn ProductBrowser(
    /// API client.
    api: StoredValue<HttpCatalogApi, LocalStorage>,
    /// Page state shared with the other tabs.
    page: RwSignal<BrowserPage>,
    /// Search inputs.
    filters: Filters,
    /// Called with the id of a clicked row.
    on_edit: Callback<String>,
) -> impl IntoView {
    let search = move || {
        let api = api.get_value();
        let query = filters.query();

        task::spawn_local(async move {
            render_table(&api, page, query).await;
        });
    };

    view! {
        <div class="browser-toolbar">
            <select id="inputShop" class="form-control">
                {move || page.with(|page| selector_options(page.shop_options()))}
            </select>
            <input
                id="searchKeyword"
                type="search"
                placeholder="Từ khóa"
                prop:value=move || filters.keyword.get()
                on:input=move |ev| filters.keyword.set(event_target_value(&ev))
            />
            <input
                id="searchMin"
                type="number"
                placeholder="Giá từ"
                prop:value=move || filters.min.get()
                on:input=move |ev| filters.min.set(event_target_value(&ev))
            />
            <input
                id="searchMax"
                type="number"
                placeholder="Giá đến"
                prop:value=move || filters.max.get()
                on:input=move |ev| filters.max.set(event_target_value(&ev))
            />
            <button type="button" class="btn btn-primary" on:click=move |_| search()>
                <i class="fas fa-search"></i>
                " Tìm kiếm"
            </button>
        </div>
        <table class="product-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Sản phẩm"</th>
                    <th>"Danh mục"</th>
                    <th>"Cửa hàng"</th>
                    <th>"Đơn giá"</th>
                </tr>
            </thead>
            <tbody id="productTableBody">
                <ProductRows page=page on_edit=on_edit />
            </tbody>
        </table>
    }
}

/// Shop selector of the statistics tab.
#[component]
pub fn StatShopSelect(page: RwSignal<BrowserPage>) -> impl IntoView {
    view! {
        <select id="statShopSelect" class="form-control">
            {move || page.with(|page| selector_options(page.stat_shop_options()))}
        </select>
    }
}
