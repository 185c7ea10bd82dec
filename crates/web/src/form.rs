//! Product form component

use leptos::{
    ev::{MouseEvent, SubmitEvent},
    logging,
    prelude::*,
    task,
};

use shopfront::prelude::*;
use shopfront_client::HttpCatalogApi;

/// Forwards the form's callbacks to the owning page.
#[derive(Debug, Clone, Copy)]
struct CallbackHost {
    on_cancel: Callback<()>,
    on_notify: Callback<(String, Severity)>,
    on_success: Callback<()>,
}

impl FormHost for CallbackHost {
    fn cancel(&mut self) {
        self.on_cancel.run(());
    }

    fn notify(&mut self, message: String, severity: Severity) {
        self.on_notify.run((message, severity));
    }

    fn success(&mut self) {
        self.on_success.run(());
    }
}

/// Fetch the category list the form selects from.
pub(crate) async fn load_categories<A: CatalogApi>(api: &A, categories: RwSignal<Vec<Category>>) {
    match api.list_categories().await {
        Ok(loaded) => categories.set(loaded),
        Err(error) => logging::error!("Error loading categories: {error}"),
    }
}

/// Validate and save a snapshot of the form, reporting through `host`.
async fn save<A: CatalogApi, H: FormHost>(api: &A, form: &ProductForm, host: &mut H) {
    if let Err(error) = form.submit(api, host).await {
        host.notify(error.to_string(), Severity::Error);
    }
}

fn set_field(form: RwSignal<ProductForm>, field: FormField, value: String) {
    form.update(|form| form.set_field(field, value));
}

/// Create/edit form for one product.
#[component]
pub fn ProductFormPanel(
    /// API client.
    api: StoredValue<HttpCatalogApi, LocalStorage>,
    /// Shops offered by the shop selector.
    shops: RwSignal<Vec<Shop>>,
    /// Categories offered by the category selector.
    categories: RwSignal<Vec<Category>>,
    /// Record being edited; `None` creates a product.
    edit_data: RwSignal<Option<ProductRecord>>,
    /// Called when editing is abandoned.
    on_cancel: Callback<()>,
    /// Called with each message to show.
    on_notify: Callback<(String, Severity)>,
    /// Called once a save is confirmed.
    on_success: Callback<()>,
) -> impl IntoView {
    let host = CallbackHost {
        on_cancel,
        on_notify,
        on_success,
    };
    let form = RwSignal::new(ProductForm::default());

    Effect::new(move |_| {
        let shops = shops.get();
        let categories = categories.get();
        let edit_data = edit_data.get();

        form.update(|form| {
            form.set_catalog(shops, categories);
            form.set_edit_data(edit_data);
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let snapshot = form.get_untracked();
        let api = api.get_value();
        let mut host = host;

        task::spawn_local(async move {
            save(&api, &snapshot, &mut host).await;
        });
    };

    let on_cancel_click = move |_: MouseEvent| {
        let mut host = host;

        form.with_untracked(|form| form.cancel(&mut host));
    };

    view! {
        <div class="view-container">
            <div class="top-header">
                <h1>{move || form.with(ProductForm::heading)}</h1>
                <p class="subtitle">"Nhập thông tin chi tiết vào hệ thống"</p>
            </div>
            <div class="glass-panel">
                <form on:submit=on_submit>
                    <div class="form-grid">
                        <div class="input-group">
                            <label class="input-label">
                                <i class="fas fa-store"></i>
                                " Đơn vị cung cấp (Shop)"
                            </label>
                            <select
                                required
                                class="form-control"
                                prop:value=move || form.with(|form| form.draft().shop_id.to_string())
                                on:change=move |ev| set_field(form, FormField::Shop, event_target_value(&ev))
                            >
                                <option value="">"-- Chọn dữ liệu --"</option>
                                {move || form.with(|form| {
                                    form.shops()
                                        .iter()
                                        .map(|shop| view! { <option value=shop.id.to_string()>{shop.name.clone()}</option> })
                                        .collect_view()
                                })}
                            </select>
                        </div>
                        <div class="input-group">
                            <label class="input-label">
                                <i class="fas fa-tag"></i>
                                " Phân loại (Category)"
                            </label>
                            <select
                                required
                                class="form-control"
                                prop:value=move || form.with(|form| form.draft().category_id.to_string())
                                on:change=move |ev| set_field(form, FormField::Category, event_target_value(&ev))
                            >
                                <option value="">"-- Chọn dữ liệu --"</option>
                                {move || form.with(|form| {
                                    form.categories()
                                        .iter()
                                        .map(|category| view! { <option value=category.id.to_string()>{category.name.clone()}</option> })
                                        .collect_view()
                                })}
                            </select>
                        </div>
                    </div>
                    <div class="form-grid">
                        <div class="input-group">
                            <label class="input-label">
                                <i class="fas fa-box"></i>
                                " Tên định danh"
                            </label>
                            <input
                                required
                                class="form-control"
                                placeholder="VD: Bàn phím cơ..."
                                prop:value=move || form.with(|form| form.draft().name.clone())
                                on:input=move |ev| set_field(form, FormField::Name, event_target_value(&ev))
                            />
                        </div>
                        <div class="input-group">
                            <label class="input-label">
                                <i class="fas fa-dollar-sign"></i>
                                " Đơn giá niêm yết"
                            </label>
                            <input
                                required
                                type="number"
                                class="form-control"
                                placeholder="0"
                                prop:value=move || form.with(|form| form.draft().price.clone())
                                on:input=move |ev| set_field(form, FormField::Price, event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="input-group">
                        <label class="input-label">
                            <i class="fas fa-align-left"></i>
                            " Thông tin chi tiết"
                        </label>
                        <textarea
                            class="form-control"
                            rows="5"
                            placeholder="Nhập mô tả kỹ thuật..."
                            prop:value=move || form.with(|form| form.draft().desc.clone())
                            on:input=move |ev| set_field(form, FormField::Description, event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        {move || {
                            form.with(ProductForm::can_cancel)
                                .then(|| {
                                    view! {
                                        <button type="button" class="btn btn-ghost" on:click=on_cancel_click>
                                            {CANCEL_LABEL}
                                        </button>
                                    }
                                })
                        }}
                        <button type="submit" class="btn btn-primary">
                            <i class="fas fa-save"></i>
                            " "
                            {move || form.with(ProductForm::submit_label)}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
