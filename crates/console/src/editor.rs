//! Create and edit commands

use std::io::Write;

use tracing::debug;

use shopfront::prelude::*;

use crate::config::ProductArgs;

/// Collects what the form reports back.
#[derive(Debug, Default)]
struct TerminalHost {
    notices: Vec<Notice>,
    saved: bool,
}

impl FormHost for TerminalHost {
    fn cancel(&mut self) {
        debug!("edit cancelled");
    }

    fn notify(&mut self, message: String, severity: Severity) {
        self.notices.push(Notice { message, severity });
    }

    fn success(&mut self) {
        self.saved = true;
    }
}

/// Fill an empty form from `inputs` and save it as a new product.
pub(crate) async fn create<A: CatalogApi>(
    api: &A,
    inputs: ProductArgs,
    out: impl Write,
) -> Result<(), String> {
    let (shops, categories) = load_catalog(api).await?;

    let mut form = ProductForm::new(shops, categories, None);
    inputs.apply(&mut form);

    submit(api, &form, out).await
}

/// Load `product_id` from the product list, apply `inputs` over it and save it.
pub(crate) async fn edit<A: CatalogApi>(
    api: &A,
    product_id: &str,
    inputs: ProductArgs,
    out: impl Write,
) -> Result<(), String> {
    let (shops, categories) = load_catalog(api).await?;

    let mut page = BrowserPage::default();
    page.render_products(api, &ProductQuery::default()).await;

    let record = page
        .product(product_id)
        .cloned()
        .ok_or_else(|| format!("product {product_id} not found"))?;

    let mut form = ProductForm::new(shops, categories, Some(record));
    inputs.apply(&mut form);

    submit(api, &form, out).await
}

async fn load_catalog<A: CatalogApi>(api: &A) -> Result<(Vec<Shop>, Vec<Category>), String> {
    let shops = api
        .list_shops()
        .await
        .map_err(|error| format!("failed to load shops: {error}"))?;

    let categories = api
        .list_categories()
        .await
        .map_err(|error| format!("failed to load categories: {error}"))?;

    Ok((shops, categories))
}

async fn submit<A: CatalogApi>(api: &A, form: &ProductForm, mut out: impl Write) -> Result<(), String> {
    let write_error = |error: std::io::Error| format!("failed to write output: {error}");

    writeln!(out, "{}", form.heading()).map_err(write_error)?;

    let mut host = TerminalHost::default();

    form.submit(api, &mut host)
        .await
        .map_err(|error| error.to_string())?;

    for notice in &host.notices {
        writeln!(out, "[{}] {}", tag(notice.severity), notice.message).map_err(write_error)?;
    }

    if host.saved {
        Ok(())
    } else {
        Err("product was not saved".to_string())
    }
}

fn tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Success => "ok",
        Severity::Error => "error",
    }
}
