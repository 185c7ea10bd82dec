//! Browse and shops commands

use std::io::Write;

use tabled::{builder::Builder, settings::Style};

use shopfront::prelude::*;

/// Load the shop selectors, then render the products matching `query`.
pub(crate) async fn browse<A: CatalogApi>(
    api: &A,
    query: &ProductQuery,
    mut out: impl Write,
) -> Result<(), String> {
    let mut page = BrowserPage::default();

    page.init(api, query).await;

    page.table()
        .write_to(&mut out)
        .map_err(|error| format!("failed to write product table: {error}"))
}

/// Print both shop selectors side by side.
pub(crate) async fn shops<A: CatalogApi>(api: &A, mut out: impl Write) -> Result<(), String> {
    let mut page = BrowserPage::default();

    page.load_shops(api).await;

    if page.shop_options().is_empty() {
        return Err("no shops loaded".to_string());
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Cửa hàng", "Thống kê"]);

    for (option, stat) in page.shop_options().iter().zip(page.stat_shop_options()) {
        builder.push_record([option.value.as_str(), option.label.as_str(), stat.label.as_str()]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "{table}").map_err(|error| format!("failed to write shop table: {error}"))
}
