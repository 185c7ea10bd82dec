//! Product browser page

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::Columns, object::Rows},
};
use tracing::{debug, error, info};

use crate::{
    api::CatalogApi,
    catalog::Shop,
    money::format_money,
    products::ProductRecord,
};

/// Columns the placeholder row spans.
pub const PLACEHOLDER_COLSPAN: usize = 5;

/// Placeholder text for an empty result set.
pub const EMPTY_RESULT_MESSAGE: &str = "Không tìm thấy sản phẩm nào.";

/// Product list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Free-text keyword
    pub keyword: String,

    /// Minimum price, as typed
    pub min: String,

    /// Maximum price, as typed
    pub max: String,
}

impl ProductQuery {
    /// Build a query from raw input values, trimming each.
    pub fn new(keyword: &str, min: &str, max: &str) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            min: min.trim().to_string(),
            max: max.trim().to_string(),
        }
    }

    /// Query string for `GET /products`.
    ///
    /// Only the keyword is percent-encoded; `min` and `max` go through untouched,
    /// empty or not.
    pub fn to_query_string(&self) -> String {
        format!(
            "keyword={}&min={}&max={}",
            urlencoding::encode(&self.keyword),
            self.min,
            self.max
        )
    }
}

/// A selectable shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopOption {
    /// Raw shop identifier
    pub value: String,

    /// Visible label
    pub label: String,
}

/// Options for the product shop selector: `name (status)`.
pub fn shop_options(shops: &[Shop]) -> Vec<ShopOption> {
    shops
        .iter()
        .map(|shop| ShopOption {
            value: shop.id.to_string(),
            label: format!("{} ({})", shop.name, shop.status),
        })
        .collect()
}

/// Options for the statistics shop selector: `name`.
pub fn stat_shop_options(shops: &[Shop]) -> Vec<ShopOption> {
    shops
        .iter()
        .map(|shop| ShopOption {
            value: shop.id.to_string(),
            label: shop.name.clone(),
        })
        .collect()
}

/// One rendered product row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Category display name
    pub category: String,

    /// Shop display name
    pub shop: String,

    /// Formatted price
    pub price: String,
}

impl From<&ProductRecord> for TableRow {
    fn from(product: &ProductRecord) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            shop: product.shop_name.clone(),
            price: format_money(product.price.clone()),
        }
    }
}

/// Contents of the product table body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableBody {
    /// Cleared, waiting for a response
    #[default]
    Blank,

    /// The query matched nothing; a single placeholder row
    Empty,

    /// One row per product
    Rows(Vec<TableRow>),
}

impl TableBody {
    /// Body for a product list response.
    pub fn from_products(products: &[ProductRecord]) -> Self {
        if products.is_empty() {
            return Self::Empty;
        }

        Self::Rows(products.iter().map(TableRow::from).collect())
    }

    /// Number of `<tr>` elements the body renders.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Blank => 0,
            Self::Empty => 1,
            Self::Rows(rows) => rows.len(),
        }
    }

    /// Writes the table to a terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        match self {
            Self::Blank => Ok(()),
            Self::Empty => writeln!(out, "{EMPTY_RESULT_MESSAGE}"),
            Self::Rows(rows) => {
                let mut builder = Builder::default();

                builder.push_record(["ID", "Sản phẩm", "Danh mục", "Cửa hàng", "Đơn giá"]);

                for row in rows {
                    builder.push_record([
                        row.id.as_str(),
                        row.name.as_str(),
                        row.category.as_str(),
                        row.shop.as_str(),
                        row.price.as_str(),
                    ]);
                }

                let mut table = builder.build();

                table.with(Style::modern_rounded());
                table.modify(Rows::first(), Color::BOLD);
                table.modify(Columns::new(4..5), Alignment::right());

                writeln!(out, "{table}")
            }
        }
    }
}

/// Ticket for one table render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket(u64);

/// Generation counter that lets only the newest table render land.
#[derive(Debug, Clone, Default)]
pub struct RenderGeneration {
    latest: u64,
}

impl RenderGeneration {
    /// Start a render, superseding every earlier ticket.
    pub fn begin(&mut self) -> RenderTicket {
        self.latest = self.latest.wrapping_add(1);

        RenderTicket(self.latest)
    }

    /// Whether no render started after this ticket.
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// State of the product browser page.
#[derive(Debug, Clone, Default)]
pub struct BrowserPage {
    shop_options: Vec<ShopOption>,
    stat_shop_options: Vec<ShopOption>,
    table: TableBody,
    products: Vec<ProductRecord>,
    generation: RenderGeneration,
}

impl BrowserPage {
    /// Load shops, then render the product table.
    pub async fn init<A: CatalogApi>(&mut self, api: &A, query: &ProductQuery) {
        self.load_shops(api).await;
        self.render_products(api, query).await;
    }

    /// Fetch shops into both selectors.
    ///
    /// Failures are logged and leave the selectors as they were.
    pub async fn load_shops<A: CatalogApi>(&mut self, api: &A) {
        match api.list_shops().await {
            Ok(shops) => self.apply_shops(&shops),
            Err(error) => error!("Error loading shops: {error}"),
        }
    }

    /// Fill both selectors from a shop list.
    pub fn apply_shops(&mut self, shops: &[Shop]) {
        info!(count = shops.len(), "loaded shops");

        self.shop_options = shop_options(shops);
        self.stat_shop_options = stat_shop_options(shops);
    }

    /// Fetch products for `query` into the table.
    ///
    /// Failures are logged and leave the table blank.
    pub async fn render_products<A: CatalogApi>(&mut self, api: &A, query: &ProductQuery) {
        let ticket = self.begin_render();

        match api.list_products(query).await {
            Ok(products) => {
                self.finish_render(ticket, &products);
            }
            Err(error) => error!("Error rendering product table: {error}"),
        }
    }

    /// Clear the table and take a ticket for the render about to be fetched.
    pub fn begin_render(&mut self) -> RenderTicket {
        self.table = TableBody::Blank;
        self.products.clear();

        self.generation.begin()
    }

    /// Apply a product list if `ticket` is still the newest render.
    ///
    /// Returns whether the rows were applied.
    pub fn finish_render(&mut self, ticket: RenderTicket, products: &[ProductRecord]) -> bool {
        if !self.generation.is_current(ticket) {
            debug!(?ticket, "discarding stale product list");

            return false;
        }

        self.table = TableBody::from_products(products);
        self.products = products.to_vec();

        true
    }

    /// Options of the product shop selector.
    pub fn shop_options(&self) -> &[ShopOption] {
        &self.shop_options
    }

    /// Options of the statistics shop selector.
    pub fn stat_shop_options(&self) -> &[ShopOption] {
        &self.stat_shop_options
    }

    /// Current table body.
    pub fn table(&self) -> &TableBody {
        &self.table
    }

    /// Record behind a rendered row.
    pub fn product(&self, id: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|product| product.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{catalog::ShopId, catalog::ProductId, money::RawAmount};

    use super::*;

    fn product(id: &str, name: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            name: name.to_string(),
            category: "Phụ kiện".to_string(),
            shop_name: "Kho Hà Nội".to_string(),
            price: RawAmount::Number(price),
            description: None,
        }
    }

    #[test]
    fn query_trims_inputs() {
        let query = ProductQuery::new("  bàn phím ", " 10 ", "");

        assert_eq!(query.keyword, "bàn phím");
        assert_eq!(query.min, "10");
        assert_eq!(query.max, "");
    }

    #[test]
    fn query_string_encodes_only_the_keyword() {
        let query = ProductQuery::new("bàn phím&cơ", "100", "");

        assert_eq!(
            query.to_query_string(),
            "keyword=b%C3%A0n%20ph%C3%ADm%26c%C6%A1&min=100&max="
        );
    }

    #[test]
    fn empty_query_string_keeps_all_parameters() {
        assert_eq!(
            ProductQuery::default().to_query_string(),
            "keyword=&min=&max="
        );
    }

    #[test]
    fn shop_selectors_use_raw_identifier_and_labels() {
        let shops = [Shop {
            id: ShopId::new("7"),
            name: "Kho Huế".to_string(),
            status: "active".to_string(),
        }];

        assert_eq!(
            shop_options(&shops),
            vec![ShopOption {
                value: "7".to_string(),
                label: "Kho Huế (active)".to_string(),
            }]
        );
        assert_eq!(
            stat_shop_options(&shops),
            vec![ShopOption {
                value: "7".to_string(),
                label: "Kho Huế".to_string(),
            }]
        );
    }

    #[test]
    fn empty_product_list_renders_a_placeholder_row() {
        let body = TableBody::from_products(&[]);

        assert_eq!(body, TableBody::Empty);
        assert_eq!(body.row_count(), 1);
        assert_eq!(PLACEHOLDER_COLSPAN, 5);
    }

    #[test]
    fn each_product_renders_one_row() {
        let products = [product("1", "Chuột", 99_000.0), product("2", "Bàn phím", 1000.0)];

        let body = TableBody::from_products(&products);

        assert_eq!(body.row_count(), 2);

        let TableBody::Rows(rows) = body else {
            unreachable!("non-empty list renders rows");
        };

        assert_eq!(rows[1].id, "2");
        assert_eq!(rows[1].name, "Bàn phím");
        assert_eq!(rows[1].category, "Phụ kiện");
        assert_eq!(rows[1].shop, "Kho Hà Nội");
        assert_eq!(rows[1].price, format_money(1000.0));
    }

    #[test]
    fn stale_render_is_discarded() {
        let mut page = BrowserPage::default();

        let first = page.begin_render();
        let second = page.begin_render();

        assert!(page.finish_render(second, &[product("2", "Mới", 1.0)]));
        assert!(!page.finish_render(first, &[]));
        assert_eq!(page.table().row_count(), 1);
        assert!(matches!(page.table(), TableBody::Rows(_)));
    }

    #[test]
    fn begin_render_clears_the_table() {
        let mut page = BrowserPage::default();

        let ticket = page.begin_render();
        page.finish_render(ticket, &[product("1", "Chuột", 1.0)]);

        page.begin_render();

        assert_eq!(page.table(), &TableBody::Blank);
    }

    #[test]
    fn rendered_records_can_be_looked_up_by_id() {
        let mut page = BrowserPage::default();
        let ticket = page.begin_render();

        page.finish_render(ticket, &[product("7", "Loa", 350_000.0)]);

        assert_eq!(page.product("7").map(|record| record.name.as_str()), Some("Loa"));
        assert_eq!(page.product("8"), None);

        page.begin_render();

        assert_eq!(page.product("7"), None);
    }

    #[test]
    fn write_to_renders_rows() -> TestResult {
        let body = TableBody::from_products(&[product("1", "Chuột", 99_000.0)]);

        let mut out = Vec::new();
        body.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Chuột"));
        assert!(output.contains("Kho Hà Nội"));
        assert!(output.contains('₫'));

        Ok(())
    }

    #[test]
    fn write_to_renders_placeholder_for_empty_result() -> TestResult {
        let mut out = Vec::new();
        TableBody::Empty.write_to(&mut out)?;

        assert_eq!(String::from_utf8(out)?, format!("{EMPTY_RESULT_MESSAGE}\n"));

        Ok(())
    }
}
