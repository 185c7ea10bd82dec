//! Stub API shared by the command tests.

use std::cell::RefCell;

use shopfront::prelude::*;

#[derive(Debug, Default)]
pub(crate) struct StubApi {
    pub shops: Vec<Shop>,
    pub categories: Vec<Category>,
    /// `None` fails the product list.
    pub products: Option<Vec<ProductRecord>>,
    /// `None` confirms every save.
    pub save_error: Option<ApiError>,
    pub saved: RefCell<Vec<ProductWrite>>,
    pub log: RefCell<Vec<String>>,
}

impl StubApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl CatalogApi for StubApi {
    async fn list_shops(&self) -> Result<Vec<Shop>, ApiError> {
        self.log.borrow_mut().push("shops".to_string());

        Ok(self.shops.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.log.borrow_mut().push("categories".to_string());

        Ok(self.categories.clone())
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<ProductRecord>, ApiError> {
        self.log
            .borrow_mut()
            .push(format!("products:{}", query.to_query_string()));

        self.products
            .clone()
            .ok_or_else(|| ApiError::Transport("connection refused".to_string()))
    }

    async fn save_product(&self, product: &ProductWrite) -> Result<String, ApiError> {
        self.saved.borrow_mut().push(product.clone());

        match &self.save_error {
            Some(error) => Err(error.clone()),
            None => Ok("Lưu thành công".to_string()),
        }
    }
}

pub(crate) fn shop(id: &str, name: &str) -> Shop {
    Shop {
        id: ShopId::new(id),
        name: name.to_string(),
        status: "active".to_string(),
    }
}

pub(crate) fn category(id: &str, name: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
    }
}

pub(crate) fn product(id: &str, name: &str, shop_name: &str, price: f64) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: name.to_string(),
        category: "Phụ kiện".to_string(),
        shop_name: shop_name.to_string(),
        price: RawAmount::from(price),
        description: Some("Không dây".to_string()),
    }
}
