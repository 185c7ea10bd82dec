//! Stub API for the component tests.

use std::cell::RefCell;

use shopfront::prelude::*;

/// Lists set to `None` fail with a transport error.
#[derive(Debug, Default)]
pub(crate) struct StubApi {
    pub shops: Option<Vec<Shop>>,
    pub categories: Option<Vec<Category>>,
    pub products: Option<Vec<ProductRecord>>,
    pub save_error: Option<ApiError>,
    pub saved: RefCell<Vec<ProductWrite>>,
    pub log: RefCell<Vec<String>>,
}

impl StubApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

fn listed_or_refused<T>(list: Option<&Vec<T>>) -> Result<Vec<T>, ApiError>
where
    T: Clone,
{
    list.cloned()
        .ok_or_else(|| ApiError::Transport("connection refused".to_string()))
}

impl CatalogApi for StubApi {
    async fn list_shops(&self) -> Result<Vec<Shop>, ApiError> {
        self.log.borrow_mut().push("shops".to_string());

        listed_or_refused(self.shops.as_ref())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.log.borrow_mut().push("categories".to_string());

        listed_or_refused(self.categories.as_ref())
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<ProductRecord>, ApiError> {
        self.log
            .borrow_mut()
            .push(format!("products:{}", query.to_query_string()));

        listed_or_refused(self.products.as_ref())
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

pub(crate) fn product(id: &str, name: &str) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        name: name.to_string(),
        category: "Phụ kiện".to_string(),
        shop_name: "Kho Hà Nội".to_string(),
        price: RawAmount::Number(99_000.0),
        description: None,
    }
}
