//! Products

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{CategoryId, ProductId, ShopId},
    money::RawAmount,
};

/// Product as the read API returns it and the table shows it.
///
/// Shop and category come denormalized as display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product identifier
    #[serde(rename = "productID")]
    pub id: ProductId,

    /// Product name
    #[serde(rename = "ProductName", default)]
    pub name: String,

    /// Category display name. The list endpoint spells the field `Catagory`.
    #[serde(rename = "Catagory", alias = "Category", default)]
    pub category: String,

    /// Shop display name
    #[serde(rename = "ShopName", default)]
    pub shop_name: String,

    /// Price, as sent by the API
    #[serde(rename = "Price", default)]
    pub price: RawAmount,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Product as the save API expects it.
///
/// Carries the form draft's own `price`/`desc` next to the `basePrice`/`description`
/// the API reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWrite {
    /// Set when updating an existing product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,

    /// Owning shop
    #[serde(rename = "shopID")]
    pub shop_id: ShopId,

    /// Category
    #[serde(rename = "categoryID")]
    pub category_id: CategoryId,

    /// Product name
    pub name: String,

    /// Price as entered
    pub price: String,

    /// Description as entered
    pub desc: String,

    /// Price the API stores
    #[serde(rename = "basePrice")]
    pub base_price: String,

    /// Description the API stores
    pub description: String,
}
