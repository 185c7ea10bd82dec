//! Catalog API seam

use serde::Deserialize;
use thiserror::Error;

use crate::{
    browser::ProductQuery,
    catalog::{Category, Shop},
    products::{ProductRecord, ProductWrite},
};

/// Errors at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not what the endpoint promises.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The API refused the operation; the message is shown to the user as is.
    #[error("{0}")]
    Rejected(String),
}

/// REST operations the form and the browser page depend on.
pub trait CatalogApi {
    /// `GET /shops`
    async fn list_shops(&self) -> Result<Vec<Shop>, ApiError>;

    /// `GET /categories`
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// `GET /products` filtered by the query.
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<ProductRecord>, ApiError>;

    /// Create or update a product, returning the API's confirmation message.
    async fn save_product(&self, product: &ProductWrite) -> Result<String, ApiError>;
}

/// Body returned by the save endpoint: `{message}` or `{error}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveReply {
    /// Confirmation, present on success
    #[serde(default)]
    pub message: Option<String>,

    /// Reason, present on failure
    #[serde(default)]
    pub error: Option<String>,
}

impl SaveReply {
    /// Turn the reply into a tagged result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the reply carries an error instead of a
    /// message, and [`ApiError::Decode`] when it carries neither.
    pub fn into_result(self) -> Result<String, ApiError> {
        match (self.message, self.error) {
            (Some(message), _) if !message.is_empty() => Ok(message),
            (_, Some(error)) => Err(ApiError::Rejected(error)),
            _ => Err(ApiError::Decode(
                "save reply has neither a message nor an error".to_string(),
            )),
        }
    }
}
