//! HTTP implementation of the catalog API.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use shopfront::{
    api::{ApiError, CatalogApi, SaveReply},
    browser::ProductQuery,
    catalog::{Category, Shop},
    products::{ProductRecord, ProductWrite},
};

use crate::{config::ClientConfig, errors::ClientError};

/// `reqwest` client for the shop/product REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    base_url: String,
    http: Client,
}

impl HttpCatalogApi {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Url::parse(&base_url)
            .map_err(|error| ClientError::InvalidBaseUrl(format!("{base_url}: {error}")))?;

        let builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };

        Ok(Self {
            base_url,
            http: builder.build()?,
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the filtered product list.
    #[must_use]
    pub fn products_url(&self, query: &ProductQuery) -> String {
        format!("{}/products?{}", self.base_url, query.to_query_string())
    }

    /// URL the product is saved to: the collection for new products, the product
    /// itself for existing ones.
    #[must_use]
    pub fn save_url(&self, product: &ProductWrite) -> String {
        match &product.id {
            Some(id) => format!(
                "{}/products/{}",
                self.base_url,
                urlencoding::encode(id.as_str())
            ),
            None => format!("{}/products", self.base_url),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {url}");

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status();

        if !status.is_success() {
            return Err(ApiError::Transport(format!(
                "GET {url} failed with status {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|error| ApiError::Decode(format!("GET {url}: {error}")))
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn list_shops(&self) -> Result<Vec<Shop>, ApiError> {
        self.get_json(&format!("{}/shops", self.base_url)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(&format!("{}/categories", self.base_url))
            .await
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<ProductRecord>, ApiError> {
        self.get_json(&self.products_url(query)).await
    }

    async fn save_product(&self, product: &ProductWrite) -> Result<String, ApiError> {
        let url = self.save_url(product);

        let request = if product.id.is_some() {
            debug!("PUT {url}");
            self.http.put(&url)
        } else {
            debug!("POST {url}");
            self.http.post(&url)
        };

        let response = request.json(product).send().await.map_err(transport)?;
        let status = response.status();

        // Both outcomes carry a JSON body, whatever the status code.
        let reply: SaveReply = response.json().await.map_err(|error| {
            ApiError::Decode(format!("save reply with status {status}: {error}"))
        })?;

        reply.into_result()
    }
}

fn transport(error: reqwest::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}
