//! Shopfront REST client.
//!
//! [`HttpCatalogApi`] implements the [`shopfront::api::CatalogApi`] seam over `reqwest`,
//! natively and in the browser.

mod catalog;
mod config;
mod errors;

pub use catalog::HttpCatalogApi;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use errors::ClientError;
