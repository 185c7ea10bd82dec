//! Shopfront
//!
//! Shopfront is the state layer of a small admin front end for shops, categories and
//! products. It holds the product form, the product browser page and the API seam both
//! of them talk through; rendering is left to the `console` and `web` crates.

pub mod api;
pub mod browser;
pub mod catalog;
pub mod form;
pub mod money;
pub mod notices;
pub mod prelude;
pub mod products;
pub mod tabs;
