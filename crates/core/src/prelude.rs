//! Shopfront prelude.
//!
//! Convenience exports for the front-end crates.

pub use crate::{
    api::{ApiError, CatalogApi, SaveReply},
    browser::{
        BrowserPage, EMPTY_RESULT_MESSAGE, PLACEHOLDER_COLSPAN, ProductQuery, RenderGeneration,
        RenderTicket, ShopOption, TableBody, TableRow, shop_options, stat_shop_options,
    },
    catalog::{CatalogIndex, Category, CategoryId, ProductId, Shop, ShopId},
    form::{
        CANCEL_LABEL, FormError, FormField, FormHost, FormMode, ProductDraft, ProductForm,
        SubmitOutcome,
    },
    money::{RawAmount, ZERO_DISPLAY, format_money},
    notices::{NOTICE_DURATION, Notice, NoticeBanner, Severity},
    products::{ProductRecord, ProductWrite},
    tabs::{TabError, TabSet},
};
