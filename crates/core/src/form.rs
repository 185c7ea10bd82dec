//! Product form

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    api::CatalogApi,
    catalog::{CatalogIndex, Category, CategoryId, ProductId, Shop, ShopId},
    notices::Severity,
    products::{ProductRecord, ProductWrite},
};

/// Submit button label in create mode.
pub const CREATE_LABEL: &str = "Lưu vào kho dữ liệu";

/// Submit button label in edit mode.
pub const UPDATE_LABEL: &str = "Cập nhật hệ thống";

/// Cancel button label.
pub const CANCEL_LABEL: &str = "Hủy bỏ";

/// Form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Shop selector
    Shop,

    /// Category selector
    Category,

    /// Product name
    Name,

    /// Price
    Price,

    /// Description
    Description,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shop => "shop",
            Self::Category => "category",
            Self::Name => "name",
            Self::Price => "price",
            Self::Description => "description",
        })
    }
}

/// Reasons a submit is blocked before reaching the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field is blank.
    #[error("{0} is required")]
    Required(FormField),

    /// The price is not a number.
    #[error("price must be a number, got '{0}'")]
    InvalidPrice(String),
}

/// Create or edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// New product
    Create,

    /// Existing product
    Edit(ProductId),
}

/// Unsaved form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Product being edited
    pub id: Option<ProductId>,

    /// Selected shop, empty when none
    pub shop_id: ShopId,

    /// Selected category, empty when none
    pub category_id: CategoryId,

    /// Product name
    pub name: String,

    /// Price as entered
    pub price: String,

    /// Description
    pub desc: String,
}

impl ProductDraft {
    /// Draft for an existing record, resolving its shop and category names.
    ///
    /// Names with no match leave the selection empty.
    pub fn from_record(record: &ProductRecord, index: &CatalogIndex) -> Self {
        Self {
            id: Some(record.id.clone()),
            shop_id: index.shop_id(&record.shop_name).cloned().unwrap_or_default(),
            category_id: index
                .category_id(&record.category)
                .cloned()
                .unwrap_or_default(),
            name: record.name.clone(),
            price: record.price.to_input_text(),
            desc: record.description.clone().unwrap_or_default(),
        }
    }

    /// Write payload: the draft plus `basePrice` and `description`.
    pub fn to_payload(&self) -> ProductWrite {
        ProductWrite {
            id: self.id.clone(),
            shop_id: self.shop_id.clone(),
            category_id: self.category_id.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            desc: self.desc.clone(),
            base_price: self.price.clone(),
            description: self.desc.clone(),
        }
    }
}

/// Callbacks the form's owner provides.
#[cfg_attr(test, mockall::automock)]
pub trait FormHost {
    /// The user backed out of editing.
    fn cancel(&mut self);

    /// Show a message.
    fn notify(&mut self, message: String, severity: Severity);

    /// The product was saved.
    fn success(&mut self);
}

/// How a submit that reached the API ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The API confirmed the save.
    Saved,

    /// The API or the transport failed; the user was notified.
    Failed,
}

/// Create/edit form for a single product.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    shops: Vec<Shop>,
    categories: Vec<Category>,
    index: CatalogIndex,
    edit_data: Option<ProductRecord>,
    draft: ProductDraft,
}

impl ProductForm {
    /// Mount the form.
    pub fn new(
        shops: Vec<Shop>,
        categories: Vec<Category>,
        edit_data: Option<ProductRecord>,
    ) -> Self {
        let mut form = Self {
            index: CatalogIndex::new(&shops, &categories),
            shops,
            categories,
            edit_data,
            draft: ProductDraft::default(),
        };

        form.sync_draft();

        form
    }

    /// Replace the shop and category lists. The draft is rebuilt.
    pub fn set_catalog(&mut self, shops: Vec<Shop>, categories: Vec<Category>) {
        self.index = CatalogIndex::new(&shops, &categories);
        self.shops = shops;
        self.categories = categories;

        self.sync_draft();
    }

    /// Replace the record being edited. The draft is rebuilt.
    pub fn set_edit_data(&mut self, edit_data: Option<ProductRecord>) {
        self.edit_data = edit_data;

        self.sync_draft();
    }

    fn sync_draft(&mut self) {
        self.draft = match &self.edit_data {
            Some(record) => ProductDraft::from_record(record, &self.index),
            None => ProductDraft::default(),
        };
    }

    /// Update one input.
    ///
    /// Selector values outside the supplied lists clear the selection.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();

        match field {
            FormField::Shop => {
                let known = self.shops.iter().any(|shop| shop.id.as_str() == value);

                self.draft.shop_id = if known { ShopId::new(value) } else { ShopId::default() };
            }
            FormField::Category => {
                let known = self
                    .categories
                    .iter()
                    .any(|category| category.id.as_str() == value);

                self.draft.category_id = if known {
                    CategoryId::new(value)
                } else {
                    CategoryId::default()
                };
            }
            FormField::Name => self.draft.name = value,
            FormField::Price => self.draft.price = value,
            FormField::Description => self.draft.desc = value,
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Shops offered by the shop selector.
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// Categories offered by the category selector.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Record being edited, if any.
    pub fn edit_data(&self) -> Option<&ProductRecord> {
        self.edit_data.as_ref()
    }

    /// Create or edit, depending on whether a record is supplied.
    pub fn mode(&self) -> FormMode {
        match &self.edit_data {
            Some(record) => FormMode::Edit(record.id.clone()),
            None => FormMode::Create,
        }
    }

    /// Page heading.
    pub fn heading(&self) -> String {
        match self.mode() {
            FormMode::Create => "Khởi tạo dữ liệu mới".to_string(),
            FormMode::Edit(id) => format!("Hiệu chỉnh dữ liệu #{id}"),
        }
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        match self.mode() {
            FormMode::Create => CREATE_LABEL,
            FormMode::Edit(_) => UPDATE_LABEL,
        }
    }

    /// Cancel is only offered while editing.
    pub fn can_cancel(&self) -> bool {
        self.edit_data.is_some()
    }

    /// Hand cancellation to the owner. The form itself does not change.
    pub fn cancel<H: FormHost>(&self, host: &mut H) {
        if self.can_cancel() {
            host.cancel();
        }
    }

    /// Check the required and numeric constraints and build the write payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] for the first blank required field or a non-numeric
    /// price.
    pub fn validate(&self) -> Result<ProductWrite, FormError> {
        let draft = &self.draft;

        if draft.shop_id.is_empty() {
            return Err(FormError::Required(FormField::Shop));
        }

        if draft.category_id.is_empty() {
            return Err(FormError::Required(FormField::Category));
        }

        if draft.name.is_empty() {
            return Err(FormError::Required(FormField::Name));
        }

        let price = draft.price.trim();

        if price.is_empty() {
            return Err(FormError::Required(FormField::Price));
        }

        if !price.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(FormError::InvalidPrice(draft.price.clone()));
        }

        Ok(draft.to_payload())
    }

    /// Validate, save, and report the result to the host.
    ///
    /// A confirmed save notifies with the API message and then calls
    /// [`FormHost::success`]; a failed one notifies with the reason at
    /// [`Severity::Error`] and never calls it.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when validation blocks the submit; neither the API nor
    /// the host is called then.
    pub async fn submit<A, H>(&self, api: &A, host: &mut H) -> Result<SubmitOutcome, FormError>
    where
        A: CatalogApi,
        H: FormHost,
    {
        let payload = self.validate()?;

        debug!(mode = ?self.mode(), "saving product");

        match api.save_product(&payload).await {
            Ok(message) => {
                info!("product saved: {message}");

                host.notify(message, Severity::Info);
                host.success();

                Ok(SubmitOutcome::Saved)
            }
            Err(error) => {
                warn!("product save failed: {error}");

                host.notify(error.to_string(), Severity::Error);

                Ok(SubmitOutcome::Failed)
            }
        }
    }
}
