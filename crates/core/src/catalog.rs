//! Catalog

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Scalar JSON value the API uses for identifiers and flags.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(Number),
    Flag(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
            Self::Flag(flag) => flag.to_string(),
        }
    }
}

/// Deserialize a string, number, boolean or null into its display text.
pub(crate) fn deserialize_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from its raw text.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Raw identifier text.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this is the empty (unselected) identifier.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserialize_scalar(deserializer).map(Self)
            }
        }
    };
}

identifier! {
    /// Shop identifier
    ShopId
}

identifier! {
    /// Category identifier
    CategoryId
}

identifier! {
    /// Product identifier
    ProductId
}

/// Shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop identifier
    #[serde(rename = "shopID", alias = "ShopID")]
    pub id: ShopId,

    /// Display name
    #[serde(rename = "shopName", default)]
    pub name: String,

    /// Status flag, as sent by the API
    #[serde(
        rename = "shopStatus",
        default,
        deserialize_with = "deserialize_scalar"
    )]
    pub status: String,
}

/// Category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier
    #[serde(rename = "categoryID", alias = "CategoryID")]
    pub id: CategoryId,

    /// Display name
    #[serde(rename = "categoryName", default)]
    pub name: String,
}

/// Name to identifier lookup over the supplied shops and categories.
///
/// Built once per catalog update. When two entries share a name the first one wins,
/// matching what a front-to-back scan of the lists would find.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    shops: FxHashMap<String, ShopId>,
    categories: FxHashMap<String, CategoryId>,
}

impl CatalogIndex {
    /// Index the given shops and categories by display name.
    pub fn new(shops: &[Shop], categories: &[Category]) -> Self {
        let mut index = Self::default();

        for shop in shops {
            index
                .shops
                .entry(shop.name.clone())
                .or_insert_with(|| shop.id.clone());
        }

        for category in categories {
            index
                .categories
                .entry(category.name.clone())
                .or_insert_with(|| category.id.clone());
        }

        index
    }

    /// Identifier of the first shop with this display name.
    pub fn shop_id(&self, name: &str) -> Option<&ShopId> {
        self.shops.get(name)
    }

    /// Identifier of the first category with this display name.
    pub fn category_id(&self, name: &str) -> Option<&CategoryId> {
        self.categories.get(name)
    }
}
