//! Console configuration

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use shopfront::{browser::ProductQuery, form::FormField, form::ProductForm};
use shopfront_client::{ClientConfig, DEFAULT_BASE_URL};

/// Shopfront console
#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Shop and product admin console", long_about = None)]
pub(crate) struct Cli {
    /// API connection settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from `.env`, the environment and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments cannot be parsed.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// API connection settings.
#[derive(Debug, Args)]
pub(crate) struct ApiConfig {
    /// API base URL
    #[arg(long, env = "SHOPFRONT_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "SHOPFRONT_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout: Some(Duration::from_secs(self.timeout_seconds)),
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Load the shop selectors, then list products matching the filters
    Browse(BrowseArgs),

    /// List shop selector options
    Shops,

    /// Create a product
    Create(ProductArgs),

    /// Edit a product from the product list
    Edit(EditArgs),
}

#[derive(Debug, Args)]
pub(crate) struct BrowseArgs {
    /// Keyword to search for
    #[arg(long, default_value = "")]
    pub keyword: String,

    /// Minimum price
    #[arg(long, default_value = "")]
    pub min: String,

    /// Maximum price
    #[arg(long, default_value = "")]
    pub max: String,
}

impl BrowseArgs {
    pub(crate) fn query(&self) -> ProductQuery {
        ProductQuery::new(&self.keyword, &self.min, &self.max)
    }
}

/// Form inputs; omitted ones keep their current value.
#[derive(Debug, Default, Args)]
pub(crate) struct ProductArgs {
    /// Shop identifier
    #[arg(long)]
    pub shop: Option<String>,

    /// Category identifier
    #[arg(long)]
    pub category: Option<String>,

    /// Product name
    #[arg(long)]
    pub name: Option<String>,

    /// Price
    #[arg(long)]
    pub price: Option<String>,

    /// Description
    #[arg(long)]
    pub desc: Option<String>,
}

impl ProductArgs {
    pub(crate) fn apply(self, form: &mut ProductForm) {
        let inputs = [
            (FormField::Shop, self.shop),
            (FormField::Category, self.category),
            (FormField::Name, self.name),
            (FormField::Price, self.price),
            (FormField::Description, self.desc),
        ];

        for (field, value) in inputs {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct EditArgs {
    /// Identifier of the product to edit
    pub product_id: String,

    #[command(flatten)]
    pub inputs: ProductArgs,
}
