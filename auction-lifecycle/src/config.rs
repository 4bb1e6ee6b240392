use {
    crate::auction::entities,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
        ValueEnum,
    },
};

mod database;

// Command-line interface of the auction lifecycle tool.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Apply pending database migrations.
    Migrate(MigrateOptions),
    /// Create an auction and keep running until its automatic closing is done.
    Create(CreateOptions),
    /// Close an auction manually.
    Close(CloseOptions),
}

#[derive(Args, Clone, Debug)]
pub struct MigrateOptions {
    #[command(flatten)]
    pub database: database::Options,
}

#[derive(Args, Clone, Debug)]
pub struct CreateOptions {
    #[command(flatten)]
    pub database: database::Options,

    #[command(flatten)]
    pub lifecycle: LifecycleOptions,

    #[arg(long = "product-name")]
    pub product_name: String,

    #[arg(long = "category")]
    pub category: String,

    #[arg(long = "description")]
    pub description: String,

    #[arg(long = "condition", value_enum)]
    #[arg(default_value_t = ProductCondition::New)]
    pub condition: ProductCondition,
}

#[derive(Args, Clone, Debug)]
pub struct CloseOptions {
    #[command(flatten)]
    pub database: database::Options,

    /// Id of the auction to close.
    #[arg(long = "id")]
    pub auction_id: String,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Lifecycle Options")]
#[group(id = "Lifecycle")]
pub struct LifecycleOptions {
    /// Minutes after creation at which an auction is closed automatically.
    /// When unset or not a positive integer, auctions are only closed manually.
    #[arg(long = "auction-duration-minutes")]
    #[arg(env = "AUCTION_DURATION_MINUTES")]
    #[arg(allow_hyphen_values = true)]
    pub auction_duration_minutes: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl From<ProductCondition> for entities::ProductCondition {
    fn from(condition: ProductCondition) -> Self {
        match condition {
            ProductCondition::New => entities::ProductCondition::New,
            ProductCondition::Used => entities::ProductCondition::Used,
            ProductCondition::Refurbished => entities::ProductCondition::Refurbished,
        }
    }
}
