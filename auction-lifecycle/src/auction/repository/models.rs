#[cfg(test)]
use mockall::automock;
use {
    crate::{
        auction::entities,
        kernel::db::DB,
    },
    async_trait::async_trait,
    std::fmt::Debug,
    thiserror::Error,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
        UtcOffset,
    },
    tracing::instrument,
};

const INSERT_AUCTION_QUERY: &str = "INSERT INTO auction (id, product_name, category, description, condition, status, timestamp) VALUES ($1, $2, $3, $4, $5, $6, $7)";
// Filter and update run as one statement, so only one concurrent closer can match.
const CLOSE_AUCTION_IF_ACTIVE_QUERY: &str =
    "UPDATE auction SET status = $1, timestamp = $2 WHERE id = $3 AND status = $4";

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "product_condition", rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl From<entities::ProductCondition> for ProductCondition {
    fn from(condition: entities::ProductCondition) -> Self {
        match condition {
            entities::ProductCondition::New => ProductCondition::New,
            entities::ProductCondition::Used => ProductCondition::Used,
            entities::ProductCondition::Refurbished => ProductCondition::Refurbished,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "auction_status", rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Active => AuctionStatus::Active,
            entities::AuctionStatus::Completed => AuctionStatus::Completed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Auction {
    pub id:           String,
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    ProductCondition,
    pub status:       AuctionStatus,
    pub timestamp:    PrimitiveDateTime,
}

impl From<&entities::Auction> for Auction {
    fn from(auction: &entities::Auction) -> Self {
        Self {
            id:           auction.id.clone(),
            product_name: auction.product_name.clone(),
            category:     auction.category.clone(),
            description:  auction.description.clone(),
            condition:    auction.condition.into(),
            status:       auction.status.into(),
            timestamp:    to_primitive_utc(auction.timestamp),
        }
    }
}

fn to_primitive_utc(instant: OffsetDateTime) -> PrimitiveDateTime {
    let instant = instant.to_offset(UtcOffset::UTC);
    PrimitiveDateTime::new(instant.date(), instant.time())
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to insert auction: {0}")]
    Write(String),
    #[error("failed to update auction: {0}")]
    Update(String),
}

/// Counts reported by the store for a conditional close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloseAuctionResult {
    pub matched:  u64,
    pub modified: u64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_auction(&self, auction: &entities::Auction) -> Result<(), PersistenceError>;
    /// Marks the auction as completed at `closing_time`, only if it is currently active.
    /// The filter and the update must happen as one atomic operation.
    async fn close_auction_if_active(
        &self,
        auction_id: &entities::AuctionId,
        closing_time: OffsetDateTime,
    ) -> Result<CloseAuctionResult, PersistenceError>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        name = "db_add_auction",
        fields(auction_id, result = "success"),
        skip_all
    )]
    async fn add_auction(&self, auction: &entities::Auction) -> Result<(), PersistenceError> {
        tracing::Span::current().record("auction_id", auction.id.as_str());
        let row = Auction::from(auction);
        sqlx::query(INSERT_AUCTION_QUERY)
        .bind(&row.id)
        .bind(&row.product_name)
        .bind(&row.category)
        .bind(&row.description)
        .bind(row.condition)
        .bind(row.status)
        .bind(row.timestamp)
        .execute(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to insert auction");
            PersistenceError::Write(e.to_string())
        })?;
        Ok(())
    }

    #[instrument(
        name = "db_close_auction_if_active",
        fields(auction_id, result = "success"),
        skip_all
    )]
    async fn close_auction_if_active(
        &self,
        auction_id: &entities::AuctionId,
        closing_time: OffsetDateTime,
    ) -> Result<CloseAuctionResult, PersistenceError> {
        tracing::Span::current().record("auction_id", auction_id.as_str());
        let result = sqlx::query(CLOSE_AUCTION_IF_ACTIVE_QUERY)
        .bind(AuctionStatus::Completed)
        .bind(to_primitive_utc(closing_time))
        .bind(auction_id)
        .bind(AuctionStatus::Active)
        .execute(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to close auction");
            PersistenceError::Update(e.to_string())
        })?;

        // Postgres only reports rows it actually rewrote, so matched and modified coincide.
        Ok(CloseAuctionResult {
            matched:  result.rows_affected(),
            modified: result.rows_affected(),
        })
    }
}
