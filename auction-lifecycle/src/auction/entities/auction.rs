use {
    strum::Display,
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type AuctionId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AuctionStatus {
    Active,
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub id:           AuctionId,
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    ProductCondition,
    pub status:       AuctionStatus,
    /// Instant of the most recent status change.
    pub timestamp:    OffsetDateTime,
}

impl Auction {
    pub fn new(
        product_name: String,
        category: String,
        description: String,
        condition: ProductCondition,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_name,
            category,
            description,
            condition,
            status: AuctionStatus::Active,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Result of a conditional close attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CloseOutcome {
    /// The auction was active and is now completed.
    Closed,
    /// Nothing was eligible to change: the auction is already completed or does not exist.
    NoEffect,
}
