use {
    super::{
        PersistenceError,
        Repository,
    },
    crate::auction::entities,
};

impl Repository {
    // NOTE: Do not call this function directly. Instead call `add_auction` from `Service`,
    // which also schedules the closing of the auction.
    pub async fn add_auction(
        &self,
        auction: entities::Auction,
    ) -> Result<entities::Auction, PersistenceError> {
        self.db.add_auction(&auction).await?;
        Ok(auction)
    }
}
