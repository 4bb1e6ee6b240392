use {
    super::Service,
    crate::auction::{
        entities,
        repository::PersistenceError,
    },
};

pub struct CloseAuctionInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    /// Manual closing path. Shares the conditional close with the scheduled closing,
    /// so whichever runs second observes `NoEffect`.
    #[tracing::instrument(skip_all, fields(auction_id, outcome))]
    pub async fn close_auction(
        &self,
        input: CloseAuctionInput,
    ) -> Result<entities::CloseOutcome, PersistenceError> {
        tracing::Span::current().record("auction_id", input.auction_id.as_str());
        let outcome = self
            .repo
            .close_auction_if_active(&input.auction_id, self.clock.now())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to close auction");
                e
            })?;
        tracing::Span::current().record("outcome", outcome.to_string());
        Ok(outcome)
    }
}
