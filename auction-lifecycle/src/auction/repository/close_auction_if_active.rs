use {
    super::{
        CloseAuctionResult,
        PersistenceError,
        Repository,
    },
    crate::auction::entities,
    time::OffsetDateTime,
};

impl Repository {
    #[tracing::instrument(
        skip_all,
        name = "close_auction_if_active_repo",
        fields(auction_id, outcome)
    )]
    pub async fn close_auction_if_active(
        &self,
        auction_id: &entities::AuctionId,
        closing_time: OffsetDateTime,
    ) -> Result<entities::CloseOutcome, PersistenceError> {
        tracing::Span::current().record("auction_id", auction_id.as_str());
        let CloseAuctionResult { matched, modified } = self
            .db
            .close_auction_if_active(auction_id, closing_time)
            .await?;

        let outcome = if matched == 0 {
            tracing::info!("Auction not found or already closed, nothing updated");
            entities::CloseOutcome::NoEffect
        } else if modified == 0 {
            tracing::info!("Auction matched but was not modified");
            entities::CloseOutcome::NoEffect
        } else {
            entities::CloseOutcome::Closed
        };
        tracing::Span::current().record("outcome", outcome.to_string());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::repository::MockDatabase,
    };

    async fn close_with(
        result: Result<CloseAuctionResult, PersistenceError>,
    ) -> Result<entities::CloseOutcome, PersistenceError> {
        let mut db = MockDatabase::default();
        let mut result = Some(result);
        db.expect_close_auction_if_active()
            .withf(|auction_id, _| auction_id == "A1")
            .times(1)
            .returning(move |_, _| result.take().unwrap());
        Repository::new(db)
            .close_auction_if_active(&"A1".to_string(), OffsetDateTime::now_utc())
            .await
    }

    #[tokio::test]
    async fn test_close_maps_modified_row_to_closed() {
        let outcome = close_with(Ok(CloseAuctionResult {
            matched:  1,
            modified: 1,
        }))
        .await
        .unwrap();
        assert_eq!(outcome, entities::CloseOutcome::Closed);
    }

    #[tokio::test]
    async fn test_close_without_match_has_no_effect() {
        let outcome = close_with(Ok(CloseAuctionResult::default())).await.unwrap();
        assert_eq!(outcome, entities::CloseOutcome::NoEffect);
    }

    #[tokio::test]
    async fn test_close_matched_but_unmodified_has_no_effect() {
        let outcome = close_with(Ok(CloseAuctionResult {
            matched:  1,
            modified: 0,
        }))
        .await
        .unwrap();
        assert_eq!(outcome, entities::CloseOutcome::NoEffect);
    }

    #[tokio::test]
    async fn test_close_propagates_update_failure() {
        let err = close_with(Err(PersistenceError::Update("timeout".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, PersistenceError::Update(_)));
    }
}
