use {
    super::Service,
    crate::auction::{
        entities,
        repository::PersistenceError,
    },
};

pub struct AddAuctionInput {
    pub auction: entities::Auction,
}

impl Service {
    /// Stores the auction and schedules its automatic closing in the background.
    /// Returns as soon as the auction is stored; the closing is never awaited here.
    #[tracing::instrument(skip_all, fields(auction_id))]
    pub async fn add_auction(
        &self,
        input: AddAuctionInput,
    ) -> Result<entities::Auction, PersistenceError> {
        tracing::Span::current().record("auction_id", input.auction.id.as_str());
        let auction = self.repo.add_auction(input.auction).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to add auction");
            e
        })?;
        self.spawn_closing_task(auction.id.clone());
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            auction::{
                repository::{
                    tests::InMemoryDatabase,
                    MockDatabase,
                },
                service::tests::{
                    get_auction,
                    instant,
                    wait_for_pending,
                },
            },
            kernel::clock::tests::ManualClock,
        },
        std::{
            sync::Arc,
            time::Duration,
        },
    };

    #[tokio::test]
    async fn test_add_auction_returns_before_closing_fires() {
        let db = InMemoryDatabase::default();
        let clock = Arc::new(ManualClock::default());
        let service = Service::new_with_mocks(db.clone(), clock.clone(), Some("5"));

        let auction = service
            .add_auction(AddAuctionInput {
                auction: get_auction("A1"),
            })
            .await
            .unwrap();
        assert_eq!(auction.id, "A1");

        wait_for_pending(&clock, 1).await;
        assert_eq!(clock.armed_durations(), vec![Duration::from_secs(5 * 60)]);
        assert_eq!(
            db.get("A1").unwrap().status,
            entities::AuctionStatus::Active
        );
    }

    #[tokio::test]
    async fn test_add_auction_closes_when_clock_fires() {
        let db = InMemoryDatabase::default();
        let clock = Arc::new(ManualClock::default());
        let service = Service::new_with_mocks(db.clone(), clock.clone(), Some("1"));

        service
            .add_auction(AddAuctionInput {
                auction: get_auction("A1"),
            })
            .await
            .unwrap();
        wait_for_pending(&clock, 1).await;

        let fired_at = instant(60);
        assert_eq!(clock.fire(fired_at), 1);
        service.wait_for_scheduled_closings_with_timeout().await;

        let stored = db.get("A1").unwrap();
        assert_eq!(stored.status, entities::AuctionStatus::Completed);
        assert_eq!(stored.timestamp, fired_at);
    }

    #[tokio::test]
    async fn test_add_auction_failure_skips_scheduling() {
        let mut db = MockDatabase::default();
        db.expect_add_auction()
            .times(1)
            .returning(|_| Err(PersistenceError::Write("disk full".to_string())));
        db.expect_close_auction_if_active().times(0);
        let clock = Arc::new(ManualClock::default());
        let service = Service::new_with_mocks(db, clock.clone(), Some("1"));

        let err = service
            .add_auction(AddAuctionInput {
                auction: get_auction("A1"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PersistenceError::Write(_)));
        assert!(service.task_tracker.is_empty());

        service.wait_for_scheduled_closings_with_timeout().await;
        assert_eq!(clock.pending_count(), 0);
        assert!(clock.armed_durations().is_empty());
    }

    #[tokio::test]
    async fn test_add_duplicate_auction_keeps_single_schedule() {
        let db = InMemoryDatabase::default();
        let clock = Arc::new(ManualClock::default());
        let service = Service::new_with_mocks(db.clone(), clock.clone(), Some("2"));

        service
            .add_auction(AddAuctionInput {
                auction: get_auction("A1"),
            })
            .await
            .unwrap();
        let err = service
            .add_auction(AddAuctionInput {
                auction: get_auction("A1"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PersistenceError::Write(_)));

        wait_for_pending(&clock, 1).await;
        assert_eq!(clock.fire(instant(120)), 1);
        service.wait_for_scheduled_closings_with_timeout().await;
        assert_eq!(clock.armed_durations().len(), 1);
    }
}
