mod add_auction;
mod close_auction_if_active;
mod models;

pub use models::*;

#[derive(Debug)]
pub struct Repository {
    pub db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::auction::entities,
        async_trait::async_trait,
        std::{
            collections::HashMap,
            sync::{
                Arc,
                Mutex,
            },
        },
        time::OffsetDateTime,
    };

    /// Table of auctions kept in memory. Clones share the same table.
    #[derive(Clone, Debug, Default)]
    pub struct InMemoryDatabase {
        auctions: Arc<Mutex<HashMap<entities::AuctionId, entities::Auction>>>,
    }

    impl InMemoryDatabase {
        pub fn get(&self, auction_id: &str) -> Option<entities::Auction> {
            self.auctions.lock().unwrap().get(auction_id).cloned()
        }
    }

    #[async_trait]
    impl Database for InMemoryDatabase {
        async fn add_auction(&self, auction: &entities::Auction) -> Result<(), PersistenceError> {
            let mut auctions = self.auctions.lock().unwrap();
            if auctions.contains_key(&auction.id) {
                return Err(PersistenceError::Write(format!(
                    "duplicate key value violates unique constraint for {}",
                    auction.id
                )));
            }
            auctions.insert(auction.id.clone(), auction.clone());
            Ok(())
        }

        async fn close_auction_if_active(
            &self,
            auction_id: &entities::AuctionId,
            closing_time: OffsetDateTime,
        ) -> Result<CloseAuctionResult, PersistenceError> {
            let mut auctions = self.auctions.lock().unwrap();
            match auctions.get_mut(auction_id) {
                Some(auction) if auction.status == entities::AuctionStatus::Active => {
                    auction.status = entities::AuctionStatus::Completed;
                    auction.timestamp = closing_time;
                    Ok(CloseAuctionResult {
                        matched:  1,
                        modified: 1,
                    })
                }
                _ => Ok(CloseAuctionResult::default()),
            }
        }
    }
}
