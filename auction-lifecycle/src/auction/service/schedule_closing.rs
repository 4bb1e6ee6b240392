use {
    super::Service,
    crate::auction::entities,
    strum::Display,
};

/// Lifecycle of a single scheduled closing. Recorded on the task span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ClosingTaskState {
    /// Waiting on the clock signal.
    Pending,
    /// Clock fired, conditional close in progress.
    Firing,
    Done,
}

fn record_state(state: ClosingTaskState) {
    tracing::Span::current().record("state", state.to_string());
}

impl Service {
    /// Starts the closing task for `auction_id` on the service task tracker.
    /// A panic inside the task is logged and stays contained in that task.
    pub(super) fn spawn_closing_task(&self, auction_id: entities::AuctionId) {
        self.task_tracker.spawn({
            let service = self.clone();
            async move {
                let closing = tokio::spawn({
                    let auction_id = auction_id.clone();
                    async move { service.schedule_closing(auction_id).await }
                });
                if let Err(err) = closing.await {
                    tracing::error!(
                        auction_id = auction_id.as_str(),
                        panicked = err.is_panic(),
                        error = %err,
                        "Auction closing task did not finish"
                    );
                }
            }
        });
    }

    /// Waits for the clock signal and then closes the auction if it is still active.
    /// The outcome is only logged.
    #[tracing::instrument(skip_all, fields(auction_id = %auction_id, state))]
    pub async fn schedule_closing(&self, auction_id: entities::AuctionId) {
        let duration = match self.resolve_closing_duration() {
            Ok(duration) => duration,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "Failed to resolve auction duration, auto-closing will not be scheduled"
                );
                record_state(ClosingTaskState::Done);
                return;
            }
        };

        record_state(ClosingTaskState::Pending);
        tracing::info!(duration = ?duration, "Scheduled auction closing");
        let fired_at = self.clock.after(duration).await;

        record_state(ClosingTaskState::Firing);
        tracing::info!(fired_at = %fired_at, "Closing timer fired");
        match self
            .repo
            .close_auction_if_active(&auction_id, fired_at)
            .await
        {
            Ok(entities::CloseOutcome::Closed) => {
                tracing::info!("Auction closed automatically");
            }
            Ok(entities::CloseOutcome::NoEffect) => {
                tracing::info!("Auction was already closed, automatic closing had no effect");
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to close auction automatically");
            }
        }
        record_state(ClosingTaskState::Done);
    }

    /// Waits until every closing task started by this service is done.
    pub async fn wait_for_scheduled_closings(&self) {
        self.task_tracker.close();
        self.task_tracker.wait().await;
    }
}
