use {
    super::repository::{
        Database,
        Repository,
    },
    crate::kernel::clock::ClockSignal,
    std::sync::Arc,
    tokio_util::task::TaskTracker,
};

pub mod add_auction;
pub mod close_auction;
pub mod resolve_closing_duration;
pub mod schedule_closing;

pub struct Config {
    /// Auction duration in minutes, as supplied by the operator. Validated on every
    /// scheduling attempt, so a bad value disables auto-closing instead of failing startup.
    pub auction_duration_minutes: Option<String>,
}

pub struct ServiceInner {
    config:       Config,
    repo:         Arc<Repository>,
    clock:        Arc<dyn ClockSignal>,
    task_tracker: TaskTracker,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        db: impl Database,
        clock: Arc<dyn ClockSignal>,
        config: Config,
        task_tracker: TaskTracker,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(Repository::new(db)),
            clock,
            task_tracker,
        }))
    }
}
