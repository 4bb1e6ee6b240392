use {
    futures::future::BoxFuture,
    std::{
        fmt::Debug,
        time::Duration,
    },
    time::OffsetDateTime,
};

/// Single-fire notification. Resolves with the instant at which it fired.
pub type Signal = BoxFuture<'static, OffsetDateTime>;

/// Source of time for the closing scheduler.
///
/// A signal returned by [`ClockSignal::after`] resolves no earlier than the
/// requested duration after the call, and only once. There is no cancellation:
/// a wait that has begun always resolves while the clock is alive.
pub trait ClockSignal: Debug + Send + Sync + 'static {
    fn now(&self) -> OffsetDateTime;
    fn after(&self, duration: Duration) -> Signal;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealClock;

impl ClockSignal for RealClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn after(&self, duration: Duration) -> Signal {
        // A deadline past the representable range never fires.
        let deadline = tokio::time::Instant::now().checked_add(duration);
        Box::pin(async move {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => futures::future::pending().await,
            }
            OffsetDateTime::now_utc()
        })
    }
}
