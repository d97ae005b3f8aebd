use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use chrono::{DateTime, Utc};
use portfolio_di::Build;
use portfolio_shared_contracts::time::TimeService;
use portfolio_utils::trace_instrument;

/// Wall clock which never goes backwards.
///
/// If the system clock jumps back, the last returned timestamp is repeated
/// until the system clock has caught up again.
#[derive(Debug, Clone, Default, Build)]
pub struct TimeServiceImpl {
    #[state]
    last: Arc<LastTimestamp>,
}

#[derive(Debug)]
struct LastTimestamp(AtomicI64);

impl Default for LastTimestamp {
    fn default() -> Self {
        Self(AtomicI64::new(i64::MIN))
    }
}

impl TimeServiceImpl {
    fn observe(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        // timestamps outside of the range representable in nanoseconds
        // (before 1677 or after 2262) are passed through unchanged
        let Some(now_nanos) = now.timestamp_nanos_opt() else {
            return now;
        };

        let last_nanos = self.last.0.fetch_max(now_nanos, Ordering::SeqCst);
        if last_nanos > now_nanos {
            DateTime::from_timestamp_nanos(last_nanos)
        } else {
            now
        }
    }
}

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        self.observe(Utc::now())
    }
}
