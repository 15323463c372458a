use jiff::Timestamp;
use std::time::Duration;

/// Source of the timestamp segment.
///
/// Only whole seconds matter to the generator; `wait_until` is called when a
/// series is used up or the clock went back to an earlier second.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
    /// Returns once `now()` is at or past `target`.
    fn wait_until(&self, target: Timestamp);
}

/// Wall-clock UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    fn wait_until(&self, target: Timestamp) {
        let mut now = Timestamp::now();
        while now < target {
            // at least 1 ms per sleep
            let gap_ms = target.duration_since(now).as_millis().max(1) as u64;
            std::thread::sleep(Duration::from_millis(gap_ms));
            now = Timestamp::now();
        }
    }
}
