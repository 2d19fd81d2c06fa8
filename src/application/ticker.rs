use std::time::Duration;

/// Periodic timer driven by frame delta time.
///
/// Owning a `Ticker` is the scheduled task; dropping it cancels it. At most
/// one tick fires per `advance`, and overdue time is discarded rather than
/// queued as catch-up ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
}

impl Ticker {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Accumulate `delta`; returns true when a tick is due
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_once_interval_elapses() {
        let mut ticker = Ticker::new(INTERVAL);
        assert!(!ticker.advance(Duration::from_millis(100)));
        assert!(!ticker.advance(Duration::from_millis(150)));
        assert!(ticker.advance(Duration::from_millis(50)));
        assert!(!ticker.advance(Duration::from_millis(16)));
    }

    #[test]
    fn test_long_stall_does_not_queue_ticks() {
        let mut ticker = Ticker::new(INTERVAL);
        assert!(ticker.advance(Duration::from_secs(5)));
        assert!(!ticker.advance(Duration::ZERO));
        assert!(!ticker.advance(Duration::from_millis(299)));
    }
}
