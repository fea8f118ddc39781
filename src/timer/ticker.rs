use std::time::{Duration, Instant};

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable recurring deadline.
///
/// The event loop polls `fire` with the current instant; it returns true
/// once per elapsed period while armed. Only one deadline is ever pending,
/// and disarming drops it, so nothing fires while the timer is paused.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Schedule the first firing one period from `now`. Already armed: no-op.
    pub fn arm(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.period);
        }
    }

    pub fn disarm(&mut self) {
        self.next = None;
    }

    /// Arm or disarm to match the timer's running flag.
    pub fn follow(&mut self, running: bool, now: Instant) {
        if running {
            self.arm(now);
        } else {
            self.disarm();
        }
    }

    /// True if the pending deadline has passed; schedules the next one.
    ///
    /// If the loop fell more than a whole period behind (e.g. the process was
    /// suspended) the missed firings are dropped and the schedule restarts
    /// from `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let mut next = deadline + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.next = Some(next);
        true
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_ticker_never_fires() {
        let mut t = Ticker::default();
        let now = Instant::now();
        assert!(!t.fire(now + Duration::from_secs(10)));
    }

    #[test]
    fn fires_once_per_period() {
        let mut t = Ticker::default();
        let start = Instant::now();
        t.arm(start);

        assert!(!t.fire(start + Duration::from_millis(999)));
        assert!(t.fire(start + Duration::from_millis(1000)));
        // Same instant again: the next deadline is a full period out
        assert!(!t.fire(start + Duration::from_millis(1000)));
        assert!(t.fire(start + Duration::from_millis(2005)));
    }

    #[test]
    fn rearming_does_not_reset_a_pending_deadline() {
        let mut t = Ticker::default();
        let start = Instant::now();
        t.arm(start);
        t.arm(start + Duration::from_millis(900));
        assert!(t.fire(start + Duration::from_millis(1000)));
    }

    #[test]
    fn disarm_cancels_pending_deadline() {
        let mut t = Ticker::default();
        let start = Instant::now();
        t.arm(start);
        t.disarm();
        assert!(!t.fire(start + Duration::from_secs(5)));
    }

    #[test]
    fn follow_tracks_running_flag() {
        let mut t = Ticker::default();
        let now = Instant::now();
        t.follow(true, now);
        t.follow(true, now + Duration::from_millis(500));
        assert!(t.fire(now + Duration::from_secs(1)));

        t.follow(false, now);
        assert!(!t.fire(now + Duration::from_secs(5)));
    }

    #[test]
    fn missed_periods_are_dropped() {
        let mut t = Ticker::default();
        let start = Instant::now();
        t.arm(start);

        let late = start + Duration::from_secs(10);
        assert!(t.fire(late));
        assert!(!t.fire(late + Duration::from_millis(500)));
        assert!(t.fire(late + Duration::from_secs(1)));
    }
}
