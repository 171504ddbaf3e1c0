//! The clock that drives the snake
use std::time::{Duration, Instant};

/// A repeating timer that the game starts and stops as it enters and leaves
/// the running state
pub(crate) trait TickSource {
    /// Start (or restart) firing once every `period`
    fn start(&mut self, period: Duration);

    /// Stop firing until the next call to `start()`
    fn stop(&mut self);
}

/// A deadline-based [`TickSource`] for use with an event loop that can wait
/// on input with a timeout.
///
/// The loop asks how long it may wait via [`Ticker::remaining()`] and, once
/// that time has passed, calls [`Ticker::fire()`] to consume the tick and
/// schedule the next one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Option<Duration>,
    next_tick: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new() -> Ticker {
        Ticker::default()
    }

    /// Time left until the next tick as of `now`, or `None` if the ticker is
    /// stopped
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|when| when.saturating_duration_since(now))
    }

    /// If a tick is due as of `now`, schedule the next one and return `true`
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match (self.period, self.next_tick) {
            (Some(period), Some(when)) if when <= now => {
                self.next_tick = Some(now + period);
                true
            }
            _ => false,
        }
    }
}

impl TickSource for Ticker {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.next_tick = Some(Instant::now() + period);
    }

    fn stop(&mut self) {
        self.period = None;
        self.next_tick = None;
    }
}

/// A [`TickSource`] that never fires on its own and just records how it was
/// told to behave.  Tests call `Game::tick()` by hand.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct ManualTicker {
    pub(crate) period: Option<Duration>,
    pub(crate) starts: usize,
    pub(crate) stops: usize,
}

#[cfg(test)]
impl ManualTicker {
    pub(crate) fn running(&self) -> bool {
        self.period.is_some()
    }
}

#[cfg(test)]
impl TickSource for ManualTicker {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.period = None;
        self.stops += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(150);

    #[test]
    fn stopped() {
        let mut ticker = Ticker::new();
        let now = Instant::now();
        assert_eq!(ticker.remaining(now), None);
        assert!(!ticker.fire(now + PERIOD));
    }

    #[test]
    fn fires_once_per_period() {
        let mut ticker = Ticker::new();
        ticker.start(PERIOD);
        let now = Instant::now();
        assert!(ticker.remaining(now).is_some_and(|d| d <= PERIOD));
        let due = now + PERIOD;
        assert_eq!(ticker.remaining(due), Some(Duration::ZERO));
        assert!(ticker.fire(due));
        assert!(!ticker.fire(due));
        assert_eq!(ticker.remaining(due), Some(PERIOD));
        assert!(ticker.fire(due + PERIOD));
    }

    #[test]
    fn not_due_yet() {
        let mut ticker = Ticker::new();
        ticker.start(PERIOD);
        assert!(!ticker.fire(Instant::now()));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut ticker = Ticker::new();
        ticker.start(PERIOD);
        ticker.stop();
        let later = Instant::now() + PERIOD * 2;
        assert_eq!(ticker.remaining(later), None);
        assert!(!ticker.fire(later));
    }
}
