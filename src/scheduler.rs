use std::time::{Duration, Instant};

use crate::config::TICK_INTERVAL_MS;

/// Whether the scheduler is firing gameplay ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

/// Fixed-period tick source driven by caller-supplied clock readings.
///
/// The main loop polls with the current instant; at most one tick fires per
/// elapsed period and the timer re-arms from the poll that fired it. Taking
/// instants as arguments keeps the type testable without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    state: SchedulerState,
    period: Duration,
    last_tick: Option<Instant>,
}

impl Scheduler {
    /// Creates a stopped scheduler with the given period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            state: SchedulerState::Stopped,
            period,
            last_tick: None,
        }
    }

    /// Creates a stopped scheduler with the stock gameplay period.
    #[must_use]
    pub fn with_default_period() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }

    /// Starts (or restarts) ticking; the first tick fires one period after
    /// `now`.
    pub fn start(&mut self, now: Instant) {
        self.state = SchedulerState::Running;
        self.last_tick = Some(now);
    }

    /// Stops further ticks. Game state stays renderable for the end screen.
    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
    }

    /// Returns true while the scheduler is firing ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Returns true when a tick is due at `now`, re-arming the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }

        let Some(last_tick) = self.last_tick else {
            return false;
        };

        if now.duration_since(last_tick) >= self.period {
            self.last_tick = Some(now);
            return true;
        }

        false
    }

    /// Returns the fixed tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}
