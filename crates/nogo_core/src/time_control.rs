//! Time control and search limits for engines.
//!
//! The solver runs to completion unless a move time is set, in which case the
//! clock is a hard cutoff: an unfinished proof is abandoned and the engine
//! falls back to a random legal move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Search limits handed to an [`Engine`](crate::Engine) for one move.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum time allowed for this move (None = run to completion)
    pub move_time: Option<Duration>,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// No time limit; the solve always completes.
    pub fn unlimited() -> Self {
        Self {
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    pub fn time(move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    pub fn from_option(move_time: Option<Duration>) -> Self {
        move_time.map_or_else(Self::unlimited, Self::time)
    }

    /// Start the time control clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Cloneable clock with a shared stop flag.
///
/// `is_stopped()` is a single atomic load; the wall clock is only read by
/// `check_time()`, which the solver calls every `check_interval` nodes.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<Mutex<Option<Instant>>>,
    time_limit: Option<Duration>,
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(Mutex::new(None)),
            time_limit,
            check_interval: 256,
        }
    }

    pub fn with_check_interval(mut self, nodes: u64) -> Self {
        self.check_interval = nodes.max(1);
        self
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    fn start_slot(&self) -> MutexGuard<'_, Option<Instant>> {
        self.start_time.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start the clock. Should be called when search begins.
    pub fn start(&self) {
        *self.start_slot() = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the stop flag once the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && let Some(start) = *self.start_slot()
            && start.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_slot()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
