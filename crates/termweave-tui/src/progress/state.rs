//! Progress snapshots for a single task

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Opaque identifier for a task tracked by a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// A fresh id, unique within the process and increasing in creation order
    pub fn new() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// The state of one task at `display_time`.
///
/// `context` carries caller data for custom cells. A snapshot is never
/// changed by the cells that read it; producers replace it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState<T> {
    pub context: T,
    /// Units of work, or `None` when the size of the task is unknown
    pub total: Option<u64>,
    pub completed: u64,
    pub display_time: Instant,
    pub started_time: Option<Instant>,
    pub paused_time: Option<Instant>,
    pub finished_time: Option<Instant>,
    /// Units per second
    pub speed: Option<f64>,
}

impl<T> ProgressState<T> {
    pub fn new(context: T, total: Option<u64>, completed: u64, display_time: Instant) -> Self {
        Self {
            context,
            total,
            completed,
            display_time,
            started_time: None,
            paused_time: None,
            finished_time: None,
            speed: None,
        }
    }

    pub fn started(mut self, at: Instant) -> Self {
        self.started_time = Some(at);
        self
    }

    pub fn paused(mut self, at: Instant) -> Self {
        self.paused_time = Some(at);
        self
    }

    pub fn finished(mut self, at: Instant) -> Self {
        self.finished_time = Some(at);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn is_indeterminate(&self) -> bool {
        self.total.is_none()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_time.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_time.is_some() && !self.is_finished()
    }

    pub fn is_running(&self) -> bool {
        self.started_time.is_some() && !self.is_paused() && !self.is_finished()
    }

    /// Completed share of the total in `0.0..=1.0`; an empty total counts as done
    pub fn fraction(&self) -> Option<f64> {
        self.total.map(|total| {
            if total == 0 {
                1.0
            } else {
                (self.completed as f64 / total as f64).clamp(0.0, 1.0)
            }
        })
    }

    /// Time since the task started, frozen once it is paused or finished
    pub fn elapsed(&self) -> Duration {
        let Some(started) = self.started_time else {
            return Duration::ZERO;
        };
        let end = self
            .finished_time
            .or(self.paused_time)
            .unwrap_or(self.display_time);
        end.saturating_duration_since(started)
    }

    /// Estimate from the remaining units and the current speed.
    ///
    /// `None` when the estimate is unknown or too large for a `Duration`.
    pub fn time_remaining(&self) -> Option<Duration> {
        if self.is_finished() {
            return Some(Duration::ZERO);
        }
        let total = self.total?;
        let speed = self.speed.filter(|s| s.is_finite() && *s > 0.0)?;
        let remaining = total.saturating_sub(self.completed) as f64;
        Duration::try_from_secs_f64(remaining / speed).ok()
    }

    /// A copy of this snapshot as seen at `now`
    pub fn at(&self, now: Instant) -> Self
    where
        T: Clone,
    {
        Self {
            context: self.context.clone(),
            display_time: now,
            ..*self
        }
    }

    /// Time driving animations: how long the task has been running
    pub(crate) fn animation_time(&self) -> Duration {
        self.started_time
            .map(|started| self.display_time.saturating_duration_since(started))
            .unwrap_or_default()
    }
}
