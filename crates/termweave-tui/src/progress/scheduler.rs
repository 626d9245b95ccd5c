//! Per-cell refresh scheduling for live progress displays

use super::layout::ProgressBarDefinition;
use super::maker::{BaseProgressBarWidgetMaker, ProgressBarWidgetMaker};
use super::state::{ProgressState, TaskId};
use crate::widget::Widget;
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

struct Task<T> {
    state: ProgressState<T>,
    widgets: Vec<Widget>,
}

/// Rebuilds each cell at its own rate and composes the latest widgets.
///
/// A task's cells are all built when it is first seen. After that a cell
/// with a positive fps is rebuilt for every task whenever its due time
/// passes; a cell with fps 0 keeps its first build for the life of the
/// scheduler. Frames always combine the most recent build of every cell.
pub struct ProgressScheduler<T> {
    definition: ProgressBarDefinition<T>,
    maker: Box<dyn ProgressBarWidgetMaker + Send + Sync>,
    tasks: BTreeMap<TaskId, Task<T>>,
    /// (next due time, cell index) for every refreshing cell
    due: BTreeSet<(Instant, usize)>,
}

impl<T> ProgressScheduler<T> {
    pub fn new(definition: ProgressBarDefinition<T>, now: Instant) -> Self {
        let due = definition
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.period().map(|period| (now + period, i)))
            .collect();
        Self {
            definition,
            maker: Box::new(BaseProgressBarWidgetMaker),
            tasks: BTreeMap::new(),
            due,
        }
    }

    pub fn with_maker<M>(mut self, maker: M) -> Self
    where
        M: ProgressBarWidgetMaker + Send + Sync + 'static,
    {
        self.maker = Box::new(maker);
        self
    }

    pub fn definition(&self) -> &ProgressBarDefinition<T> {
        &self.definition
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// True when every task's snapshot is finished
    pub fn all_finished(&self) -> bool {
        self.tasks.values().all(|task| task.state.is_finished())
    }

    pub fn state(&self, id: TaskId) -> Option<&ProgressState<T>> {
        self.tasks.get(&id).map(|task| &task.state)
    }

    /// Replace the snapshot for `id`, building all of its cells if it is new.
    ///
    /// Existing cells pick the new state up the next time they are due.
    pub fn update(&mut self, id: TaskId, state: ProgressState<T>) {
        match self.tasks.get_mut(&id) {
            Some(task) => task.state = state,
            None => {
                let widgets = self.definition.build_row(&state);
                debug!(task = ?id, cells = widgets.len(), "progress task added");
                self.tasks.insert(id, Task { state, widgets });
            }
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Option<ProgressState<T>> {
        self.tasks.remove(&id).map(|task| task.state)
    }

    /// The current frame, one row per task in the order tasks were created
    pub fn frame(&self) -> Widget {
        let rows = self.tasks.values().map(|task| task.widgets.clone()).collect();
        self.maker.compose(&self.definition.row_layout(), rows)
    }

    /// Earliest time a cell needs rebuilding
    pub fn next_due(&self) -> Option<Instant> {
        self.due.first().map(|&(due, _)| due)
    }

    /// Time between frames: the period of the fastest cell
    pub fn frame_interval(&self) -> Option<Duration> {
        self.definition.refresh_interval()
    }
}

/// Rebuilding reads each snapshot as of the tick time; stored snapshots are
/// left as the producer supplied them.
impl<T: Clone> ProgressScheduler<T> {
    /// Rebuild every cell whose due time is at or before `now`.
    ///
    /// Returns the number of cells rebuilt across all tasks. A cell that
    /// missed several periods is rebuilt once and rescheduled for its next
    /// period after `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut rebuilt = 0;
        while let Some(&(due, index)) = self.due.first() {
            if due > now {
                break;
            }
            self.due.remove(&(due, index));

            let cell = &self.definition.cells()[index];
            for task in self.tasks.values_mut() {
                task.widgets[index] = cell.build(&task.state.at(now));
                rebuilt += 1;
            }

            if let Some(period) = cell.period() {
                self.due.insert((next_due(due, period, now), index));
            }
        }
        if rebuilt > 0 {
            trace!(rebuilt, "progress cells rebuilt");
        }
        rebuilt
    }

    /// Rebuild every refreshing cell now, regardless of due times
    pub fn rebuild_all(&mut self, now: Instant) {
        for task in self.tasks.values_mut() {
            let shown = task.state.at(now);
            for (index, cell) in self.definition.cells().iter().enumerate() {
                if cell.fps() > 0 {
                    task.widgets[index] = cell.build(&shown);
                }
            }
        }
    }
}

/// First multiple of `period` after `due` that is later than `now`
fn next_due(due: Instant, period: Duration, now: Instant) -> Instant {
    let next = due + period;
    if next > now {
        return next;
    }
    let behind = now.duration_since(due).as_secs_f64();
    let skipped = (behind / period.as_secs_f64()).floor() + 1.0;
    due + period.mul_f64(skipped)
}
