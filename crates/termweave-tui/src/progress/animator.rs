//! Live progress display driven by a refresh loop

use super::layout::{ProgressBarDefinition, TEXT_FPS};
use super::scheduler::ProgressScheduler;
use super::state::{ProgressState, TaskId};
use crate::error::Result;
use crate::terminal::Terminal;
use std::future::Future;
use std::io::{Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::debug;

struct Inner<T, W: Write> {
    scheduler: ProgressScheduler<T>,
    terminal: Terminal<W>,
    stopped: bool,
}

impl<T, W: Write> Inner<T, W> {
    fn repaint(&mut self) -> Result<()> {
        let frame = self.scheduler.frame();
        let lines = self.terminal.render(&frame);
        self.terminal.paint(&lines)
    }
}

/// Animates progress tasks on a terminal.
///
/// Handles are cheap to clone; producers call [`update`](Self::update) from
/// any thread while one loop calls [`refresh`](Self::refresh) or
/// [`run`](Self::run).
pub struct ProgressAnimator<T, W: Write = Stdout> {
    inner: Arc<Mutex<Inner<T, W>>>,
}

impl<T, W: Write> Clone for ProgressAnimator<T, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone, W: Write> ProgressAnimator<T, W> {
    pub fn new(terminal: Terminal<W>, definition: ProgressBarDefinition<T>) -> Self {
        let scheduler = ProgressScheduler::new(definition, Instant::now());
        Self {
            inner: Arc::new(Mutex::new(Inner {
                scheduler,
                terminal,
                stopped: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T, W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start tracking a task and return its id
    pub fn add_task(&self, state: ProgressState<T>) -> TaskId {
        let id = TaskId::new();
        self.lock().scheduler.update(id, state);
        id
    }

    /// Replace a task's snapshot; false if the task is unknown
    pub fn update(&self, id: TaskId, state: ProgressState<T>) -> bool {
        let mut inner = self.lock();
        if inner.scheduler.state(id).is_none() {
            return false;
        }
        inner.scheduler.update(id, state);
        true
    }

    pub fn remove_task(&self, id: TaskId) -> bool {
        self.lock().scheduler.remove(id).is_some()
    }

    /// True once every task has finished
    pub fn is_finished(&self) -> bool {
        let inner = self.lock();
        inner.scheduler.task_count() > 0 && inner.scheduler.all_finished()
    }

    /// Run one tick: rebuild due cells and repaint
    pub fn refresh(&self, now: Instant) -> Result<()> {
        let mut inner = self.lock();
        if inner.stopped {
            return Ok(());
        }
        inner.scheduler.tick(now);
        inner.repaint()
    }

    /// Paint a final frame with fresh cells and restore the cursor.
    ///
    /// Later refreshes do nothing.
    pub fn stop(&self) -> Result<()> {
        let mut inner = self.lock();
        if std::mem::replace(&mut inner.stopped, true) {
            return Ok(());
        }
        inner.scheduler.rebuild_all(Instant::now());
        inner.repaint()?;
        inner.terminal.finish_live()?;
        debug!("progress animation stopped");
        Ok(())
    }

    /// Refresh at the fastest cell rate until `stop` completes, then stop
    pub async fn run<F>(&self, stop: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let period = self
            .lock()
            .scheduler
            .frame_interval()
            .unwrap_or(Duration::from_millis(1000 / u64::from(TEXT_FPS)));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        debug!(period_ms = period.as_millis() as u64, "progress animation started");

        tokio::pin!(stop);
        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = interval.tick() => self.refresh(Instant::now())?,
            }
        }
        self.stop()
    }

    /// Recover the terminal once every other handle is gone
    pub fn into_terminal(self) -> Option<Terminal<W>> {
        let mutex = Arc::try_unwrap(self.inner).ok()?;
        Some(mutex.into_inner().unwrap_or_else(PoisonError::into_inner).terminal)
    }
}

impl<W: Write> Terminal<W> {
    /// Animate tasks laid out by `definition` on this terminal
    pub fn animator<T: Clone>(self, definition: ProgressBarDefinition<T>) -> ProgressAnimator<T, W> {
        ProgressAnimator::new(self, definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{progress_bar_layout, LayoutOptions};
    use crate::geometry::Size;
    use crate::style::ColorDepth;
    use crate::terminal::StubTerminal;
    use crate::theme::Theme;

    fn definition() -> ProgressBarDefinition<()> {
        progress_bar_layout(LayoutOptions::default(), |scope| {
            scope.text("copy").completed("");
            Ok(())
        })
        .unwrap()
    }

    fn terminal(interactive: bool) -> Terminal<Vec<u8>> {
        let stub = StubTerminal::default()
            .with_size(Size::new(40, 10))
            .interactive(interactive);
        Terminal::with_interface(Arc::new(stub), Vec::new()).with_theme(Theme::empty())
    }

    fn output(animator: ProgressAnimator<(), Vec<u8>>) -> String {
        let terminal = animator.into_terminal().unwrap();
        String::from_utf8(terminal.into_writer()).unwrap()
    }

    #[test]
    fn test_stop_paints_final_state() {
        let animator = terminal(false).animator(definition());
        let now = Instant::now();
        let id = animator.add_task(ProgressState::new((), Some(10), 0, now));
        animator.refresh(now).unwrap();

        assert!(animator.update(id, ProgressState::new((), Some(10), 10, now).finished(now)));
        assert!(animator.is_finished());
        animator.stop().unwrap();
        animator.refresh(now).unwrap();

        assert_eq!(output(animator), "copy  10/10\n");
    }

    #[test]
    fn test_unknown_task_update_is_rejected() {
        let animator = terminal(false).animator(definition());
        let id = animator.add_task(ProgressState::new((), Some(1), 0, Instant::now()));
        assert!(animator.remove_task(id));
        assert!(!animator.update(id, ProgressState::new((), Some(1), 1, Instant::now())));
        assert!(!animator.is_finished());
    }

    #[test]
    fn test_interactive_refresh_repaints_in_place() {
        let animator = terminal(true)
            .with_color_depth(ColorDepth::Ansi16)
            .animator(definition());
        let now = Instant::now();
        animator.add_task(ProgressState::new((), Some(4), 1, now));
        animator.refresh(now).unwrap();
        animator.stop().unwrap();

        let out = output(animator);
        assert!(out.starts_with("\x1b[?25l"));
        assert!(out.contains("copy  1/4"));
        assert!(out.ends_with("\x1b[?25h"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_until_stopped() {
        let animator = terminal(false).animator(definition());
        animator.add_task(ProgressState::new((), Some(3), 2, Instant::now()));
        animator
            .run(tokio::time::sleep(Duration::from_millis(500)))
            .await
            .unwrap();
        assert_eq!(output(animator), "copy  2/3\n");
    }
}
