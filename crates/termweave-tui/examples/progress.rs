//! Live progress bars for a few simulated downloads
//!
//! Run with: cargo run -p termweave-tui --example progress

use std::time::{Duration, Instant};
use termweave_tui::progress::{progress_bar_context_layout, LayoutOptions, ProgressState};
use termweave_tui::widget::{Spinner, Text};
use termweave_tui::{ColumnWidth, Terminal};

#[tokio::main]
async fn main() -> termweave_tui::Result<()> {
    let definition = progress_bar_context_layout::<&str, _>(LayoutOptions::default(), |scope| {
        scope.spinner(Spinner::dots());
        scope.cell(ColumnWidth::Auto, 0, None, |state: &ProgressState<&'static str>| {
            Text::new(state.context).into()
        })?;
        scope.percentage().progress_bar().completed("B").speed("B").time_remaining();
        Ok(())
    })?;

    let animator = Terminal::new().animator(definition);
    let start = Instant::now();
    let files = [("alpha.tar", 4_000_u64, 900.0), ("beta.iso", 12_000, 2_500.0)];
    let ids: Vec<_> = files
        .iter()
        .map(|(name, total, _)| {
            animator.add_task(ProgressState::new(*name, Some(*total), 0, start).started(start))
        })
        .collect();

    let producer = {
        let animator = animator.clone();
        async move {
            loop {
                tokio::time::sleep(Duration::from_millis(50)).await;
                let now = Instant::now();
                let secs = now.duration_since(start).as_secs_f64();
                for (id, (name, total, speed)) in ids.iter().zip(files) {
                    let completed = ((secs * speed) as u64).min(total);
                    let mut state = ProgressState::new(name, Some(total), completed, now)
                        .started(start)
                        .speed(speed);
                    if completed == total {
                        state = state.finished(now);
                    }
                    animator.update(*id, state);
                }
                if animator.is_finished() {
                    break;
                }
            }
        }
    };

    animator.run(producer).await
}
