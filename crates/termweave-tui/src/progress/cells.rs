//! Standard progress cells and their text formats

use super::layout::{ProgressBarCell, ProgressLayoutScope};
use super::state::ProgressState;
use crate::layout::{Alignment, ColumnWidth};
use crate::widget::{ProgressBar, Spinner, Text, Whitespace, Widget};
use std::sync::Arc;
use std::time::Duration;

const SI_SUFFIXES: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Scale `value` to at most three integer digits with an SI suffix
fn si(value: f64) -> (f64, &'static str) {
    let mut scaled = value;
    let mut index = 0;
    while scaled.abs() >= 1000.0 && index < SI_SUFFIXES.len() - 1 {
        scaled /= 1000.0;
        index += 1;
    }
    (scaled, SI_SUFFIXES[index])
}

/// Whole numbers below 1000 as-is, larger ones as e.g. `1.2K`
pub fn format_count(value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let (scaled, suffix) = si(value as f64);
    format!("{:.1}{}", scaled, suffix)
}

/// `completed/total`, with `---` for an unknown total
pub fn format_completed(completed: u64, total: Option<u64>, suffix: &str) -> String {
    let total = total.map_or_else(|| "---".to_string(), format_count);
    format!("{}/{}{}", format_count(completed), total, suffix)
}

/// Right-aligned whole percentage, `---%` when indeterminate
pub fn format_percentage(fraction: Option<f64>) -> String {
    match fraction {
        Some(fraction) => format!("{:>3}%", (fraction * 100.0).floor() as u32),
        None => "---%".to_string(),
    }
}

pub fn format_speed(speed: Option<f64>, suffix: &str) -> String {
    match speed.filter(|s| s.is_finite() && *s >= 0.0) {
        Some(speed) => {
            let (scaled, si_suffix) = si(speed);
            format!("{:.1}{}{}/s", scaled, si_suffix, suffix)
        }
        None => format!("---.-{}/s", suffix),
    }
}

/// `h:mm:ss`
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

pub fn format_eta(remaining: Option<Duration>) -> String {
    match remaining {
        Some(remaining) => format!("eta {}", format_duration(remaining)),
        None => "eta -:--:--".to_string(),
    }
}

/// Text cell that keeps its padding so columns do not shift as values change
fn padded(content: String) -> Widget {
    Text::new(content).whitespace(Whitespace::Pre).into()
}

/// Frame of an animation running at `fps` since the task started
pub(crate) fn frame_index<T>(state: &ProgressState<T>, fps: u32) -> usize {
    (state.animation_time().as_secs_f64() * f64::from(fps)) as usize
}

/// Seconds for one sweep of the indeterminate pulse
const PULSE_PERIOD: f64 = 2.0;

impl<T: 'static> ProgressLayoutScope<T> {
    fn standard(
        &mut self,
        width: ColumnWidth,
        fps: u32,
        align: Option<Alignment>,
        builder: impl Fn(&ProgressState<T>) -> Widget + Send + Sync + 'static,
    ) -> &mut Self {
        self.push(ProgressBarCell::with_fps(width, fps, align, Arc::new(builder)))
    }

    /// Fixed text, built once
    pub fn text(&mut self, content: impl Into<String>) -> &mut Self {
        let text = Text::new(content.into());
        self.standard(ColumnWidth::Auto, 0, None, move |_| text.clone().into())
    }

    /// `completed/total` followed by `suffix`
    pub fn completed(&mut self, suffix: impl Into<String>) -> &mut Self {
        let suffix = suffix.into();
        let fps = self.text_fps();
        self.standard(ColumnWidth::Auto, fps, Some(Alignment::Right), move |state| {
            padded(format_completed(state.completed, state.total, &suffix))
        })
    }

    pub fn percentage(&mut self) -> &mut Self {
        let fps = self.text_fps();
        self.standard(ColumnWidth::Auto, fps, Some(Alignment::Right), |state| {
            padded(format_percentage(state.fraction()))
        })
    }

    /// Units per second, e.g. `3.1it/s` for a suffix of `it`
    pub fn speed(&mut self, suffix: impl Into<String>) -> &mut Self {
        let suffix = suffix.into();
        let fps = self.text_fps();
        self.standard(ColumnWidth::Auto, fps, Some(Alignment::Right), move |state| {
            padded(format_speed(state.speed, &suffix))
        })
    }

    pub fn time_remaining(&mut self) -> &mut Self {
        let fps = self.text_fps();
        self.standard(ColumnWidth::Auto, fps, Some(Alignment::Right), |state| {
            padded(format_eta(state.time_remaining()))
        })
    }

    pub fn time_elapsed(&mut self) -> &mut Self {
        let fps = self.text_fps();
        self.standard(ColumnWidth::Auto, fps, Some(Alignment::Right), |state| {
            padded(format_duration(state.elapsed()))
        })
    }

    /// A bar filling the remaining width
    pub fn progress_bar(&mut self) -> &mut Self {
        self.progress_bar_with(ColumnWidth::Expand)
    }

    pub fn progress_bar_with(&mut self, width: ColumnWidth) -> &mut Self {
        let fps = self.animation_fps();
        self.standard(width, fps, None, |state| {
            if state.is_indeterminate() {
                if state.is_finished() {
                    return ProgressBar::new(Some(1), 1).into();
                }
                let bar = ProgressBar::new(None, state.completed);
                if !state.is_running() {
                    return bar.into();
                }
                let t = state.animation_time().as_secs_f64() % PULSE_PERIOD;
                return bar.pulse(t / PULSE_PERIOD).into();
            }
            ProgressBar::new(state.total, state.completed).into()
        })
    }

    /// Spinner advancing at the animation rate while the task runs
    pub fn spinner(&mut self, spinner: Spinner) -> &mut Self {
        let fps = self.animation_fps();
        self.standard(ColumnWidth::Auto, fps, None, move |state| {
            let frame = if state.is_running() {
                frame_index(state, fps)
            } else {
                0
            };
            spinner.clone().frame(frame).into()
        })
    }
}
