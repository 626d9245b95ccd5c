//! Progress bar layouts, scheduling and live animation

mod animator;
mod cells;
mod layout;
mod maker;
mod scheduler;
mod state;

pub use animator::ProgressAnimator;
pub use cells::{
    format_completed, format_count, format_duration, format_eta, format_percentage, format_speed,
};
pub use layout::{
    progress_bar_context_layout, progress_bar_layout, CellBuilder, LayoutOptions, ProgressBarCell,
    ProgressBarDefinition, ProgressLayoutScope, ANIMATION_FPS, TEXT_FPS,
};
pub use maker::{BaseProgressBarWidgetMaker, ProgressBarWidgetMaker, RowLayout};
pub use scheduler::ProgressScheduler;
pub use state::{ProgressState, TaskId};
