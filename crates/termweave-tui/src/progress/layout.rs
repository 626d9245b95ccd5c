//! Declarative progress bar layouts

use super::maker::{BaseProgressBarWidgetMaker, ProgressBarWidgetMaker, RowLayout};
use super::state::ProgressState;
use crate::error::{Error, Result};
use crate::layout::{Alignment, ColumnWidth};
use crate::widget::{Column, Widget};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default refresh rate for cells showing text
pub const TEXT_FPS: u32 = 5;
/// Default refresh rate for animated cells
pub const ANIMATION_FPS: u32 = 30;

/// Builds a cell's widget from a task snapshot
pub type CellBuilder<T> = Arc<dyn Fn(&ProgressState<T>) -> Widget + Send + Sync>;

/// One column of a progress bar row
pub struct ProgressBarCell<T> {
    width: ColumnWidth,
    fps: u32,
    align: Option<Alignment>,
    builder: CellBuilder<T>,
}

impl<T> ProgressBarCell<T> {
    /// Fails with [`Error::InvalidFps`] when `fps` is negative.
    ///
    /// An `fps` of 0 builds the cell once and never refreshes it.
    pub fn new<F>(
        width: ColumnWidth,
        fps: i32,
        align: Option<Alignment>,
        builder: F,
    ) -> Result<Self>
    where
        F: Fn(&ProgressState<T>) -> Widget + Send + Sync + 'static,
    {
        let fps = u32::try_from(fps).map_err(|_| Error::InvalidFps(fps))?;
        Ok(Self::with_fps(width, fps, align, Arc::new(builder)))
    }

    pub(crate) fn with_fps(
        width: ColumnWidth,
        fps: u32,
        align: Option<Alignment>,
        builder: CellBuilder<T>,
    ) -> Self {
        Self {
            width,
            fps,
            align,
            builder,
        }
    }

    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn align(&self) -> Option<Alignment> {
        self.align
    }

    pub fn build(&self, state: &ProgressState<T>) -> Widget {
        (self.builder)(state)
    }

    /// Time between rebuilds, or `None` for a static cell
    pub fn period(&self) -> Option<Duration> {
        frame_period(self.fps)
    }

    fn column(&self) -> Column {
        Column {
            width: self.width,
            align: self.align,
        }
    }
}

impl<T> Clone for ProgressBarCell<T> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            fps: self.fps,
            align: self.align,
            builder: Arc::clone(&self.builder),
        }
    }
}

impl<T> fmt::Debug for ProgressBarCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBarCell")
            .field("width", &self.width)
            .field("fps", &self.fps)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

pub(crate) fn frame_period(fps: u32) -> Option<Duration> {
    (fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(fps)))
}

/// The cells of a progress bar and how rows of them are arranged
pub struct ProgressBarDefinition<T> {
    cells: Vec<ProgressBarCell<T>>,
    spacing: usize,
    align_columns: bool,
}

impl<T> ProgressBarDefinition<T> {
    pub fn new(cells: Vec<ProgressBarCell<T>>, spacing: usize, align_columns: bool) -> Self {
        Self {
            cells,
            spacing,
            align_columns,
        }
    }

    pub fn cells(&self) -> &[ProgressBarCell<T>] {
        &self.cells
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    pub fn align_columns(&self) -> bool {
        self.align_columns
    }

    pub fn row_layout(&self) -> RowLayout {
        RowLayout {
            columns: self.cells.iter().map(ProgressBarCell::column).collect(),
            spacing: self.spacing,
            align_columns: self.align_columns,
        }
    }

    /// Widgets for one task, one per cell
    pub fn build_row(&self, state: &ProgressState<T>) -> Vec<Widget> {
        self.cells.iter().map(|cell| cell.build(state)).collect()
    }

    /// One row per state, composed by the default maker
    pub fn build(&self, states: &[ProgressState<T>]) -> Widget {
        self.build_with(states, &BaseProgressBarWidgetMaker)
    }

    pub fn build_with(
        &self,
        states: &[ProgressState<T>],
        maker: &dyn ProgressBarWidgetMaker,
    ) -> Widget {
        let rows = states.iter().map(|state| self.build_row(state)).collect();
        maker.compose(&self.row_layout(), rows)
    }

    /// Highest refresh rate among the cells, 0 if all are static
    pub fn fastest_fps(&self) -> u32 {
        self.cells.iter().map(ProgressBarCell::fps).max().unwrap_or(0)
    }

    /// How often a live display needs a new frame
    pub fn refresh_interval(&self) -> Option<Duration> {
        frame_period(self.fastest_fps())
    }
}

impl<T> Clone for ProgressBarDefinition<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            spacing: self.spacing,
            align_columns: self.align_columns,
        }
    }
}

impl<T> fmt::Debug for ProgressBarDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBarDefinition")
            .field("cells", &self.cells)
            .field("spacing", &self.spacing)
            .field("align_columns", &self.align_columns)
            .finish()
    }
}

/// Accumulates cells; consumed by [`ProgressLayoutScope::build`]
pub struct ProgressLayoutScope<T> {
    text_fps: u32,
    animation_fps: u32,
    cells: Vec<ProgressBarCell<T>>,
}

impl<T> ProgressLayoutScope<T> {
    pub fn new(text_fps: i32, animation_fps: i32) -> Result<Self> {
        Ok(Self {
            text_fps: u32::try_from(text_fps).map_err(|_| Error::InvalidFps(text_fps))?,
            animation_fps: u32::try_from(animation_fps)
                .map_err(|_| Error::InvalidFps(animation_fps))?,
            cells: Vec::new(),
        })
    }

    /// Default rate for text cells
    pub fn text_fps(&self) -> u32 {
        self.text_fps
    }

    /// Default rate for animated cells
    pub fn animation_fps(&self) -> u32 {
        self.animation_fps
    }

    /// Append a cell whose widget is rebuilt `fps` times per second
    pub fn cell<F>(
        &mut self,
        width: ColumnWidth,
        fps: i32,
        align: Option<Alignment>,
        builder: F,
    ) -> Result<&mut Self>
    where
        F: Fn(&ProgressState<T>) -> Widget + Send + Sync + 'static,
    {
        let cell = ProgressBarCell::new(width, fps, align, builder)?;
        self.cells.push(cell);
        Ok(self)
    }

    pub(crate) fn push(&mut self, cell: ProgressBarCell<T>) -> &mut Self {
        self.cells.push(cell);
        self
    }

    pub fn build(self, spacing: usize, align_columns: bool) -> ProgressBarDefinition<T> {
        ProgressBarDefinition::new(self.cells, spacing, align_columns)
    }
}

/// Settings shared by every cell of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Blank columns between cells
    pub spacing: usize,
    /// Give each cell the same width across all task rows
    pub align_columns: bool,
    pub text_fps: i32,
    pub animation_fps: i32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spacing: 2,
            align_columns: true,
            text_fps: TEXT_FPS as i32,
            animation_fps: ANIMATION_FPS as i32,
        }
    }
}

/// Build a layout for tasks carrying a context value of type `T`
pub fn progress_bar_context_layout<T, F>(
    options: LayoutOptions,
    init: F,
) -> Result<ProgressBarDefinition<T>>
where
    F: FnOnce(&mut ProgressLayoutScope<T>) -> Result<()>,
{
    let mut scope = ProgressLayoutScope::new(options.text_fps, options.animation_fps)?;
    init(&mut scope)?;
    Ok(scope.build(options.spacing, options.align_columns))
}

/// Build a layout for tasks without context
pub fn progress_bar_layout<F>(options: LayoutOptions, init: F) -> Result<ProgressBarDefinition<()>>
where
    F: FnOnce(&mut ProgressLayoutScope<()>) -> Result<()>,
{
    progress_bar_context_layout(options, init)
}
