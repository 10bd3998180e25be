#![forbid(unsafe_code)]

//! Row/column grid container contract.
//!
//! Documents are often laid out by a generic grid (rows of channels, columns
//! of steps). The scrollbar does not implement such a grid; it only describes
//! what it expects from one so hosts can wire the grid's data-changed
//! notification into [`Scrollbar::on_data_changed`](crate::Scrollbar::on_data_changed).

/// How one grid axis sizes its tracks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackSizing {
    /// Share the available space equally among all tracks.
    #[default]
    Fit,
    /// Every track has this many pixels.
    Fixed(f32),
}

impl TrackSizing {
    /// `Fixed` for finite positive sizes, `Fit` otherwise.
    #[must_use]
    pub fn from_size(size: Option<f32>) -> Self {
        match size {
            Some(px) if px.is_finite() && px > 0.0 => Self::Fixed(px),
            _ => Self::Fit,
        }
    }

    /// Pixel size of one track given the space available and the track count.
    #[must_use]
    pub fn resolve(self, available: f32, count: usize) -> f32 {
        match self {
            Self::Fixed(px) => px,
            Self::Fit if count == 0 => 0.0,
            Self::Fit => available.max(0.0) / count as f32,
        }
    }
}

/// A host grid the scrollbar's document may live in.
pub trait GridContainer {
    fn set_rows(&mut self, rows: usize);
    fn set_columns(&mut self, columns: usize);
    fn set_row_sizing(&mut self, sizing: TrackSizing);
    fn set_column_sizing(&mut self, sizing: TrackSizing);
    /// The grid's content changed; dependent layout must be recomputed.
    fn notify_data_changed(&mut self);
}

/// Declarative grid shape, applied to any [`GridContainer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
    pub row_sizing: TrackSizing,
    pub column_sizing: TrackSizing,
}

impl Default for GridSpec {
    /// Four rows of eight columns, both axes fitted to the view.
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 8,
            row_sizing: TrackSizing::Fit,
            column_sizing: TrackSizing::Fit,
        }
    }
}

impl GridSpec {
    #[must_use]
    pub const fn rows(mut self, rows: usize, sizing: TrackSizing) -> Self {
        self.rows = rows;
        self.row_sizing = sizing;
        self
    }

    #[must_use]
    pub const fn columns(mut self, columns: usize, sizing: TrackSizing) -> Self {
        self.columns = columns;
        self.column_sizing = sizing;
        self
    }

    /// Push the shape into `grid` and signal the change.
    pub fn apply_to(&self, grid: &mut dyn GridContainer) {
        grid.set_rows(self.rows);
        grid.set_columns(self.columns);
        grid.set_row_sizing(self.row_sizing);
        grid.set_column_sizing(self.column_sizing);
        grid.notify_data_changed();
    }
}
