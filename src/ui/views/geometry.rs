//! Time-grid geometry for schedule cards.
//!
//! Deterministic mapping between (day, fractional hour) coordinates and
//! pixel rectangles. `GridGeometry` is the explicit render context: built
//! once per render pass and passed to every card composition so all cards
//! share identical cell geometry.

use egui::{Pos2, Rect, Vec2};
use thiserror::Error;

use crate::models::grid::{GridConfig, HOUR_EPSILON};
use crate::models::schedule::Interval;

/// Pixel constants for one schedule card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub cell_width: f32,
    pub cell_height: f32,
    pub header_height: f32,
    pub time_col_width: f32,
    pub bottom_padding: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 90.0,
            cell_height: 28.0,
            header_height: 35.0,
            time_col_width: 65.0,
            bottom_padding: 5.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("day {0:?} is not a grid column")]
    UnknownDay(String),

    #[error("hour {0} does not align with the grid increment")]
    MisalignedHour(f64),

    #[error("rows {start_row}..{end_row} fall outside the 0..{num_rows} grid")]
    OutOfBounds {
        start_row: i64,
        end_row: i64,
        num_rows: usize,
    },
}

/// Per-pass render context binding a validated `GridConfig` to pixel
/// metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry<'a> {
    config: &'a GridConfig,
    metrics: CellMetrics,
    num_rows: usize,
}

impl<'a> GridGeometry<'a> {
    pub fn new(config: &'a GridConfig, metrics: CellMetrics) -> Self {
        Self {
            config,
            metrics,
            num_rows: config.num_rows(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        self.config
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Row index for a fractional hour.
    ///
    /// The caller guarantees `hour` sits on a grid boundary; anything else
    /// is a data-integrity failure and is reported, never rounded away.
    pub fn row_for_hour(&self, hour: f64) -> Result<i64, GeometryError> {
        let steps = (hour - self.config.day_start_hour) / self.config.time_increment;
        let misalignment = (steps - steps.round()).abs() * self.config.time_increment;
        if misalignment > HOUR_EPSILON {
            return Err(GeometryError::MisalignedHour(hour));
        }
        Ok(steps.round() as i64)
    }

    /// Column index for a day label, `None` when the day is not a grid
    /// column. Callers skip the interval; one malformed record must not
    /// abort the render.
    pub fn column_for_day(&self, day: &str) -> Option<usize> {
        self.config.days.iter().position(|d| d == day)
    }

    /// Pixel rectangle for an interval, in card-local coordinates.
    ///
    /// Width is always one day column; intervals never span days.
    pub fn rect_for_interval(&self, interval: &Interval) -> Result<Rect, GeometryError> {
        let column = self
            .column_for_day(&interval.day)
            .ok_or_else(|| GeometryError::UnknownDay(interval.day.clone()))?;
        let start_row = self.row_for_hour(interval.start_hour)?;
        let end_row = self.row_for_hour(interval.end_hour)?;

        if start_row < 0 || end_row < start_row || end_row > self.num_rows as i64 {
            return Err(GeometryError::OutOfBounds {
                start_row,
                end_row,
                num_rows: self.num_rows,
            });
        }

        let m = self.metrics;
        let x = m.time_col_width + column as f32 * m.cell_width;
        let y = m.header_height + start_row as f32 * m.cell_height;
        // A zero-length interval still gets a visible sliver instead of a
        // degenerate zero-height rect
        let height = ((end_row - start_row) as f32 * m.cell_height).max(1.0);

        Ok(Rect::from_min_size(
            Pos2::new(x, y),
            Vec2::new(m.cell_width, height),
        ))
    }

    pub fn grid_width(&self) -> f32 {
        self.config.days.len() as f32 * self.metrics.cell_width
    }

    pub fn grid_height(&self) -> f32 {
        self.num_rows as f32 * self.metrics.cell_height
    }

    /// Size of one card surface. Identical for every person in a pass.
    pub fn card_size(&self) -> Vec2 {
        Vec2::new(
            self.metrics.time_col_width + self.grid_width(),
            self.metrics.header_height + self.grid_height() + self.metrics.bottom_padding,
        )
    }
}
