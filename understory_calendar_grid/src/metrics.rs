// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel geometry of the week grid: margins, day anchors and tap hit-testing.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::grid::{DAYS_PER_WEEK, GridCell, MonthGrid, PIXEL_COLUMN_OFFSET};

const COLUMNS: f64 = DAYS_PER_WEEK as f64;

/// Margins and pitches of a grid rendered at a given width.
///
/// The horizontal margin is chosen so that seven weekday glyphs, each with a
/// margin on both sides, exactly fill the width:
/// `margin = (width - glyph_run) / 14`. The vertical margin is one and a half
/// times the horizontal one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Rendering width in pixels.
    pub width: f64,
    /// Text size in pixels.
    pub text_size: f64,
    /// Margin left and right of each weekday glyph.
    pub horizontal_margin: f64,
    /// Margin above each row of text.
    pub vertical_margin: f64,
}

impl GridMetrics {
    /// Metrics for `width`, where `glyph_run` is the measured width of all
    /// seven weekday labels placed side by side.
    #[must_use]
    pub fn new(width: f64, glyph_run: f64, text_size: f64) -> Self {
        let horizontal_margin = (width - glyph_run) / (2.0 * COLUMNS);
        Self {
            width,
            text_size,
            horizontal_margin,
            vertical_margin: horizontal_margin * 1.5,
        }
    }

    /// Metrics for `width` when every weekday label is `glyph_width` wide.
    #[must_use]
    pub fn from_glyph_width(width: f64, glyph_width: f64, text_size: f64) -> Self {
        Self::new(width, glyph_width * COLUMNS, text_size)
    }

    /// Width of one column, `width / 7`.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.width / COLUMNS
    }

    /// Distance between the baselines of two consecutive rows.
    #[must_use]
    pub fn row_pitch(&self) -> f64 {
        self.text_size + self.vertical_margin
    }

    /// Text anchor of a cell: the horizontal center used by centered text and
    /// the baseline of its row.
    #[must_use]
    pub fn day_anchor(&self, cell: GridCell) -> Point {
        Point::new(
            self.horizontal_margin + f64::from(cell.column) * self.column_width(),
            self.vertical_margin + f64::from(cell.row) * self.row_pitch(),
        )
    }
}

/// Tap hit-testing over a body region of `width × body_height`.
///
/// Columns are `width / 7` wide and rows are `body_height / weeks` tall,
/// where the week count comes from [`MonthGrid::week_count`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitGrid {
    /// Month being hit-tested.
    pub grid: MonthGrid,
    /// Width of the body region.
    pub width: f64,
    /// Height of the body region.
    pub body_height: f64,
    /// Constant added when recovering a day from a cell, see
    /// [`MonthGrid::day_at`].
    pub offset: i32,
}

impl HitGrid {
    /// Hit grid for pixel-derived (0-based) columns.
    #[must_use]
    pub fn new(grid: MonthGrid, width: f64, body_height: f64) -> Self {
        Self {
            grid,
            width,
            body_height,
            offset: PIXEL_COLUMN_OFFSET,
        }
    }

    /// Replaces the day offset.
    #[must_use]
    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Width of one column.
    #[must_use]
    pub fn column_width(&self) -> f64 {
        self.width / COLUMNS
    }

    /// Height of one row.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.body_height / f64::from(self.grid.week_count())
    }

    /// Cell under `pt`, or `None` outside the occupied rows and columns.
    #[must_use]
    pub fn cell_at(&self, pt: Point) -> Option<GridCell> {
        let (column_width, row_height) = (self.column_width(), self.row_height());
        let measured = column_width > 0.0 && row_height > 0.0 && row_height.is_finite();
        let inside = pt.x >= 0.0 && pt.y >= 0.0;
        if !measured || !inside {
            return None;
        }
        let column = to_index(pt.x / column_width)?;
        let row = to_index(pt.y / row_height)?;
        (column < DAYS_PER_WEEK && row < self.grid.week_count())
            .then_some(GridCell { row, column })
    }

    /// Day under `pt`, accepted only within `1..=days_in_month`.
    #[must_use]
    pub fn day_at(&self, pt: Point) -> Option<u32> {
        let cell = self.cell_at(pt)?;
        self.grid.day_at(cell.row, cell.column, self.offset)
    }

    /// Tap rectangle that resolves to `day`, if that rectangle lies inside
    /// the hit grid.
    ///
    /// With an offset other than [`PIXEL_COLUMN_OFFSET`] the rectangle is
    /// shifted off the drawn cell and may fall outside the grid.
    #[must_use]
    pub fn cell_rect(&self, day: u32) -> Option<Rect> {
        if !self.grid.contains(day) {
            return None;
        }
        let slot = i64::from(day) + i64::from(self.grid.first_weekday()) - i64::from(self.offset);
        let slot = u32::try_from(slot).ok()?;
        let (row, column) = (slot / DAYS_PER_WEEK, slot % DAYS_PER_WEEK);
        if row >= self.grid.week_count() {
            return None;
        }
        let (w, h) = (self.column_width(), self.row_height());
        let x0 = f64::from(column) * w;
        let y0 = f64::from(row) * h;
        Some(Rect::new(x0, y0, x0 + w, y0 + h))
    }
}

fn to_index(value: f64) -> Option<u32> {
    let value = value.floor();
    if !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Value is floored and range-checked against u32 above"
    )]
    Some(value as u32)
}
