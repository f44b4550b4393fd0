// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal three-page strip behind the swipeable calendar.

use understory_calendar_grid::MonthStep;

/// Distance from the left edge within which a released strip snaps forward.
pub const SNAP_DISTANCE: f64 = 50.0;

/// Scroll state of three side-by-side pages (previous, current, next month).
///
/// The offset is the x position of the *next* page. At rest it equals the
/// page width `W`, which puts the current page at `0`. It is clamped to
/// `[0, 2W]`: at `2W` the previous page is fully in view, at `0` the next one.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollStrip {
    page_width: f64,
    offset: f64,
    drag_origin: f64,
}

impl ScrollStrip {
    /// Creates a strip at rest for pages `page_width` wide.
    #[must_use]
    pub fn new(page_width: f64) -> Self {
        let page_width = page_width.max(0.0);
        Self {
            page_width,
            offset: page_width,
            drag_origin: page_width,
        }
    }

    /// Page width.
    #[must_use]
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Current offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Changes the page width and returns to rest.
    pub fn set_page_width(&mut self, page_width: f64) {
        *self = Self::new(page_width);
    }

    /// Returns to rest with the current page centered.
    pub fn recenter(&mut self) {
        self.offset = self.page_width;
        self.drag_origin = self.page_width;
    }

    /// Remembers the current offset as the origin of a drag.
    pub fn begin_drag(&mut self) {
        self.drag_origin = self.offset;
    }

    /// Follows a drag `dx` pixels from where it began, clamped to `[0, 2W]`.
    ///
    /// Returns `true` if the offset changed.
    pub fn drag_to(&mut self, dx: f64) -> bool {
        let next = (self.drag_origin + dx).clamp(0.0, self.max_offset());
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Resolves a released drag.
    ///
    /// At `2W` the strip steps to the previous month and returns to rest. At
    /// or below the snap distance it steps to the next month and shifts by
    /// one page; the shifted offset keeps the page that was in view on
    /// screen. Anywhere else the strip stays where it was released.
    pub fn settle(&mut self) -> Option<MonthStep> {
        if self.page_width <= 0.0 {
            return None;
        }
        if self.offset >= self.max_offset() {
            self.recenter();
            Some(MonthStep::Previous)
        } else if self.offset <= SNAP_DISTANCE.min(self.page_width / 2.0) {
            self.offset += self.page_width;
            self.drag_origin = self.offset;
            Some(MonthStep::Next)
        } else {
            None
        }
    }

    /// X positions of the previous, current and next pages.
    #[must_use]
    pub fn page_origins(&self) -> [f64; 3] {
        [
            self.offset - 2.0 * self.page_width,
            self.offset - self.page_width,
            self.offset,
        ]
    }

    fn max_offset(&self) -> f64 {
        2.0 * self.page_width
    }
}
