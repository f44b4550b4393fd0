// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities a platform adapter provides to the calendar widgets, and the
//! capability the widgets provide back.

use kurbo::{Circle, Line, Point, Rect, Size};
use peniko::Color;
use understory_gesture::PointerEvent;

/// An offscreen pixel surface owned by a widget.
///
/// Text is horizontally centered on `anchor.x` with its baseline at
/// `anchor.y`.
pub trait Raster {
    /// Size of the raster in pixels.
    fn size(&self) -> Size;

    /// Fills `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `text` at `anchor` with the given pixel size.
    fn draw_text(&mut self, text: &str, anchor: Point, size: f64, color: Color);

    /// Strokes a hairline along `line`.
    fn draw_line(&mut self, line: Line, color: Color);

    /// Fills `circle`.
    fn fill_circle(&mut self, circle: Circle, color: Color);
}

/// Services of the host UI framework.
pub trait RenderHost {
    /// Raster type produced by [`RenderHost::create_raster`].
    type Raster: Raster;

    /// Creates a cleared raster of `size`.
    fn create_raster(&mut self, size: Size) -> Self::Raster;

    /// Converts a scale-independent text size to pixels.
    fn sp_to_px(&self, sp: f64) -> f64;

    /// Advance width of `text` at `text_size` pixels.
    fn measure_text(&self, text: &str, text_size: f64) -> f64;

    /// Distance from a line's vertical center down to the baseline of text at
    /// `text_size` pixels.
    fn baseline_offset(&self, text_size: f64) -> f64 {
        text_size * 0.35
    }

    /// Asks for a draw pass. Hosts coalesce repeated requests.
    fn request_redraw(&mut self);

    /// Asks the layout system to give the widget `size`.
    fn request_layout(&mut self, size: Size);
}

/// The drawing surface handed to [`CalendarWidget::on_draw`].
pub trait Surface<R> {
    /// Composites `raster` with its top-left corner at `origin`.
    fn draw_raster(&mut self, raster: &R, origin: Point);
}

/// Lifecycle entry points a host drives a calendar widget with.
pub trait CalendarWidget {
    /// Raster type composited in [`CalendarWidget::on_draw`].
    type Raster;

    /// The widget's size changed. Called at least once before the first draw.
    fn on_resize(&mut self, new_size: Size, old_size: Size);

    /// Paints the widget.
    fn on_draw(&mut self, surface: &mut dyn Surface<Self::Raster>);

    /// Handles a pointer event; returns `true` if it was consumed.
    fn on_pointer_event(&mut self, event: PointerEvent) -> bool;
}

pub(crate) fn is_measured(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}
