// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host that records drawing instead of rasterizing.
//!
//! [`RecordingHost`] is intended for tests, headless tools and debugging that
//! want to assert on what a widget drew and on how it talked to its host. It
//! does not produce pixels.

use kurbo::{Circle, Line, Point, Rect, Size};
use peniko::Color;
use peniko::color::Rgba8;

use crate::host::{Raster, RenderHost, Surface};

/// One recorded drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterOp {
    /// A filled rectangle.
    FillRect {
        /// Rectangle in raster coordinates.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// A run of text.
    Text {
        /// The text.
        text: String,
        /// Horizontal center and baseline.
        anchor: Point,
        /// Text size in pixels.
        size: f64,
        /// Text color.
        color: Rgba8,
    },
    /// A hairline.
    Line {
        /// The segment.
        line: Line,
        /// Stroke color.
        color: Rgba8,
    },
    /// A filled circle.
    Circle {
        /// The circle.
        circle: Circle,
        /// Fill color.
        color: Rgba8,
    },
}

/// Raster that stores its operations in order.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRaster {
    size: Size,
    ops: Vec<RasterOp>,
}

impl RecordedRaster {
    /// Creates an empty raster of `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Operations in the order they were drawn.
    #[must_use]
    pub fn ops(&self) -> &[RasterOp] {
        &self.ops
    }

    /// All text operations as `(text, anchor, color)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, Rgba8)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            RasterOp::Text {
                text,
                anchor,
                color,
                ..
            } => Some((text.as_str(), *anchor, *color)),
            _ => None,
        })
    }

    /// First text operation drawing exactly `needle`.
    #[must_use]
    pub fn find_text(&self, needle: &str) -> Option<(Point, Rgba8)> {
        self.texts()
            .find(|(text, _, _)| *text == needle)
            .map(|(_, anchor, color)| (anchor, color))
    }

    /// All filled circles.
    pub fn circles(&self) -> impl Iterator<Item = (Circle, Rgba8)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            RasterOp::Circle { circle, color } => Some((*circle, *color)),
            _ => None,
        })
    }
}

impl Raster for RecordedRaster {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(RasterOp::FillRect {
            rect,
            color: color.to_rgba8(),
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, size: f64, color: Color) {
        self.ops.push(RasterOp::Text {
            text: text.to_owned(),
            anchor,
            size,
            color: color.to_rgba8(),
        });
    }

    fn draw_line(&mut self, line: Line, color: Color) {
        self.ops.push(RasterOp::Line {
            line,
            color: color.to_rgba8(),
        });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.ops.push(RasterOp::Circle {
            circle,
            color: color.to_rgba8(),
        });
    }
}

/// Host that hands out [`RecordedRaster`]s and counts its interactions.
///
/// Text is measured as `glyph_advance × text_size` per character and `sp`
/// sizes are scaled by `density`.
#[derive(Clone, Debug)]
pub struct RecordingHost {
    density: f64,
    glyph_advance: f64,
    rasters_created: usize,
    redraw_requests: usize,
    layout_requests: Vec<Size>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// Host with density `1.0` and a glyph advance of half the text size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            density: 1.0,
            glyph_advance: 0.5,
            rasters_created: 0,
            redraw_requests: 0,
            layout_requests: Vec::new(),
        }
    }

    /// Sets the `sp` to pixel scale factor.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the per-character advance as a fraction of the text size.
    #[must_use]
    pub fn with_glyph_advance(mut self, glyph_advance: f64) -> Self {
        self.glyph_advance = glyph_advance;
        self
    }

    /// Number of rasters created so far.
    #[must_use]
    pub fn rasters_created(&self) -> usize {
        self.rasters_created
    }

    /// Number of redraw requests so far.
    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Every size requested from the layout system, oldest first.
    #[must_use]
    pub fn layout_requests(&self) -> &[Size] {
        &self.layout_requests
    }

    /// Most recent layout request.
    #[must_use]
    pub fn last_layout_request(&self) -> Option<Size> {
        self.layout_requests.last().copied()
    }

    /// Resets all counters.
    pub fn clear_counters(&mut self) {
        self.rasters_created = 0;
        self.redraw_requests = 0;
        self.layout_requests.clear();
    }
}

impl RenderHost for RecordingHost {
    type Raster = RecordedRaster;

    fn create_raster(&mut self, size: Size) -> RecordedRaster {
        self.rasters_created += 1;
        RecordedRaster::new(size)
    }

    fn sp_to_px(&self, sp: f64) -> f64 {
        sp * self.density
    }

    fn measure_text(&self, text: &str, text_size: f64) -> f64 {
        let chars = text.chars().count() as f64;
        chars * text_size * self.glyph_advance
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn request_layout(&mut self, size: Size) {
        self.layout_requests.push(size);
    }
}

/// One raster composited onto a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// Top-left corner on the surface.
    pub origin: Point,
    /// Copy of the composited raster.
    pub raster: RecordedRaster,
}

/// Surface that records composited rasters for one draw pass.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    composites: Vec<Composite>,
}

impl RecordingSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Composites in drawing order.
    #[must_use]
    pub fn composites(&self) -> &[Composite] {
        &self.composites
    }

    /// Returns `true` if nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }
}

impl Surface<RecordedRaster> for RecordingSurface {
    fn draw_raster(&mut self, raster: &RecordedRaster, origin: Point) {
        self.composites.push(Composite {
            origin,
            raster: raster.clone(),
        });
    }
}
