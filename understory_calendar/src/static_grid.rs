// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static 31-day grid without navigation or selection.

use core::fmt;

use kurbo::{Point, Size};
use peniko::Color;
use understory_calendar_grid::{DAYS_PER_WEEK, FIXED_SLOTS, fixed_cell};
use understory_gesture::PointerEvent;

use crate::host::{CalendarWidget, Raster, RenderHost, Surface, is_measured};
use crate::style::StaticStyle;

/// A header of weekday labels over days `1..=31` in seven columns.
///
/// The grid does not know about months: day 1 is always in the first
/// column. It fills the height it is given and ignores pointer input.
/// Rasters are built lazily in the draw pass that needs them and shown in the
/// same pass.
pub struct StaticCalendar<H: RenderHost> {
    host: H,
    style: StaticStyle,
    size: Size,
    header: Option<H::Raster>,
    body: Option<H::Raster>,
}

impl<H: RenderHost> fmt::Debug for StaticCalendar<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCalendar")
            .field("style", &self.style)
            .field("size", &self.size)
            .field("built", &self.is_built())
            .finish_non_exhaustive()
    }
}

impl<H: RenderHost> StaticCalendar<H> {
    /// Creates a grid with the default dark style.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_style(host, StaticStyle::default())
    }

    /// Creates a grid with `style`.
    #[must_use]
    pub fn with_style(host: H, style: StaticStyle) -> Self {
        Self {
            host,
            style,
            size: Size::ZERO,
            header: None,
            body: None,
        }
    }

    /// The host this widget draws through.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &StaticStyle {
        &self.style
    }

    /// Replaces the whole style.
    pub fn set_style(&mut self, style: StaticStyle) {
        self.style = style;
        self.restyle();
    }

    /// Header fill.
    #[must_use]
    pub fn header_background(&self) -> Color {
        self.style.header_background
    }

    /// Sets the header fill.
    pub fn set_header_background(&mut self, color: Color) {
        self.style.header_background = color;
        self.restyle();
    }

    /// Weekday label color.
    #[must_use]
    pub fn header_text_color(&self) -> Color {
        self.style.header_text_color
    }

    /// Sets the weekday label color.
    pub fn set_header_text_color(&mut self, color: Color) {
        self.style.header_text_color = color;
        self.restyle();
    }

    /// Body fill.
    #[must_use]
    pub fn body_background(&self) -> Color {
        self.style.body_background
    }

    /// Sets the body fill.
    pub fn set_body_background(&mut self, color: Color) {
        self.style.body_background = color;
        self.restyle();
    }

    /// Day number color.
    #[must_use]
    pub fn day_color(&self) -> Color {
        self.style.day_color
    }

    /// Sets the day number color.
    pub fn set_day_color(&mut self, color: Color) {
        self.style.day_color = color;
        self.restyle();
    }

    /// Text size in pixels.
    #[must_use]
    pub fn text_size(&self) -> f64 {
        self.style.text_size
    }

    /// Sets the text size in pixels. The header grows with it.
    pub fn set_text_size(&mut self, text_size: f64) {
        self.style.text_size = text_size;
        self.restyle();
    }

    /// Padding above and below each line of text.
    #[must_use]
    pub fn vertical_padding(&self) -> f64 {
        self.style.vertical_padding
    }

    /// Sets the padding above and below each line of text.
    pub fn set_vertical_padding(&mut self, padding: f64) {
        self.style.vertical_padding = padding;
        self.restyle();
    }

    /// Header labels.
    #[must_use]
    pub fn weekday_labels(&self) -> &[String] {
        &self.style.weekday_labels
    }

    /// Replaces the header labels. Any number of labels is spread evenly.
    pub fn set_weekday_labels(&mut self, labels: Vec<String>) {
        self.style.weekday_labels = labels;
        self.restyle();
    }

    /// Height of the header band.
    #[must_use]
    pub fn header_height(&self) -> f64 {
        self.style.header_height()
    }

    /// Returns `true` if both rasters exist.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.header.is_some() && self.body.is_some()
    }

    /// Drops both rasters; they are rebuilt on the next draw.
    pub fn invalidate(&mut self) {
        self.header = None;
        self.body = None;
    }

    fn restyle(&mut self) {
        self.invalidate();
        self.host.request_redraw();
    }

    fn build(&mut self) -> bool {
        let header_height = self.header_height();
        let header_size = Size::new(self.size.width, header_height);
        let body_size = Size::new(self.size.width, self.size.height - header_height);
        if !is_measured(header_size) || !is_measured(body_size) {
            log::debug!(
                "static calendar: {:?} leaves no room below the header, skipping",
                self.size
            );
            return false;
        }
        log::trace!("static calendar: building {:?}", self.size);
        self.header = Some(self.draw_header(header_size));
        self.body = Some(self.draw_body(body_size));
        true
    }

    fn draw_header(&mut self, size: Size) -> H::Raster {
        let mut raster = self.host.create_raster(size);
        raster.fill_rect(size.to_rect(), self.style.header_background);
        let labels = &self.style.weekday_labels;
        if labels.is_empty() {
            return raster;
        }
        let text = self.style.text_size;
        let spacing = size.width / labels.len() as f64;
        let y = size.height / 2.0 + self.host.baseline_offset(text);
        for (i, label) in labels.iter().enumerate() {
            let x = spacing * i as f64 + spacing / 2.0;
            raster.draw_text(label, Point::new(x, y), text, self.style.header_text_color);
        }
        raster
    }

    fn draw_body(&mut self, size: Size) -> H::Raster {
        let mut raster = self.host.create_raster(size);
        raster.fill_rect(size.to_rect(), self.style.body_background);
        let text = self.style.text_size;
        let padding = self.style.vertical_padding;
        let spacing = size.width / f64::from(DAYS_PER_WEEK);
        // Rows start on the header's text line, pushed down by one padding.
        let first_line = self.header_height() / 2.0 + self.host.baseline_offset(text) + padding;
        let pitch = text + 2.0 * padding;
        for day in 1..=FIXED_SLOTS {
            let Some(cell) = fixed_cell(day) else {
                continue;
            };
            let x = spacing * f64::from(cell.column) + spacing / 2.0;
            let y = first_line + f64::from(cell.row) * pitch;
            let label = day.to_string();
            raster.draw_text(&label, Point::new(x, y), text, self.style.day_color);
        }
        raster
    }
}

impl<H: RenderHost> CalendarWidget for StaticCalendar<H> {
    type Raster = H::Raster;

    fn on_resize(&mut self, new_size: Size, old_size: Size) {
        log::debug!("static calendar: resized from {old_size:?} to {new_size:?}");
        self.size = new_size;
        self.invalidate();
    }

    fn on_draw(&mut self, surface: &mut dyn Surface<H::Raster>) {
        if !self.is_built() && !self.build() {
            return;
        }
        if let (Some(header), Some(body)) = (&self.header, &self.body) {
            surface.draw_raster(header, Point::ORIGIN);
            surface.draw_raster(body, Point::new(0.0, self.style.header_height()));
        }
    }

    fn on_pointer_event(&mut self, _event: PointerEvent) -> bool {
        false
    }
}
