// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-month calendar with header navigation.

use core::fmt;

use kurbo::{Circle, Line, Point, Size};
use peniko::Color;
use understory_calendar_grid::{
    CalendarDate, GridMetrics, HeaderSplit, HeaderZone, HitGrid, MonthGrid, MonthStep,
};
use understory_gesture::{GestureOutcome, GestureState, PointerEvent, TapAnchor, TapPolicy};

use crate::SelectListener;
use crate::host::{CalendarWidget, Raster, RenderHost, Surface, is_measured};
use crate::style::{PagedStyle, weekday_initials};

/// Geometry of one build of a [`PagedCalendar`].
#[derive(Clone, Copy, Debug, PartialEq)]
struct PagedLayout {
    metrics: GridMetrics,
    header_height: f64,
    body_height: f64,
}

impl PagedLayout {
    fn size(&self) -> Size {
        Size::new(self.metrics.width, self.header_height + self.body_height)
    }
}

/// Which rasters a mutation affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region {
    Header,
    Body,
    Both,
}

/// One month at a time, rendered into a header raster and a body raster.
///
/// A tap on the left third of the header shows the previous month, a tap on
/// the right third the next one. A tap on a day selects it and notifies the
/// listener. Every mutator regenerates the rasters it affects right away and
/// asks the host for a redraw.
///
/// The widget derives its own height from the displayed month and asks the
/// host for it through [`RenderHost::request_layout`].
pub struct PagedCalendar<H: RenderHost> {
    host: H,
    style: PagedStyle,
    all_dates_disabled: bool,
    today: CalendarDate,
    displayed: CalendarDate,
    selected: Option<CalendarDate>,
    size: Size,
    layout: Option<PagedLayout>,
    requested: Option<Size>,
    header: Option<H::Raster>,
    body: Option<H::Raster>,
    gesture: GestureState,
    on_date_select: Option<SelectListener>,
}

impl<H: RenderHost> fmt::Debug for PagedCalendar<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedCalendar")
            .field("style", &self.style)
            .field("all_dates_disabled", &self.all_dates_disabled)
            .field("today", &self.today)
            .field("displayed", &self.displayed)
            .field("selected", &self.selected)
            .field("size", &self.size)
            .field("built", &self.is_built())
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl<H: RenderHost> PagedCalendar<H> {
    /// Taps must be released within 400 ms; the tap lands where it was released.
    pub const TAP_POLICY: TapPolicy = TapPolicy::new(400).anchored_at(TapAnchor::Release);

    /// Creates a calendar showing and selecting today in the local zone.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_today(host, CalendarDate::today_local())
    }

    /// Creates a calendar that treats `today` as the current day.
    ///
    /// The month of `today` is displayed and `today` starts out selected.
    #[must_use]
    pub fn with_today(host: H, today: CalendarDate) -> Self {
        Self {
            host,
            style: PagedStyle::default(),
            all_dates_disabled: false,
            today,
            displayed: today.first_of_month(),
            selected: Some(today),
            size: Size::ZERO,
            layout: None,
            requested: None,
            header: None,
            body: None,
            gesture: GestureState::new(Self::TAP_POLICY),
            on_date_select: None,
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

    /// Registers the callback that receives every selected date.
    ///
    /// Replaces any previous listener.
    pub fn set_on_date_select(&mut self, listener: impl FnMut(CalendarDate) + 'static) {
        self.on_date_select = Some(Box::new(listener));
    }

    /// Removes the selection listener.
    pub fn clear_on_date_select(&mut self) {
        self.on_date_select = None;
    }

    /// Selects `date` and notifies the listener, exactly like a tap on it.
    ///
    /// The displayed month does not change.
    pub fn select_day(&mut self, date: CalendarDate) {
        log::debug!("paged calendar: selected {date}");
        self.selected = Some(date);
        self.regenerate(Region::Body);
        if let Some(listener) = self.on_date_select.as_mut() {
            listener(date);
        }
    }

    /// Removes the selection without notifying.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.regenerate(Region::Body);
        }
    }

    /// Currently selected date.
    #[must_use]
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// First day of the displayed month.
    #[must_use]
    pub fn displayed_month(&self) -> CalendarDate {
        self.displayed
    }

    /// Shows the month containing `date`.
    pub fn show_month(&mut self, date: CalendarDate) {
        let first = date.first_of_month();
        if first != self.displayed {
            self.displayed = first;
            log::debug!("paged calendar: showing {}", first.title());
            self.regenerate(Region::Both);
        }
    }

    /// Shows the month before the displayed one.
    pub fn show_previous_month(&mut self) {
        self.navigate(MonthStep::Previous);
    }

    /// Shows the month after the displayed one.
    pub fn show_next_month(&mut self) {
        self.navigate(MonthStep::Next);
    }

    /// The day drawn in the today color.
    #[must_use]
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Changes which day counts as today.
    pub fn set_today(&mut self, today: CalendarDate) {
        if today != self.today {
            self.today = today;
            self.regenerate(Region::Body);
        }
    }

    /// Draws every day in the disabled color without highlights.
    ///
    /// Taps on days still select them and notify the listener.
    pub fn set_disable_all_dates(&mut self, disabled: bool) {
        self.all_dates_disabled = disabled;
        self.regenerate(Region::Body);
    }

    /// Returns `true` while all dates are drawn disabled.
    #[must_use]
    pub fn all_dates_disabled(&self) -> bool {
        self.all_dates_disabled
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &PagedStyle {
        &self.style
    }

    /// Replaces the whole style.
    pub fn set_style(&mut self, style: PagedStyle) {
        self.style = style;
        self.regenerate(Region::Both);
    }

    /// Text size in scale-independent pixels.
    #[must_use]
    pub fn text_size(&self) -> f64 {
        self.style.text_size_sp
    }

    /// Sets the text size in scale-independent pixels.
    pub fn set_text_size(&mut self, text_size_sp: f64) {
        self.style.text_size_sp = text_size_sp;
        self.regenerate(Region::Both);
    }

    /// Title and arrow color.
    #[must_use]
    pub fn title_color(&self) -> Color {
        self.style.title_color
    }

    /// Sets the title and arrow color.
    pub fn set_title_color(&mut self, color: Color) {
        self.style.title_color = color;
        self.regenerate(Region::Header);
    }

    /// Color of weekday labels and ordinary days.
    #[must_use]
    pub fn day_color(&self) -> Color {
        self.style.day_color
    }

    /// Sets the color of weekday labels and ordinary days.
    pub fn set_day_color(&mut self, color: Color) {
        self.style.day_color = color;
        self.regenerate(Region::Both);
    }

    /// Color of today's number.
    #[must_use]
    pub fn today_color(&self) -> Color {
        self.style.today_color
    }

    /// Sets the color of today's number.
    pub fn set_today_color(&mut self, color: Color) {
        self.style.today_color = color;
        self.regenerate(Region::Body);
    }

    /// Number color of the selected day.
    #[must_use]
    pub fn selected_text_color(&self) -> Color {
        self.style.selected_text_color
    }

    /// Sets the number color of the selected day.
    pub fn set_selected_text_color(&mut self, color: Color) {
        self.style.selected_text_color = color;
        self.regenerate(Region::Body);
    }

    /// Circle color behind the selected day.
    #[must_use]
    pub fn selected_background_color(&self) -> Color {
        self.style.selected_background_color
    }

    /// Sets the circle color behind the selected day.
    pub fn set_selected_background_color(&mut self, color: Color) {
        self.style.selected_background_color = color;
        self.regenerate(Region::Body);
    }

    /// Day color while all dates are disabled.
    #[must_use]
    pub fn disabled_color(&self) -> Color {
        self.style.disabled_color
    }

    /// Sets the day color used while all dates are disabled.
    pub fn set_disabled_color(&mut self, color: Color) {
        self.style.disabled_color = color;
        self.regenerate(Region::Body);
    }

    /// Height of the header raster, once built.
    #[must_use]
    pub fn header_height(&self) -> Option<f64> {
        self.layout.map(|layout| layout.header_height)
    }

    /// Height of the body raster, once built.
    #[must_use]
    pub fn body_height(&self) -> Option<f64> {
        self.layout.map(|layout| layout.body_height)
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
        self.layout = None;
    }

    fn navigate(&mut self, step: MonthStep) {
        self.displayed = self.displayed.step(step);
        log::debug!("paged calendar: {step:?} to {}", self.displayed.title());
        self.regenerate(Region::Both);
    }

    fn grid(&self) -> MonthGrid {
        MonthGrid::for_date(self.displayed)
    }

    /// Derives margins and heights for the current width and month.
    fn compute_layout(&self) -> PagedLayout {
        let text = self.host.sp_to_px(self.style.text_size_sp);
        let glyph = self.host.measure_text("A", text);
        let metrics = GridMetrics::from_glyph_width(self.size.width, glyph, text);
        let vm = metrics.vertical_margin;
        let rows = f64::from(self.grid().week_count());
        PagedLayout {
            metrics,
            // Title and weekday lines, each below a margin, then half a margin.
            header_height: 2.5 * vm + 2.0 * text,
            body_height: vm + vm * rows + text * (rows - 1.0),
        }
    }

    /// Rebuilds the rasters of `region` if the widget has been measured, then
    /// requests a redraw. Returns `true` if anything was built.
    fn regenerate(&mut self, region: Region) -> bool {
        if !is_measured(self.size) {
            log::debug!("paged calendar: not measured yet, skipping raster generation");
            self.invalidate();
            return false;
        }
        let layout = self.compute_layout();
        let header_size = Size::new(layout.metrics.width, layout.header_height);
        let body_size = Size::new(layout.metrics.width, layout.body_height);
        if !is_measured(header_size) || !is_measured(body_size) {
            log::debug!("paged calendar: degenerate layout {layout:?}, skipping");
            self.invalidate();
            return false;
        }
        let relayout = self.layout != Some(layout);
        self.layout = Some(layout);
        if relayout || self.header.is_none() || region != Region::Body {
            self.header = Some(self.draw_header(layout));
        }
        if relayout || self.body.is_none() || region != Region::Header {
            self.body = Some(self.draw_body(layout));
        }
        let desired = layout.size();
        if self.requested != Some(desired) {
            log::debug!("paged calendar: requesting layout {desired:?}");
            self.requested = Some(desired);
            self.host.request_layout(desired);
        }
        self.host.request_redraw();
        true
    }

    fn draw_header(&mut self, layout: PagedLayout) -> H::Raster {
        let PagedLayout {
            metrics,
            header_height,
            ..
        } = layout;
        log::trace!(
            "paged calendar: header raster {}x{header_height}",
            metrics.width
        );
        let mut raster = self
            .host
            .create_raster(Size::new(metrics.width, header_height));
        let (width, text) = (metrics.width, metrics.text_size);
        let (hm, vm) = (metrics.horizontal_margin, metrics.vertical_margin);

        let mut y = vm;
        let title = self.displayed.title().to_string();
        let color = self.style.title_color;
        raster.draw_text(&title, Point::new(width / 2.0, y), text, color);
        raster.draw_text("<", Point::new(width / 8.0, y), text, color);
        raster.draw_text(">", Point::new(width * 7.0 / 8.0, y), text, color);

        y += text + vm;
        let mut x = hm;
        for label in weekday_initials() {
            raster.draw_text(&label, Point::new(x, y), text, self.style.day_color);
            x += 2.0 * hm + self.host.measure_text(&label, text);
        }

        y += vm / 2.0;
        raster.draw_line(Line::new((0.0, y), (width, y)), self.style.day_color);
        raster
    }

    fn draw_body(&mut self, layout: PagedLayout) -> H::Raster {
        let PagedLayout {
            metrics,
            body_height,
            ..
        } = layout;
        log::trace!(
            "paged calendar: body raster {}x{body_height}",
            metrics.width
        );
        let mut raster = self
            .host
            .create_raster(Size::new(metrics.width, body_height));
        let text = metrics.text_size;
        let grid = self.grid();
        for day in grid.days() {
            let (Some(cell), Some(date)) = (grid.cell_of(day), grid.date(day)) else {
                continue;
            };
            let anchor = metrics.day_anchor(cell);
            let color = if self.all_dates_disabled {
                self.style.disabled_color
            } else if self.selected == Some(date) {
                let center = Point::new(anchor.x, anchor.y - text / 3.0);
                raster.fill_circle(
                    Circle::new(center, text),
                    self.style.selected_background_color,
                );
                self.style.selected_text_color
            } else if date == self.today {
                self.style.today_color
            } else {
                self.style.day_color
            };
            raster.draw_text(&day.to_string(), anchor, text, color);
        }
        raster
    }

    fn on_header_tap(&mut self, x: f64, width: f64) {
        if let Some(step) = HeaderZone::at(x, width, HeaderSplit::Thirds).step() {
            self.navigate(step);
        }
    }

    fn on_body_tap(&mut self, pt: Point, layout: PagedLayout) {
        let grid = self.grid();
        let hits = HitGrid::new(grid, layout.metrics.width, layout.body_height);
        match hits.day_at(pt).and_then(|day| grid.date(day)) {
            Some(date) => self.select_day(date),
            None => log::trace!("paged calendar: tap at {pt:?} outside the month"),
        }
    }
}

impl<H: RenderHost> CalendarWidget for PagedCalendar<H> {
    type Raster = H::Raster;

    fn on_resize(&mut self, new_size: Size, old_size: Size) {
        log::debug!("paged calendar: resized from {old_size:?} to {new_size:?}");
        let width_changed = new_size.width != self.size.width;
        self.size = new_size;
        // Height follows the content, so rasters built for this width stay valid.
        if width_changed || !is_measured(new_size) {
            self.invalidate();
        }
    }

    fn on_draw(&mut self, surface: &mut dyn Surface<H::Raster>) {
        if let (Some(header), Some(body), Some(layout)) = (&self.header, &self.body, self.layout) {
            surface.draw_raster(header, Point::ORIGIN);
            surface.draw_raster(body, Point::new(0.0, layout.header_height));
            return;
        }
        // Nothing to show this pass; a successful build requests the next one.
        self.regenerate(Region::Both);
    }

    fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        let Some(layout) = self.layout.filter(|_| self.is_built()) else {
            return false;
        };
        if let GestureOutcome::Tap { position } = self.gesture.handle(event) {
            if position.y <= layout.header_height {
                self.on_header_tap(position.x, layout.metrics.width);
            } else {
                let body_pt = Point::new(position.x, position.y - layout.header_height);
                self.on_body_tap(body_pt, layout);
            }
        }
        true
    }
}
