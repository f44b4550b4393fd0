// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipeable calendar backed by three month pages.

use core::fmt;

use kurbo::{Circle, Line, Point, Size};
use peniko::Color;
use understory_calendar_grid::{
    CalendarDate, GridMetrics, HeaderSplit, HeaderZone, HitGrid, MonthGrid, MonthStep,
};
use understory_gesture::{GestureOutcome, GestureState, PointerEvent, TapAnchor, TapPolicy};

use crate::host::{CalendarWidget, Raster, RenderHost, Surface, is_measured};
use crate::strip::ScrollStrip;
use crate::style::{SwipeStyle, weekday_initials};
use crate::{MonthListener, SelectListener};

/// Geometry of one build of a [`SwipeCalendar`].
#[derive(Clone, Copy, Debug, PartialEq)]
struct SwipeLayout {
    metrics: GridMetrics,
    header_height: f64,
    /// Page raster height, enough for the tallest of the three months.
    body_height: f64,
    /// Height of the displayed month's weeks; taps resolve within it.
    month_height: f64,
}

impl SwipeLayout {
    fn size(&self) -> Size {
        Size::new(self.metrics.width, self.header_height + self.body_height)
    }
}

/// Which rasters a mutation affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Region {
    Header,
    Pages,
    All,
}

/// Month calendar that follows horizontal drags.
///
/// The previous, displayed and next months are each rendered into a page
/// raster. Dragging moves the three pages together inside a [`ScrollStrip`];
/// releasing a drag that brought a neighbor fully (or nearly) into view makes
/// that neighbor the displayed month and regenerates all three pages.
///
/// Quick taps select a day or, on the outer quarters of the header, step one
/// month. Taps notify the date listener; [`SwipeCalendar::set_selected_date`]
/// does not.
pub struct SwipeCalendar<H: RenderHost> {
    host: H,
    style: SwipeStyle,
    today: CalendarDate,
    displayed: CalendarDate,
    selected: Option<CalendarDate>,
    size: Size,
    layout: Option<SwipeLayout>,
    requested: Option<Size>,
    header: Option<H::Raster>,
    pages: Option<[H::Raster; 3]>,
    strip: ScrollStrip,
    gesture: GestureState,
    on_date_select: Option<SelectListener>,
    on_month_change: Option<MonthListener>,
}

impl<H: RenderHost> fmt::Debug for SwipeCalendar<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCalendar")
            .field("style", &self.style)
            .field("today", &self.today)
            .field("displayed", &self.displayed)
            .field("selected", &self.selected)
            .field("size", &self.size)
            .field("strip", &self.strip)
            .field("built", &self.is_built())
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl<H: RenderHost> SwipeCalendar<H> {
    /// Taps must end within 500 ms and stay within 50 px horizontally; the tap
    /// lands where the pointer went down.
    pub const TAP_POLICY: TapPolicy = TapPolicy::new(500)
        .with_max_travel_x(50.0)
        .anchored_at(TapAnchor::Press);

    /// Creates a calendar showing and selecting today in UTC.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_today(host, CalendarDate::today_utc())
    }

    /// Creates a calendar that treats `today` as the current day.
    ///
    /// The month of `today` is displayed and `today` starts out selected.
    #[must_use]
    pub fn with_today(host: H, today: CalendarDate) -> Self {
        Self {
            host,
            style: SwipeStyle::default(),
            today,
            displayed: today.first_of_month(),
            selected: Some(today),
            size: Size::ZERO,
            layout: None,
            requested: None,
            header: None,
            pages: None,
            strip: ScrollStrip::new(0.0),
            gesture: GestureState::new(Self::TAP_POLICY),
            on_date_select: None,
            on_month_change: None,
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

    /// Registers the callback that receives days selected by a tap.
    pub fn set_on_date_select(&mut self, listener: impl FnMut(CalendarDate) + 'static) {
        self.on_date_select = Some(Box::new(listener));
    }

    /// Registers the callback that receives the first day of the newly
    /// displayed month after a header tap or a snap.
    pub fn set_on_month_change(&mut self, listener: impl FnMut(CalendarDate) + 'static) {
        self.on_month_change = Some(Box::new(listener));
    }

    /// Currently selected date.
    #[must_use]
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Replaces the selection without notifying the date listener.
    pub fn set_selected_date(&mut self, date: Option<CalendarDate>) {
        self.selected = date;
        self.regenerate(Region::Pages);
    }

    /// First day of the displayed month.
    #[must_use]
    pub fn displayed_month(&self) -> CalendarDate {
        self.displayed
    }

    /// Shows the month containing `date` with the strip at rest.
    ///
    /// Programmatic navigation does not notify the month listener.
    pub fn show_month(&mut self, date: CalendarDate) {
        self.displayed = date.first_of_month();
        self.strip.recenter();
        self.regenerate(Region::All);
    }

    /// Shows the month before the displayed one.
    pub fn show_previous_month(&mut self) {
        self.show_month(self.displayed.step(MonthStep::Previous));
    }

    /// Shows the month after the displayed one.
    pub fn show_next_month(&mut self) {
        self.show_month(self.displayed.step(MonthStep::Next));
    }

    /// The scroll state of the three pages.
    #[must_use]
    pub fn strip(&self) -> &ScrollStrip {
        &self.strip
    }

    /// The day drawn in the current-day color.
    #[must_use]
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Changes which day counts as today.
    pub fn set_today(&mut self, today: CalendarDate) {
        if today != self.today {
            self.today = today;
            self.regenerate(Region::Pages);
        }
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &SwipeStyle {
        &self.style
    }

    /// Replaces the whole style.
    pub fn set_style(&mut self, style: SwipeStyle) {
        self.style = style;
        self.regenerate(Region::All);
    }

    /// Text size in scale-independent pixels.
    #[must_use]
    pub fn text_size(&self) -> f64 {
        self.style.text_size_sp
    }

    /// Sets the text size in scale-independent pixels.
    pub fn set_text_size(&mut self, text_size_sp: f64) {
        self.style.text_size_sp = text_size_sp;
        self.regenerate(Region::All);
    }

    /// Title and arrow color.
    #[must_use]
    pub fn header_color(&self) -> Color {
        self.style.header_color
    }

    /// Sets the title and arrow color.
    pub fn set_header_color(&mut self, color: Color) {
        self.style.header_color = color;
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
        self.regenerate(Region::All);
    }

    /// Color of today's number.
    #[must_use]
    pub fn current_day_color(&self) -> Color {
        self.style.current_day_color
    }

    /// Sets the color of today's number.
    pub fn set_current_day_color(&mut self, color: Color) {
        self.style.current_day_color = color;
        self.regenerate(Region::Pages);
    }

    /// Number color of the selected day.
    #[must_use]
    pub fn selected_text_color(&self) -> Color {
        self.style.selected_text_color
    }

    /// Sets the number color of the selected day.
    pub fn set_selected_text_color(&mut self, color: Color) {
        self.style.selected_text_color = color;
        self.regenerate(Region::Pages);
    }

    /// Circle color behind the selected day.
    #[must_use]
    pub fn selected_background_color(&self) -> Color {
        self.style.selected_background_color
    }

    /// Sets the circle color behind the selected day.
    pub fn set_selected_background_color(&mut self, color: Color) {
        self.style.selected_background_color = color;
        self.regenerate(Region::Pages);
    }

    /// Height of the header raster, once built.
    #[must_use]
    pub fn header_height(&self) -> Option<f64> {
        self.layout.map(|layout| layout.header_height)
    }

    /// Height of each page raster, once built.
    ///
    /// Pages share one height, enough for whichever of the three months
    /// touches the most weeks.
    #[must_use]
    pub fn body_height(&self) -> Option<f64> {
        self.layout.map(|layout| layout.body_height)
    }

    /// Height of the displayed month's weeks below the header, once built.
    /// Taps on the body are resolved within it.
    #[must_use]
    pub fn month_height(&self) -> Option<f64> {
        self.layout.map(|layout| layout.month_height)
    }

    /// Returns `true` if the header and all three pages exist.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.header.is_some() && self.pages.is_some()
    }

    /// Drops all rasters; they are rebuilt on the next draw.
    pub fn invalidate(&mut self) {
        self.header = None;
        self.pages = None;
        self.layout = None;
    }

    fn compute_layout(&self) -> SwipeLayout {
        let text = self.host.sp_to_px(self.style.text_size_sp);
        let glyph_run = self.host.measure_text(&weekday_initials().concat(), text);
        let metrics = GridMetrics::new(self.size.width, glyph_run, text);
        let pitch = metrics.vertical_margin + text;
        let weeks = |month: CalendarDate| MonthGrid::for_date(month).week_count();
        let displayed = weeks(self.displayed);
        let tallest = displayed
            .max(weeks(self.displayed.step(MonthStep::Previous)))
            .max(weeks(self.displayed.step(MonthStep::Next)));
        SwipeLayout {
            metrics,
            header_height: 1.5 * metrics.vertical_margin + 2.0 * text,
            body_height: f64::from(tallest) * pitch,
            month_height: f64::from(displayed) * pitch,
        }
    }

    /// Rebuilds the rasters of `region` if the widget has been measured, then
    /// requests a redraw.
    fn regenerate(&mut self, region: Region) -> bool {
        if !is_measured(self.size) {
            log::debug!("swipe calendar: not measured yet, skipping raster generation");
            self.invalidate();
            return false;
        }
        let layout = self.compute_layout();
        let header_size = Size::new(layout.metrics.width, layout.header_height);
        let page_size = Size::new(layout.metrics.width, layout.body_height);
        if !is_measured(header_size) || !is_measured(page_size) {
            log::debug!("swipe calendar: degenerate layout {layout:?}, skipping");
            self.invalidate();
            return false;
        }
        let relayout = self.layout != Some(layout);
        self.layout = Some(layout);
        if relayout || self.header.is_none() || region != Region::Pages {
            self.header = Some(self.draw_header(layout));
        }
        if relayout || self.pages.is_none() || region != Region::Header {
            let displayed = self.displayed;
            self.pages = Some([
                self.draw_page(displayed.step(MonthStep::Previous), layout),
                self.draw_page(displayed, layout),
                self.draw_page(displayed.step(MonthStep::Next), layout),
            ]);
        }
        let desired = layout.size();
        if self.requested != Some(desired) {
            log::debug!("swipe calendar: requesting layout {desired:?}");
            self.requested = Some(desired);
            self.host.request_layout(desired);
        }
        self.host.request_redraw();
        true
    }

    fn draw_header(&mut self, layout: SwipeLayout) -> H::Raster {
        let SwipeLayout {
            metrics,
            header_height,
            ..
        } = layout;
        log::trace!(
            "swipe calendar: header raster {}x{header_height}",
            metrics.width
        );
        let mut raster = self
            .host
            .create_raster(Size::new(metrics.width, header_height));
        let (width, text) = (metrics.width, metrics.text_size);
        let (hm, vm) = (metrics.horizontal_margin, metrics.vertical_margin);
        let color = self.style.header_color;

        let title = self.displayed.title().to_string();
        raster.draw_text(&title, Point::new(width / 2.0, vm), text, color);
        let arrows_y = header_height / 2.0;
        raster.draw_text("<", Point::new(width / 8.0, arrows_y), text, color);
        raster.draw_text(">", Point::new(7.0 * width / 8.0, arrows_y), text, color);

        let y = vm + vm / 2.0 + text;
        let mut x = hm;
        for label in weekday_initials() {
            raster.draw_text(&label, Point::new(x, y), text, self.style.day_color);
            x += 2.0 * hm + self.host.measure_text(&label, text);
        }

        let divider = Line::new((0.0, header_height), (width, header_height));
        raster.draw_line(divider, self.style.day_color);
        raster
    }

    fn draw_page(&mut self, month: CalendarDate, layout: SwipeLayout) -> H::Raster {
        let SwipeLayout {
            metrics,
            body_height,
            ..
        } = layout;
        log::trace!("swipe calendar: page raster for {}", month.title());
        let mut raster = self
            .host
            .create_raster(Size::new(metrics.width, body_height));
        let text = metrics.text_size;
        let grid = MonthGrid::for_date(month);
        for day in grid.days() {
            let (Some(cell), Some(date)) = (grid.cell_of(day), grid.date(day)) else {
                continue;
            };
            let anchor = metrics.day_anchor(cell);
            let color = if self.selected == Some(date) {
                // Centered on the digits rather than on the baseline.
                let center = Point::new(anchor.x, anchor.y - text / 2.0 + 4.0);
                raster.fill_circle(
                    Circle::new(center, text),
                    self.style.selected_background_color,
                );
                self.style.selected_text_color
            } else if date == self.today {
                self.style.current_day_color
            } else {
                self.style.day_color
            };
            raster.draw_text(&day.to_string(), anchor, text, color);
        }
        raster
    }

    fn on_tap(&mut self, position: Point, layout: SwipeLayout) {
        if position.y > layout.header_height {
            let pt = Point::new(position.x, position.y - layout.header_height);
            let grid = MonthGrid::for_date(self.displayed);
            let hits = HitGrid::new(grid, layout.metrics.width, layout.month_height);
            if let Some(date) = hits.day_at(pt).and_then(|day| grid.date(day)) {
                log::debug!("swipe calendar: selected {date}");
                self.selected = Some(date);
                self.regenerate(Region::Pages);
                if let Some(listener) = self.on_date_select.as_mut() {
                    listener(date);
                }
            }
        } else {
            let zone = HeaderZone::at(position.x, layout.metrics.width, HeaderSplit::Quarters);
            if let Some(step) = zone.step() {
                self.strip.recenter();
                self.change_month(step);
            }
        }
    }

    fn on_release(&mut self) {
        if let Some(step) = self.strip.settle() {
            log::debug!("swipe calendar: snapped at offset {}", self.strip.offset());
            self.change_month(step);
        }
    }

    fn change_month(&mut self, step: MonthStep) {
        self.displayed = self.displayed.step(step);
        log::debug!("swipe calendar: {step:?} to {}", self.displayed.title());
        self.regenerate(Region::All);
        let displayed = self.displayed;
        if let Some(listener) = self.on_month_change.as_mut() {
            listener(displayed);
        }
    }
}

impl<H: RenderHost> CalendarWidget for SwipeCalendar<H> {
    type Raster = H::Raster;

    fn on_resize(&mut self, new_size: Size, old_size: Size) {
        log::debug!("swipe calendar: resized from {old_size:?} to {new_size:?}");
        let width_changed = new_size.width != self.size.width;
        self.size = new_size;
        if width_changed {
            self.strip.set_page_width(new_size.width);
        }
        // Height follows the content, so rasters built for this width stay valid.
        if width_changed || !is_measured(new_size) {
            self.invalidate();
        }
    }

    fn on_draw(&mut self, surface: &mut dyn Surface<H::Raster>) {
        if let (Some(header), Some(pages), Some(layout)) = (&self.header, &self.pages, self.layout)
        {
            surface.draw_raster(header, Point::ORIGIN);
            for (page, x) in pages.iter().zip(self.strip.page_origins()) {
                surface.draw_raster(page, Point::new(x, layout.header_height));
            }
            return;
        }
        self.regenerate(Region::All);
    }

    fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        let Some(layout) = self.layout.filter(|_| self.is_built()) else {
            return false;
        };
        match self.gesture.handle(event) {
            GestureOutcome::Pressed => self.strip.begin_drag(),
            GestureOutcome::Moved { offset } => {
                if self.strip.drag_to(offset.x) {
                    self.host.request_redraw();
                }
            }
            GestureOutcome::Tap { position } => {
                self.on_tap(position, layout);
                self.on_release();
            }
            GestureOutcome::Released { .. } => self.on_release(),
            GestureOutcome::Ignored => {}
        }
        true
    }
}
