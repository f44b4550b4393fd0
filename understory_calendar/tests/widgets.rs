// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests for the calendar widgets, driven through the recording host.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_calendar::recording::{RecordingHost, RecordingSurface};
use understory_calendar::{
    CalendarDate, CalendarWidget, PagedCalendar, PointerEvent, Raster, StaticCalendar,
    SwipeCalendar,
};
use understory_calendar_grid::{HitGrid, MonthGrid};

const WIDTH: f64 = 700.0;

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

/// Collects every date a listener receives.
fn sink() -> (Rc<RefCell<Vec<CalendarDate>>>, impl FnMut(CalendarDate) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let tx = Rc::clone(&seen);
    (seen, move |d| tx.borrow_mut().push(d))
}

fn paged(today: CalendarDate) -> PagedCalendar<RecordingHost> {
    let mut calendar = PagedCalendar::with_today(RecordingHost::new(), today);
    calendar.on_resize(Size::new(WIDTH, 400.0), Size::ZERO);
    calendar.on_draw(&mut RecordingSurface::new());
    calendar
}

fn swipe(today: CalendarDate) -> SwipeCalendar<RecordingHost> {
    let mut calendar = SwipeCalendar::with_today(RecordingHost::new(), today);
    calendar.on_resize(Size::new(WIDTH, 400.0), Size::ZERO);
    calendar.on_draw(&mut RecordingSurface::new());
    calendar
}

fn tap<W: CalendarWidget>(widget: &mut W, at: Point, duration_ms: u64) {
    widget.on_pointer_event(PointerEvent::down(at, 1_000));
    widget.on_pointer_event(PointerEvent::up(at, 1_000 + duration_ms));
}

/// Window position of the center of `day`'s tap cell in the displayed month.
fn day_center(displayed: CalendarDate, header: f64, body: f64, day: u32) -> Point {
    let hits = HitGrid::new(MonthGrid::for_date(displayed), WIDTH, body);
    let center = hits.cell_rect(day).unwrap().center();
    Point::new(center.x, center.y + header)
}

#[test]
fn paged_header_left_third_in_march_shows_february_without_callback() {
    let mut calendar = paged(date(2026, 3, 10));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);

    tap(&mut calendar, Point::new(WIDTH / 3.0, 5.0), 100);

    assert_eq!(calendar.displayed_month(), date(2026, 2, 1));
    assert!(seen.borrow().is_empty());
    assert_eq!(calendar.selected_date(), Some(date(2026, 3, 10)));
}

#[test]
fn paged_header_right_third_and_center() {
    let mut calendar = paged(date(2026, 3, 10));
    tap(&mut calendar, Point::new(WIDTH / 2.0, 5.0), 100);
    assert_eq!(calendar.displayed_month(), date(2026, 3, 1));
    tap(&mut calendar, Point::new(WIDTH - 1.0, 5.0), 100);
    assert_eq!(calendar.displayed_month(), date(2026, 4, 1));
}

#[test]
fn paged_tap_on_day_round_trips() {
    let mut calendar = paged(date(2026, 3, 10));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    let header = calendar.header_height().unwrap();
    let body = calendar.body_height().unwrap();

    for day in [1, 12, 22] {
        let at = day_center(date(2026, 3, 1), header, body, day);
        tap(&mut calendar, at, 120);
        assert_eq!(calendar.selected_date(), Some(date(2026, 3, day)));
    }
    assert_eq!(
        *seen.borrow(),
        [date(2026, 3, 1), date(2026, 3, 12), date(2026, 3, 22)]
    );
}

#[test]
fn paged_taps_outside_the_month_are_silent() {
    let mut calendar = paged(date(2026, 9, 17));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    let header = calendar.header_height().unwrap();
    let body = calendar.body_height().unwrap();

    // September 2026 starts on a Tuesday: the first two cells are blank.
    tap(&mut calendar, Point::new(10.0, header + 5.0), 100);
    // Below the sized body.
    tap(&mut calendar, Point::new(10.0, header + body + 5.0), 100);

    assert!(seen.borrow().is_empty());
    assert_eq!(calendar.selected_date(), Some(date(2026, 9, 17)));
}

#[test]
fn paged_slow_press_is_not_a_click() {
    let mut calendar = paged(date(2026, 3, 10));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    let header = calendar.header_height().unwrap();
    let body = calendar.body_height().unwrap();

    let at = day_center(date(2026, 3, 1), header, body, 12);
    tap(&mut calendar, at, 401);
    tap(&mut calendar, Point::new(5.0, 5.0), 401);

    assert!(seen.borrow().is_empty());
    assert_eq!(calendar.displayed_month(), date(2026, 3, 1));
}

#[test]
fn paged_moves_do_not_prevent_clicks() {
    let mut calendar = paged(date(2026, 3, 10));
    calendar.on_pointer_event(PointerEvent::down((5.0, 5.0), 0));
    calendar.on_pointer_event(PointerEvent::moved((150.0, 5.0), 50));
    calendar.on_pointer_event(PointerEvent::up((150.0, 5.0), 100));
    // Classified at the release position, still inside the left third.
    assert_eq!(calendar.displayed_month(), date(2026, 2, 1));
}

#[test]
fn paged_disabled_dates_still_notify() {
    let mut calendar = paged(date(2026, 3, 10));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    calendar.set_disable_all_dates(true);
    let header = calendar.header_height().unwrap();
    let body = calendar.body_height().unwrap();

    let at = day_center(date(2026, 3, 1), header, body, 5);
    tap(&mut calendar, at, 100);

    assert_eq!(*seen.borrow(), [date(2026, 3, 5)]);
}

#[test]
fn paged_programmatic_selection_notifies() {
    let mut calendar = paged(date(2026, 3, 10));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    calendar.select_day(date(2026, 3, 20));
    assert_eq!(*seen.borrow(), [date(2026, 3, 20)]);
    assert_eq!(calendar.selected_date(), Some(date(2026, 3, 20)));
}

#[test]
fn paged_requests_new_height_when_rows_change() {
    // July 2026 touches five weeks, August 2026 six.
    let mut calendar = paged(date(2026, 7, 15));
    let july = calendar.host().last_layout_request().unwrap();
    calendar.show_next_month();
    let august = calendar.host().last_layout_request().unwrap();
    assert_eq!(july.width, WIDTH);
    assert!(august.height > july.height);
    assert_eq!(calendar.host().layout_requests().len(), 2);
}

#[test]
fn paged_every_day_of_a_year_round_trips() {
    let mut calendar = paged(date(2026, 1, 1));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    for month in 1..=12 {
        calendar.show_month(date(2026, month, 1));
        let header = calendar.header_height().unwrap();
        let body = calendar.body_height().unwrap();
        for day in MonthGrid::new(2026, month).unwrap().days() {
            let at = day_center(date(2026, month, 1), header, body, day);
            tap(&mut calendar, at, 100);
            assert_eq!(calendar.selected_date(), Some(date(2026, month, day)));
        }
    }
    assert_eq!(seen.borrow().len(), 365);
}

#[test]
fn paged_last_week_is_on_the_body_raster() {
    let mut calendar = paged(date(2026, 9, 17));
    let mut surface = RecordingSurface::new();
    calendar.on_draw(&mut surface);
    let body = &surface.composites()[1].raster;
    let (anchor, _) = body.find_text("30").unwrap();
    assert!(anchor.y < body.size().height);
}

#[test]
fn paged_honoring_layout_request_keeps_rasters() {
    let mut calendar = paged(date(2026, 7, 15));
    calendar.show_next_month();
    let created = calendar.host().rasters_created();
    let wanted = calendar.host().last_layout_request().unwrap();

    calendar.on_resize(wanted, Size::new(WIDTH, 400.0));
    let mut surface = RecordingSurface::new();
    calendar.on_draw(&mut surface);

    assert_eq!(surface.composites().len(), 2);
    assert_eq!(calendar.host().rasters_created(), created);
    let header = surface.composites()[0].raster.texts().next().unwrap().0;
    assert_eq!(header, "August 2026");
}

#[test]
fn paged_first_draw_builds_then_second_composites() {
    let mut calendar = PagedCalendar::with_today(RecordingHost::new(), date(2026, 3, 10));
    calendar.on_resize(Size::new(WIDTH, 400.0), Size::ZERO);
    let mut surface = RecordingSurface::new();
    calendar.on_draw(&mut surface);
    assert!(surface.is_empty());
    assert_eq!(calendar.host().rasters_created(), 2);
    assert_eq!(calendar.host().redraw_requests(), 1);
    calendar.on_draw(&mut surface);
    assert_eq!(surface.composites().len(), 2);
    assert_eq!(calendar.host().rasters_created(), 2);
}

#[test]
fn unmeasured_widgets_build_nothing() {
    let mut paged = PagedCalendar::with_today(RecordingHost::new(), date(2026, 3, 10));
    let mut swipe = SwipeCalendar::with_today(RecordingHost::new(), date(2026, 3, 10));
    let mut fixed = StaticCalendar::new(RecordingHost::new());
    let mut surface = RecordingSurface::new();

    paged.on_resize(Size::ZERO, Size::ZERO);
    swipe.on_resize(Size::new(-5.0, 300.0), Size::ZERO);
    fixed.on_resize(Size::ZERO, Size::ZERO);
    for _ in 0..2 {
        paged.on_draw(&mut surface);
        swipe.on_draw(&mut surface);
        fixed.on_draw(&mut surface);
    }

    assert!(surface.is_empty());
    assert_eq!(paged.host().rasters_created(), 0);
    assert_eq!(swipe.host().rasters_created(), 0);
    assert_eq!(fixed.host().rasters_created(), 0);
    assert!(!paged.on_pointer_event(PointerEvent::down((1.0, 1.0), 0)));
    assert!(!swipe.on_pointer_event(PointerEvent::down((1.0, 1.0), 0)));
}

#[test]
fn swipe_drag_to_two_pages_steps_month_and_regenerates_all_pages() {
    let mut calendar = swipe(date(2026, 3, 10));
    let (months, listener) = sink();
    calendar.set_on_month_change(listener);
    let y = calendar.header_height().unwrap() + 20.0;
    let created = calendar.host().rasters_created();

    calendar.on_pointer_event(PointerEvent::down((100.0, y), 0));
    calendar.on_pointer_event(PointerEvent::moved((500.0, y), 100));
    calendar.on_pointer_event(PointerEvent::moved((900.0, y), 200));
    assert_eq!(calendar.strip().offset(), 2.0 * WIDTH);
    calendar.on_pointer_event(PointerEvent::up((900.0, y), 300));

    assert_eq!(calendar.displayed_month(), date(2026, 2, 1));
    assert_eq!(calendar.strip().offset(), WIDTH);
    // Header plus the three pages.
    assert_eq!(calendar.host().rasters_created(), created + 4);
    assert_eq!(*months.borrow(), [date(2026, 2, 1)]);
}

#[test]
fn swipe_drag_to_left_edge_steps_forward() {
    let mut calendar = swipe(date(2026, 3, 10));
    let y = calendar.header_height().unwrap() + 20.0;

    calendar.on_pointer_event(PointerEvent::down((690.0, y), 0));
    calendar.on_pointer_event(PointerEvent::moved((10.0, y), 100));
    calendar.on_pointer_event(PointerEvent::up((10.0, y), 200));

    assert_eq!(calendar.displayed_month(), date(2026, 4, 1));
    assert_eq!(calendar.strip().offset(), 20.0 + WIDTH);
}

#[test]
fn swipe_partial_drag_keeps_month() {
    let mut calendar = swipe(date(2026, 3, 10));
    let y = calendar.header_height().unwrap() + 20.0;
    let created = calendar.host().rasters_created();

    calendar.on_pointer_event(PointerEvent::down((300.0, y), 0));
    calendar.on_pointer_event(PointerEvent::moved((500.0, y), 100));
    calendar.on_pointer_event(PointerEvent::up((500.0, y), 200));

    assert_eq!(calendar.displayed_month(), date(2026, 3, 1));
    assert_eq!(calendar.host().rasters_created(), created);
}

#[test]
fn swipe_click_versus_drag() {
    let mut calendar = swipe(date(2026, 3, 10));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    let header = calendar.header_height().unwrap();
    let body = calendar.month_height().unwrap();
    let target = day_center(date(2026, 3, 1), header, body, 18);

    // Wandering 60 px and coming back is a drag.
    calendar.on_pointer_event(PointerEvent::down(target, 0));
    calendar.on_pointer_event(PointerEvent::moved((target.x + 60.0, target.y), 50));
    calendar.on_pointer_event(PointerEvent::moved(target, 100));
    calendar.on_pointer_event(PointerEvent::up(target, 150));
    assert!(seen.borrow().is_empty());

    // Too slow.
    tap(&mut calendar, target, 501);
    assert!(seen.borrow().is_empty());

    // A short nudge is still a click, resolved at the press position.
    calendar.on_pointer_event(PointerEvent::down(target, 0));
    calendar.on_pointer_event(PointerEvent::moved((target.x + 30.0, target.y), 50));
    calendar.on_pointer_event(PointerEvent::up((target.x + 30.0, target.y), 100));
    assert_eq!(*seen.borrow(), [date(2026, 3, 18)]);
    assert_eq!(calendar.selected_date(), Some(date(2026, 3, 18)));
}

#[test]
fn swipe_every_day_of_a_year_round_trips() {
    let mut calendar = swipe(date(2026, 1, 1));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    for month in 1..=12 {
        calendar.show_month(date(2026, month, 1));
        let header = calendar.header_height().unwrap();
        let body = calendar.month_height().unwrap();
        for day in MonthGrid::new(2026, month).unwrap().days() {
            let at = day_center(date(2026, month, 1), header, body, day);
            tap(&mut calendar, at, 100);
            assert_eq!(calendar.selected_date(), Some(date(2026, month, day)));
        }
    }
    assert_eq!(seen.borrow().len(), 365);
}

#[test]
fn swipe_honoring_layout_request_keeps_pages() {
    let mut calendar = swipe(date(2026, 9, 17));
    calendar.show_next_month();
    let created = calendar.host().rasters_created();
    let wanted = calendar.host().last_layout_request().unwrap();

    calendar.on_resize(wanted, Size::new(WIDTH, 400.0));
    let mut surface = RecordingSurface::new();
    calendar.on_draw(&mut surface);

    assert_eq!(surface.composites().len(), 4);
    assert_eq!(calendar.host().rasters_created(), created);
    assert_eq!(calendar.strip().offset(), WIDTH);
}

#[test]
fn interleaved_presses_on_two_widgets_stay_separate() {
    let mut first = paged(date(2026, 3, 10));
    let mut second = paged(date(2026, 3, 10));
    let (first_seen, listener) = sink();
    first.set_on_date_select(listener);
    let (second_seen, listener) = sink();
    second.set_on_date_select(listener);
    let header = first.header_height().unwrap();
    let body = first.body_height().unwrap();
    let fifth = day_center(date(2026, 3, 1), header, body, 5);
    let twentieth = day_center(date(2026, 3, 1), header, body, 20);

    // The first press is held too long; the second is quick. Each widget
    // must classify against its own press.
    first.on_pointer_event(PointerEvent::down(fifth, 0));
    second.on_pointer_event(PointerEvent::down(twentieth, 450));
    first.on_pointer_event(PointerEvent::up(fifth, 500));
    second.on_pointer_event(PointerEvent::up(twentieth, 520));

    assert!(first_seen.borrow().is_empty());
    assert_eq!(*second_seen.borrow(), [date(2026, 3, 20)]);

    // A release on a widget that saw no press is ignored there.
    let mut swipe_widget = swipe(date(2026, 3, 10));
    let (swipe_seen, listener) = sink();
    swipe_widget.set_on_date_select(listener);
    first.on_pointer_event(PointerEvent::down(fifth, 1_000));
    swipe_widget.on_pointer_event(PointerEvent::up(fifth, 1_050));
    first.on_pointer_event(PointerEvent::up(fifth, 1_100));
    assert!(swipe_seen.borrow().is_empty());
    assert_eq!(*first_seen.borrow(), [date(2026, 3, 5)]);
}

#[test]
fn swipe_programmatic_selection_is_silent() {
    let mut calendar = swipe(date(2026, 3, 10));
    let (seen, listener) = sink();
    calendar.set_on_date_select(listener);
    calendar.set_selected_date(Some(date(2026, 3, 3)));
    assert_eq!(calendar.selected_date(), Some(date(2026, 3, 3)));
    calendar.set_selected_date(None);
    assert_eq!(calendar.selected_date(), None);
    assert!(seen.borrow().is_empty());
}

#[test]
fn swipe_header_quarters_navigate() {
    let mut calendar = swipe(date(2026, 3, 10));
    let (months, listener) = sink();
    calendar.set_on_month_change(listener);

    tap(&mut calendar, Point::new(WIDTH / 4.0, 5.0), 100);
    tap(&mut calendar, Point::new(WIDTH / 3.0, 5.0), 100);
    assert_eq!(calendar.displayed_month(), date(2026, 2, 1));

    tap(&mut calendar, Point::new(WIDTH * 0.75, 5.0), 100);
    tap(&mut calendar, Point::new(WIDTH * 0.75, 5.0), 100);
    assert_eq!(calendar.displayed_month(), date(2026, 4, 1));
    assert_eq!(
        *months.borrow(),
        [date(2026, 2, 1), date(2026, 3, 1), date(2026, 4, 1)]
    );
}

#[test]
fn static_grid_fills_its_height() {
    let mut calendar = StaticCalendar::new(RecordingHost::new());
    calendar.on_resize(Size::new(WIDTH, 500.0), Size::ZERO);
    let mut surface = RecordingSurface::new();
    calendar.on_draw(&mut surface);
    let composites = surface.composites();
    assert_eq!(composites.len(), 2);
    assert_eq!(composites[0].raster.texts().count(), 7);
    assert_eq!(composites[1].raster.texts().count(), 31);
    assert!(calendar.host().layout_requests().is_empty());
}
