// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_calendar_grid` crate.
//!
//! These cover whole-year sweeps of the layout and hit-testing arithmetic
//! rather than single months.

use kurbo::Point;
use understory_calendar_grid::{CalendarDate, GridMetrics, HitGrid, MonthGrid};

#[test]
fn month_titles() {
    let date = CalendarDate::new(2026, 3, 5).unwrap();
    assert_eq!(date.title().to_string(), "March 2026");
    assert_eq!(date.to_string(), "2026-03-05");
}

#[test]
fn every_month_of_a_decade_round_trips_through_hit_testing() {
    for year in 2020..2030 {
        for month in 1..=12 {
            let grid = MonthGrid::new(year, month).unwrap();
            let hits = HitGrid::new(grid, 7.0 * 60.0, f64::from(grid.week_count()) * 50.0);
            for day in grid.days() {
                let rect = hits.cell_rect(day).unwrap();
                let label = format!("{year}-{month}-{day}");
                assert_eq!(hits.day_at(rect.center()), Some(day), "{label}");
                assert!(rect.y1 <= hits.body_height, "{label}");
            }
        }
    }
}

#[test]
fn hit_cells_line_up_with_drawn_columns() {
    let grid = MonthGrid::new(2026, 10).unwrap();
    let metrics = GridMetrics::from_glyph_width(700.0, 20.0, 14.0);
    let hits = HitGrid::new(grid, metrics.width, 400.0);
    for day in grid.days() {
        let cell = grid.cell_of(day).unwrap();
        let anchor = metrics.day_anchor(cell);
        if let Some(rect) = hits.cell_rect(day) {
            assert!(rect.x0 <= anchor.x && anchor.x < rect.x1, "day {day}");
        }
    }
}

#[test]
fn first_weekday_ignores_the_day_of_month() {
    for month in 1..=12 {
        let first = MonthGrid::new(2027, month).unwrap();
        let last_day = first.days_in_month();
        let late = MonthGrid::for_date(CalendarDate::new(2027, month, last_day).unwrap());
        assert_eq!(first, late);
        assert!((1..=7).contains(&first.first_weekday()));
        assert!((28..=31).contains(&first.days_in_month()));
    }
}

#[test]
fn taps_below_the_sized_rows_are_ignored() {
    let grid = MonthGrid::new(2026, 9).unwrap();
    let hits = HitGrid::new(grid, 700.0, 400.0);
    // Five weeks of 80 px; the last one holds day 30.
    assert_eq!(hits.day_at(Point::new(350.0, 399.0)), Some(30));
    assert_eq!(hits.day_at(Point::new(350.0, 401.0)), None);
}
