// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_calendar_grid --heading-base-level=0

//! Understory Calendar Grid: month layout and tap hit-testing arithmetic.
//!
//! This crate is the stateless core shared by the Understory calendar
//! widgets. It answers two questions for a displayed month:
//!
//! - Where is day `D` drawn? ([`MonthGrid::cell_of`], [`GridMetrics::day_anchor`])
//! - Which day is under a tap at `(x, y)`? ([`HitGrid::day_at`], [`HeaderZone::at`])
//!
//! Weeks are laid out in seven columns, Sunday first. Day 1 lands in column
//! `first_weekday - 1` of row 0 and the remaining days proceed left to right,
//! top to bottom.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_calendar_grid::{CalendarDate, GridCell, HitGrid, MonthGrid};
//!
//! // September 2026 has 30 days and starts on a Tuesday (weekday 3).
//! let date = CalendarDate::new(2026, 9, 17).unwrap();
//! let grid = MonthGrid::for_date(date);
//! assert_eq!(grid.first_weekday(), 3);
//! assert_eq!(grid.cell_of(1), Some(GridCell { row: 0, column: 2 }));
//!
//! // Hit-test a 700×400 body: columns are 100 px and the month's five
//! // weeks are 80 px each.
//! assert_eq!(grid.week_count(), 5);
//! let hits = HitGrid::new(grid, 700.0, 400.0);
//! assert_eq!(hits.day_at(Point::new(250.0, 10.0)), Some(1));
//! assert_eq!(hits.day_at(Point::new(50.0, 10.0)), None);
//! assert_eq!(hits.day_at(Point::new(350.0, 390.0)), Some(30));
//! ```
//!
//! ## Header navigation
//!
//! ```rust
//! use understory_calendar_grid::{HeaderSplit, HeaderZone, MonthStep};
//!
//! let zone = HeaderZone::at(20.0, 300.0, HeaderSplit::Thirds);
//! assert_eq!(zone.step(), Some(MonthStep::Previous));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and chrono.
//! - `clock`: [`CalendarDate::today_local`] and [`CalendarDate::today_utc`].
//!
//! This crate is `no_std`.

#![no_std]

mod date;
mod fixed;
mod grid;
mod header;
mod metrics;

pub use date::{CalendarDate, MonthStep, MonthTitle};
pub use fixed::{FIXED_ROWS, FIXED_SLOTS, fixed_cell};
pub use grid::{DAYS_PER_WEEK, GridCell, MonthGrid, PIXEL_COLUMN_OFFSET};
pub use header::{HeaderSplit, HeaderZone};
pub use metrics::{GridMetrics, HitGrid};
