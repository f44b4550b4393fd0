// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_calendar --heading-base-level=0

//! Understory Calendar: month picker widgets drawn through a host.
//!
//! Three widgets share the arithmetic of [`understory_calendar_grid`] and the
//! tap classification of [`understory_gesture`]:
//!
//! - [`PagedCalendar`]: one month at a time; header taps page through months
//!   and body taps select a day.
//! - [`SwipeCalendar`]: previous, displayed and next months side by side in a
//!   [`ScrollStrip`] that follows horizontal drags and snaps to a neighbor.
//! - [`StaticCalendar`]: a fixed 31-day grid with no input handling.
//!
//! Widgets never rasterize themselves. They render into rasters obtained from a
//! [`RenderHost`] and composite them onto the [`Surface`] passed to
//! [`CalendarWidget::on_draw`]. Rasters are cached until something that
//! affects their appearance changes.
//!
//! Nothing here returns errors. A widget that has not been given a usable size
//! yet builds nothing and draws nothing; a tap outside the month is ignored.
//!
//! [`recording`] contains a host that records drawing operations instead of
//! producing pixels, for tests and headless tools.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Size;
//! use understory_calendar::recording::{RecordingHost, RecordingSurface};
//! use understory_calendar::{CalendarDate, CalendarWidget, PagedCalendar, PointerEvent};
//!
//! let today = CalendarDate::new(2026, 3, 10).unwrap();
//! let mut calendar = PagedCalendar::with_today(RecordingHost::new(), today);
//! let picked = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&picked);
//! calendar.set_on_date_select(move |date| sink.set(Some(date)));
//!
//! calendar.on_resize(Size::new(700.0, 600.0), Size::ZERO);
//! let mut surface = RecordingSurface::new();
//! // The first pass builds the rasters and asks for another one.
//! calendar.on_draw(&mut surface);
//! assert!(surface.is_empty());
//! calendar.on_draw(&mut surface);
//! assert_eq!(surface.composites().len(), 2);
//!
//! // A quick tap on the left third of the header shows February.
//! calendar.on_pointer_event(PointerEvent::down((20.0, 10.0), 0));
//! calendar.on_pointer_event(PointerEvent::up((20.0, 10.0), 80));
//! assert_eq!(calendar.displayed_month(), CalendarDate::new(2026, 2, 1).unwrap());
//! assert_eq!(picked.get(), None);
//! ```
//!
//! ## Selection callbacks
//!
//! Taps that land on a day always notify the date listener. Selections made by
//! the host differ: [`PagedCalendar::select_day`] notifies like a tap does,
//! while [`SwipeCalendar::set_selected_date`] does not.

mod host;
mod paged;
pub mod recording;
mod static_grid;
mod strip;
mod style;
mod swipe;

pub use host::{CalendarWidget, Raster, RenderHost, Surface};
pub use paged::PagedCalendar;
pub use static_grid::StaticCalendar;
pub use strip::{SNAP_DISTANCE, ScrollStrip};
pub use style::{
    PagedStyle, StaticStyle, SwipeStyle, argb, weekday_abbreviations, weekday_initials, weekdays,
};
pub use swipe::SwipeCalendar;

pub use understory_calendar_grid::{CalendarDate, MonthStep};
pub use understory_gesture::{PointerEvent, PointerKind, TapPolicy};

/// Callback receiving a selected date.
pub type SelectListener = Box<dyn FnMut(CalendarDate)>;

/// Callback receiving the first day of a newly displayed month.
pub type MonthListener = Box<dyn FnMut(CalendarDate)>;
