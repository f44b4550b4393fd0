// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless driver for the Understory calendar widgets.
//!
//! Plays a gesture script against one widget through the recording host and
//! prints every draw pass and every listener notification. The driver plays
//! the part of a host framework: it honors layout requests by resizing the
//! widget and answers redraw requests with a draw pass.

mod args;
mod style_file;

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use flexi_logger::{FileSpec, Logger};
use kurbo::Size;
use structopt::StructOpt;
use understory_calendar::recording::{RecordedRaster, RecordingHost, RecordingSurface};
use understory_calendar::{
    CalendarDate, CalendarWidget, PagedCalendar, PointerEvent, Raster, StaticCalendar,
    SwipeCalendar,
};

use crate::args::{Action, Args, Variant};
use crate::style_file::StyleFile;

/// Milliseconds between synthesized pointer events.
const FRAME_MS: u64 = 16;
/// Number of moves a scripted drag is split into.
const DRAG_STEPS: u32 = 8;
/// Upper bound on draw passes answered after one step.
const MAX_PASSES: usize = 4;

type EventLog = Rc<RefCell<Vec<String>>>;

/// A widget the driver can inspect between steps.
trait Driven: CalendarWidget<Raster = RecordedRaster> {
    fn recording_host(&self) -> &RecordingHost;

    fn describe(&self) -> String;
}

impl Driven for PagedCalendar<RecordingHost> {
    fn recording_host(&self) -> &RecordingHost {
        self.host()
    }

    fn describe(&self) -> String {
        format!(
            "showing {}, selected {}",
            self.displayed_month().title(),
            fmt_selection(self.selected_date())
        )
    }
}

impl Driven for SwipeCalendar<RecordingHost> {
    fn recording_host(&self) -> &RecordingHost {
        self.host()
    }

    fn describe(&self) -> String {
        format!(
            "showing {}, selected {}, strip offset {}",
            self.displayed_month().title(),
            fmt_selection(self.selected_date()),
            self.strip().offset()
        )
    }
}

impl Driven for StaticCalendar<RecordingHost> {
    fn recording_host(&self) -> &RecordingHost {
        self.host()
    }

    fn describe(&self) -> String {
        format!("header {} px", self.header_height())
    }
}

fn fmt_selection(date: Option<CalendarDate>) -> String {
    date.map_or_else(|| "nothing".to_owned(), |d| d.to_string())
}

/// Plays the part of the host framework for one widget.
struct Driver<'a, W> {
    widget: W,
    size: Size,
    now_ms: u64,
    seen_layouts: usize,
    seen_redraws: usize,
    events: &'a EventLog,
}

impl<W: Driven> Driver<'_, W> {
    fn pointer(&mut self, event: PointerEvent) {
        self.widget.on_pointer_event(event);
        self.now_ms += FRAME_MS;
    }

    fn perform(&mut self, action: Action) {
        log::debug!("performing {action:?}");
        match action {
            Action::Draw => self.draw(),
            Action::Tap { x, y } => {
                self.pointer(PointerEvent::down((x, y), self.now_ms));
                self.pointer(PointerEvent::up((x, y), self.now_ms + 4 * FRAME_MS));
            }
            Action::Hold { x, y } => {
                self.pointer(PointerEvent::down((x, y), self.now_ms));
                self.pointer(PointerEvent::up((x, y), self.now_ms + 1_000));
            }
            Action::Drag { x0, y, x1 } => {
                self.pointer(PointerEvent::down((x0, y), self.now_ms));
                for step in 1..=DRAG_STEPS {
                    let t = f64::from(step) / f64::from(DRAG_STEPS);
                    let x = x0 + (x1 - x0) * t;
                    self.pointer(PointerEvent::moved((x, y), self.now_ms));
                }
                self.pointer(PointerEvent::up((x1, y), self.now_ms));
            }
        }
        self.report();
        self.service_host();
    }

    fn draw(&mut self) {
        // Requests made while drawing ask for the pass after this one.
        let pending = self.widget.recording_host().redraw_requests();
        let mut surface = RecordingSurface::new();
        self.widget.on_draw(&mut surface);
        self.seen_redraws = pending;
        if surface.is_empty() {
            println!("draw: nothing to show yet");
            return;
        }
        println!("draw: {} raster(s)", surface.composites().len());
        for composite in surface.composites() {
            let raster = &composite.raster;
            let texts: Vec<_> = raster.texts().map(|(text, _, _)| text).collect();
            println!(
                "  at ({:.1}, {:.1}) {:.1}x{:.1}: {} op(s) [{}]",
                composite.origin.x,
                composite.origin.y,
                raster.size().width,
                raster.size().height,
                raster.ops().len(),
                texts.join(" ")
            );
        }
    }

    fn report(&mut self) {
        for event in self.events.borrow_mut().drain(..) {
            println!("event: {event}");
        }
        println!("state: {}", self.widget.describe());
    }

    /// Honors layout requests and answers redraw requests until the widget
    /// settles.
    fn service_host(&mut self) {
        for _ in 0..MAX_PASSES {
            let requests = self.widget.recording_host().layout_requests();
            if let Some(&wanted) = requests.get(self.seen_layouts..).and_then(<[Size]>::last) {
                self.seen_layouts = requests.len();
                if wanted != self.size {
                    let old = self.size;
                    self.size = wanted;
                    println!("layout: {:.1}x{:.1}", wanted.width, wanted.height);
                    self.widget.on_resize(wanted, old);
                }
            }
            if self.widget.recording_host().redraw_requests() <= self.seen_redraws {
                break;
            }
            self.draw();
        }
    }

    fn run(&mut self, actions: &[Action]) {
        println!("state: {}", self.widget.describe());
        self.widget.on_resize(self.size, Size::ZERO);
        self.draw();
        self.service_host();
        self.report();
        for &action in actions {
            self.perform(action);
        }
    }
}

fn default_script(variant: Variant, size: Size) -> Vec<Action> {
    let (w, h) = (size.width, size.height);
    match variant {
        Variant::Paged => vec![
            Action::Tap { x: w / 6.0, y: 4.0 },
            Action::Tap {
                x: w * 5.0 / 6.0,
                y: 4.0,
            },
            Action::Tap {
                x: w / 2.0,
                y: h * 0.6,
            },
            Action::Hold {
                x: w / 2.0,
                y: h * 0.5,
            },
        ],
        Variant::Swipe => vec![
            Action::Drag {
                x0: 10.0,
                y: h * 0.6,
                x1: w + 10.0,
            },
            Action::Drag {
                x0: w - 10.0,
                y: h * 0.6,
                x1: 10.0,
            },
            Action::Tap {
                x: w / 2.0,
                y: h * 0.5,
            },
            Action::Tap { x: w - 4.0, y: 4.0 },
        ],
        Variant::Static => vec![
            Action::Tap {
                x: w / 2.0,
                y: h / 2.0,
            },
            Action::Draw,
        ],
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;
    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }
    let _logger = logger.start()?;

    let overrides = match &args.style {
        Some(path) => StyleFile::load(path)?,
        None => StyleFile::default(),
    };
    let today = args.today.unwrap_or_else(CalendarDate::today_local);
    let size = Size::new(args.width, args.height);
    let actions = if args.actions.is_empty() {
        default_script(args.variant, size)
    } else {
        args.actions.clone()
    };
    log::info!("driving the {:?} calendar at {size:?}", args.variant);

    let events: EventLog = Rc::default();
    let on_select = {
        let events = Rc::clone(&events);
        move |date: CalendarDate| events.borrow_mut().push(format!("selected {date}"))
    };

    match args.variant {
        Variant::Paged => {
            let mut widget = PagedCalendar::with_today(RecordingHost::new(), today);
            let mut style = widget.style().clone();
            overrides.apply_paged(&mut style);
            widget.set_style(style);
            widget.set_on_date_select(on_select);
            driver(widget, size, &events).run(&actions);
        }
        Variant::Swipe => {
            let mut widget = SwipeCalendar::with_today(RecordingHost::new(), today);
            let mut style = widget.style().clone();
            overrides.apply_swipe(&mut style);
            widget.set_style(style);
            widget.set_on_date_select(on_select);
            let months = Rc::clone(&events);
            widget.set_on_month_change(move |first: CalendarDate| {
                months
                    .borrow_mut()
                    .push(format!("month changed to {}", first.title()));
            });
            driver(widget, size, &events).run(&actions);
        }
        Variant::Static => {
            let mut style = understory_calendar::StaticStyle::default();
            overrides.apply_static(&mut style);
            let widget = StaticCalendar::with_style(RecordingHost::new(), style);
            driver(widget, size, &events).run(&actions);
        }
    }
    Ok(())
}

fn driver<W: Driven>(widget: W, size: Size, events: &EventLog) -> Driver<'_, W> {
    Driver {
        widget,
        size,
        now_ms: 0,
        seen_layouts: 0,
        seen_redraws: 0,
        events,
    }
}
