// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line of the calendar driver.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use structopt::StructOpt;
use understory_calendar::CalendarDate;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "calendar_driver",
    about = "Drives an Understory calendar widget headlessly and prints what it draws."
)]
pub(crate) struct Args {
    #[structopt(
        short = "v",
        long = "variant",
        default_value = "paged",
        help = "widget to drive: paged, swipe or static"
    )]
    pub(crate) variant: Variant,

    #[structopt(long = "width", default_value = "700", help = "widget width in pixels")]
    pub(crate) width: f64,

    #[structopt(
        long = "height",
        default_value = "600",
        help = "widget height in pixels"
    )]
    pub(crate) height: f64,

    #[structopt(
        short = "d",
        long = "date",
        help = "day to treat as today, as YYYY-MM-DD",
        parse(try_from_str = parse_date)
    )]
    pub(crate) today: Option<CalendarDate>,

    #[structopt(
        short = "s",
        long = "style",
        help = "path to a TOML style file",
        parse(from_os_str)
    )]
    pub(crate) style: Option<PathBuf>,

    #[structopt(
        short = "a",
        long = "action",
        help = "gesture to perform: tap:X,Y, hold:X,Y, drag:X0,Y,X1 or draw; repeatable"
    )]
    pub(crate) actions: Vec<Action>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub(crate) log_file: Option<PathBuf>,
}

/// Which widget to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Variant {
    Paged,
    Swipe,
    Static,
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paged" => Ok(Self::Paged),
            "swipe" => Ok(Self::Swipe),
            "static" => Ok(Self::Static),
            other => Err(ParseError(format!("unknown variant '{other}'"))),
        }
    }
}

/// One scripted step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Action {
    /// Quick press and release.
    Tap { x: f64, y: f64 },
    /// Press and release after a full second.
    Hold { x: f64, y: f64 },
    /// Horizontal drag from `x0` to `x1` at height `y`.
    Drag { x0: f64, y: f64, x1: f64 },
    /// A draw pass.
    Draw,
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "draw" {
            return Ok(Self::Draw);
        }
        let (kind, coords) = s
            .split_once(':')
            .ok_or_else(|| ParseError(format!("expected KIND:COORDS in '{s}'")))?;
        let coords = coords
            .split(',')
            .map(|c| c.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError(format!("bad coordinate in '{s}': {e}")))?;
        match (kind, coords.as_slice()) {
            ("tap", &[x, y]) => Ok(Self::Tap { x, y }),
            ("hold", &[x, y]) => Ok(Self::Hold { x, y }),
            ("drag", &[x0, y, x1]) => Ok(Self::Drag { x0, y, x1 }),
            _ => Err(ParseError(format!("unrecognized action '{s}'"))),
        }
    }
}

/// Rejected command line value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseError {}

fn parse_date(s: &str) -> Result<CalendarDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map(CalendarDate::from)
}
