// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation zones of a calendar header.

use crate::MonthStep;

/// How the header width is divided into navigation zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeaderSplit {
    /// Left and right thirds navigate, the middle third is inert.
    #[default]
    Thirds,
    /// Left and right quarters navigate, the middle half is inert.
    Quarters,
}

impl HeaderSplit {
    fn divisor(self) -> f64 {
        match self {
            Self::Thirds => 3.0,
            Self::Quarters => 4.0,
        }
    }
}

/// Zone of the header under a tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderZone {
    /// Left zone: go to the previous month.
    Previous,
    /// Middle zone: no action.
    Inert,
    /// Right zone: go to the next month.
    Next,
}

impl HeaderZone {
    /// Zone under horizontal position `x` of a header `width` pixels wide.
    ///
    /// Both outer zones include their inner border.
    #[must_use]
    pub fn at(x: f64, width: f64, split: HeaderSplit) -> Self {
        if width.is_nan() || width <= 0.0 {
            return Self::Inert;
        }
        let border = width / split.divisor();
        if x <= border {
            Self::Previous
        } else if x >= width - border {
            Self::Next
        } else {
            Self::Inert
        }
    }

    /// Month step triggered by this zone.
    #[must_use]
    pub fn step(self) -> Option<MonthStep> {
        match self {
            Self::Previous => Some(MonthStep::Previous),
            Self::Inert => None,
            Self::Next => Some(MonthStep::Next),
        }
    }
}
