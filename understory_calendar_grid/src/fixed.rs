// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed 31-slot layout used by the static calendar.

use crate::grid::{DAYS_PER_WEEK, GridCell};

/// Number of day slots in the fixed layout.
pub const FIXED_SLOTS: u32 = 31;

/// Number of rows the fixed layout spans.
pub const FIXED_ROWS: u32 = FIXED_SLOTS.div_ceil(DAYS_PER_WEEK);

/// Cell of `day` in the fixed layout, where day 1 is always in column 0.
///
/// This layout ignores the month entirely.
#[must_use]
pub fn fixed_cell(day: u32) -> Option<GridCell> {
    if !(1..=FIXED_SLOTS).contains(&day) {
        return None;
    }
    let slot = day - 1;
    Some(GridCell {
        row: slot / DAYS_PER_WEEK,
        column: slot % DAYS_PER_WEEK,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_every_seven_days() {
        assert_eq!(fixed_cell(1), Some(GridCell { row: 0, column: 0 }));
        assert_eq!(fixed_cell(7), Some(GridCell { row: 0, column: 6 }));
        assert_eq!(fixed_cell(8), Some(GridCell { row: 1, column: 0 }));
        assert_eq!(fixed_cell(31), Some(GridCell { row: 4, column: 2 }));
        assert_eq!(FIXED_ROWS, 5);
    }

    #[test]
    fn rejects_slots_outside_the_layout() {
        assert_eq!(fixed_cell(0), None);
        assert_eq!(fixed_cell(32), None);
    }
}
