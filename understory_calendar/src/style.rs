// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors, text sizes and labels of the calendar widgets.

use chrono::Weekday;
use peniko::Color;

/// Converts a packed `0xAARRGGBB` value to a [`Color`].
#[must_use]
pub fn argb(value: u32) -> Color {
    let [a, r, g, b] = value.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}

/// Weekdays in display order, Sunday first.
pub fn weekdays() -> impl Iterator<Item = Weekday> {
    core::iter::successors(Some(Weekday::Sun), |day| {
        (*day != Weekday::Sat).then(|| day.succ())
    })
}

/// Single-letter weekday labels, `S M T W T F S`.
#[must_use]
pub fn weekday_initials() -> Vec<String> {
    weekdays()
        .map(|day| day.to_string().chars().take(1).collect())
        .collect()
}

/// Short lowercase weekday labels, `sun mon tue wed thu fri sat`.
#[must_use]
pub fn weekday_abbreviations() -> Vec<String> {
    weekdays().map(|day| day.to_string().to_lowercase()).collect()
}

/// Appearance of a [`PagedCalendar`](crate::PagedCalendar).
#[derive(Clone, Debug, PartialEq)]
pub struct PagedStyle {
    /// Title and arrow color.
    pub title_color: Color,
    /// Weekday label, divider and ordinary day color.
    pub day_color: Color,
    /// Color of today's number.
    pub today_color: Color,
    /// Number color of the selected day.
    pub selected_text_color: Color,
    /// Circle behind the selected day.
    pub selected_background_color: Color,
    /// Day color while all dates are disabled.
    pub disabled_color: Color,
    /// Text size in scale-independent pixels.
    pub text_size_sp: f64,
}

impl Default for PagedStyle {
    fn default() -> Self {
        Self {
            title_color: argb(0xFF000000),
            day_color: argb(0xFF555555),
            today_color: argb(0xFFFF0000),
            selected_text_color: argb(0xFFEEEEEE),
            selected_background_color: argb(0xFFF44336),
            disabled_color: argb(0xFFAAAAAA),
            text_size_sp: 14.0,
        }
    }
}

/// Appearance of a [`SwipeCalendar`](crate::SwipeCalendar).
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeStyle {
    /// Title and arrow color.
    pub header_color: Color,
    /// Weekday label, divider and ordinary day color.
    pub day_color: Color,
    /// Color of today's number.
    pub current_day_color: Color,
    /// Number color of the selected day.
    pub selected_text_color: Color,
    /// Circle behind the selected day.
    pub selected_background_color: Color,
    /// Text size in scale-independent pixels.
    pub text_size_sp: f64,
}

impl Default for SwipeStyle {
    fn default() -> Self {
        Self {
            header_color: argb(0xFF000000),
            day_color: argb(0xFF555555),
            current_day_color: argb(0xFFFF0000),
            selected_text_color: argb(0xFFEEEEEE),
            selected_background_color: argb(0xFFF44336),
            text_size_sp: 14.0,
        }
    }
}

/// Appearance of a [`StaticCalendar`](crate::StaticCalendar).
///
/// Sizes are raw pixels; this variant does not scale text.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticStyle {
    /// Header fill.
    pub header_background: Color,
    /// Weekday label color.
    pub header_text_color: Color,
    /// Body fill.
    pub body_background: Color,
    /// Day number color.
    pub day_color: Color,
    /// Text size in pixels.
    pub text_size: f64,
    /// Space above and below each line of text.
    pub vertical_padding: f64,
    /// Header labels, spread evenly across the width.
    pub weekday_labels: Vec<String>,
}

impl Default for StaticStyle {
    fn default() -> Self {
        Self {
            header_background: argb(0xFF181818),
            header_text_color: argb(0xFFEEEEEE),
            body_background: argb(0xFF282828),
            day_color: argb(0xFFEEEEEE),
            text_size: 40.0,
            vertical_padding: 24.0,
            weekday_labels: weekday_abbreviations(),
        }
    }
}

impl StaticStyle {
    /// Height of the header band: one line of text plus padding on both sides.
    #[must_use]
    pub fn header_height(&self) -> f64 {
        self.text_size + 2.0 * self.vertical_padding
    }
}
