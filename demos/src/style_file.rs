// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional TOML style overrides.
//!
//! Colors are packed `0xAARRGGBB` integers. Every field is optional and only
//! applies to the widgets that have a matching property:
//!
//! ```toml
//! text_size = 16.0
//! title_color = 0xFF202020
//! selected_background_color = 0xFF3366CC
//! weekday_labels = ["su", "mo", "tu", "we", "th", "fr", "sa"]
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use understory_calendar::{PagedStyle, StaticStyle, SwipeStyle, argb};

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StyleFile {
    pub(crate) text_size: Option<f64>,
    pub(crate) title_color: Option<u32>,
    pub(crate) day_color: Option<u32>,
    pub(crate) today_color: Option<u32>,
    pub(crate) selected_text_color: Option<u32>,
    pub(crate) selected_background_color: Option<u32>,
    pub(crate) disabled_color: Option<u32>,
    pub(crate) header_background: Option<u32>,
    pub(crate) header_text_color: Option<u32>,
    pub(crate) body_background: Option<u32>,
    pub(crate) vertical_padding: Option<f64>,
    pub(crate) weekday_labels: Option<Vec<String>>,
}

impl StyleFile {
    pub(crate) fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let style = toml::from_str(&text)?;
        log::info!("loaded style overrides from {}", path.display());
        Ok(style)
    }

    pub(crate) fn apply_paged(&self, style: &mut PagedStyle) {
        set(&mut style.text_size_sp, self.text_size);
        set_color(&mut style.title_color, self.title_color);
        set_color(&mut style.day_color, self.day_color);
        set_color(&mut style.today_color, self.today_color);
        set_color(&mut style.selected_text_color, self.selected_text_color);
        set_color(
            &mut style.selected_background_color,
            self.selected_background_color,
        );
        set_color(&mut style.disabled_color, self.disabled_color);
    }

    pub(crate) fn apply_swipe(&self, style: &mut SwipeStyle) {
        set(&mut style.text_size_sp, self.text_size);
        set_color(&mut style.header_color, self.title_color);
        set_color(&mut style.day_color, self.day_color);
        set_color(&mut style.current_day_color, self.today_color);
        set_color(&mut style.selected_text_color, self.selected_text_color);
        set_color(
            &mut style.selected_background_color,
            self.selected_background_color,
        );
    }

    pub(crate) fn apply_static(&self, style: &mut StaticStyle) {
        set(&mut style.text_size, self.text_size);
        set(&mut style.vertical_padding, self.vertical_padding);
        set_color(&mut style.header_background, self.header_background);
        set_color(&mut style.header_text_color, self.header_text_color);
        set_color(&mut style.body_background, self.body_background);
        set_color(&mut style.day_color, self.day_color);
        if let Some(labels) = &self.weekday_labels {
            style.weekday_labels.clone_from(labels);
        }
    }
}

fn set(slot: &mut f64, value: Option<f64>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn set_color(slot: &mut peniko::Color, value: Option<u32>) {
    if let Some(value) = value {
        *slot = argb(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors_and_applies_per_variant() {
        let file: StyleFile = toml::from_str(
            r#"
            text_size = 18.0
            title_color = 0xFF112233
            today_color = 0xFF00FF00
            weekday_labels = ["a", "b"]
            "#,
        )
        .unwrap();

        let mut paged = PagedStyle::default();
        file.apply_paged(&mut paged);
        assert_eq!(paged.text_size_sp, 18.0);
        assert_eq!(paged.title_color, argb(0xFF112233));
        assert_eq!(paged.today_color, argb(0xFF00FF00));
        assert_eq!(paged.day_color, PagedStyle::default().day_color);

        let mut swipe = SwipeStyle::default();
        file.apply_swipe(&mut swipe);
        assert_eq!(swipe.header_color, argb(0xFF112233));
        assert_eq!(swipe.current_day_color, argb(0xFF00FF00));

        let mut fixed = StaticStyle::default();
        file.apply_static(&mut fixed);
        assert_eq!(fixed.text_size, 18.0);
        assert_eq!(fixed.weekday_labels, ["a", "b"]);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<StyleFile>("colour = 1").is_err());
    }

    #[test]
    fn empty_file_changes_nothing() {
        let file: StyleFile = toml::from_str("").unwrap();
        assert_eq!(file, StyleFile::default());
        let mut paged = PagedStyle::default();
        file.apply_paged(&mut paged);
        assert_eq!(paged, PagedStyle::default());
    }
}
