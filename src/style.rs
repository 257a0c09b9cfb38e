//! Pure mapping from annotation colors to terminal styles.
//!
//! Deliberately a lookup function, not a cache: callers that render many
//! segments can memoize the result themselves. User highlights get a solid
//! background; auto-highlights get an underline in the theme color so the
//! two kinds stay visually distinct at a glance.

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

use crate::annotation::ColorTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Style for a user highlight.
pub fn style_for(color: ColorTag, mode: ThemeMode) -> ContentStyle {
    let background = match (color, mode) {
        (ColorTag::Yellow, ThemeMode::Light) => Color::Rgb { r: 250, g: 224, b: 120 },
        (ColorTag::Yellow, ThemeMode::Dark) => Color::Rgb { r: 130, g: 110, b: 20 },
        (ColorTag::Green, ThemeMode::Light) => Color::Rgb { r: 190, g: 235, b: 160 },
        (ColorTag::Green, ThemeMode::Dark) => Color::Rgb { r: 50, g: 105, b: 40 },
        (ColorTag::Blue, ThemeMode::Light) => Color::Rgb { r: 170, g: 215, b: 250 },
        (ColorTag::Blue, ThemeMode::Dark) => Color::Rgb { r: 35, g: 90, b: 140 },
        (ColorTag::Pink, ThemeMode::Light) => Color::Rgb { r: 250, g: 200, b: 220 },
        (ColorTag::Pink, ThemeMode::Dark) => Color::Rgb { r: 135, g: 55, b: 90 },
        (ColorTag::Orange, ThemeMode::Light) => Color::Rgb { r: 250, g: 205, b: 150 },
        (ColorTag::Orange, ThemeMode::Dark) => Color::Rgb { r: 145, g: 85, b: 25 },
    };
    let foreground = match mode {
        ThemeMode::Light => Color::Black,
        ThemeMode::Dark => Color::White,
    };

    ContentStyle {
        foreground_color: Some(foreground),
        background_color: Some(background),
        ..ContentStyle::default()
    }
}

/// Style for an AI auto-highlight. The theme color string comes from the
/// generation process; unknown names fall back to a neutral underline.
pub fn auto_style(theme_color: &str, mode: ThemeMode) -> ContentStyle {
    let foreground = match theme_color.to_lowercase().as_str() {
        "amber" => Color::Rgb { r: 215, g: 160, b: 50 },
        "violet" => Color::Rgb { r: 160, g: 120, b: 220 },
        "teal" => Color::Rgb { r: 60, g: 170, b: 165 },
        "rose" => Color::Rgb { r: 220, g: 110, b: 140 },
        "sage" => Color::Rgb { r: 130, g: 170, b: 110 },
        _ => match mode {
            ThemeMode::Light => Color::DarkGrey,
            ThemeMode::Dark => Color::Grey,
        },
    };

    ContentStyle {
        foreground_color: Some(foreground),
        attributes: Attributes::from(Attribute::Underlined),
        ..ContentStyle::default()
    }
}
