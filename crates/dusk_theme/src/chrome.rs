//! System chrome that follows the discrete theme
//!
//! Unlike the palette colors these do not animate: they switch the moment the
//! theme changes.

use crate::theme::Theme;
use dusk_core::Color;

/// Foreground style of the status bar icons and text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Dark glyphs, for light backgrounds
    DarkContent,
    /// Light glyphs, for dark backgrounds
    LightContent,
}

impl StatusBarStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusBarStyle::DarkContent => "dark-content",
            StatusBarStyle::LightContent => "light-content",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusBar {
    pub style: StatusBarStyle,
    pub background: Color,
}

impl StatusBar {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                style: StatusBarStyle::DarkContent,
                background: Color::from_hex(0xF8F8F8),
            },
            Theme::Dark => Self {
                style: StatusBarStyle::LightContent,
                background: Color::from_hex(0x1E1E1E),
            },
        }
    }
}

/// Colors handed to the switch widget
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchColors {
    pub track_on: Color,
    pub track_off: Color,
    pub thumb: Color,
}

impl SwitchColors {
    pub fn track(&self, on: bool) -> Color {
        if on {
            self.track_on
        } else {
            self.track_off
        }
    }
}

impl Default for SwitchColors {
    fn default() -> Self {
        Self {
            // magenta at 20%; red and blue channels clamped to 255
            track_on: Color::from_rgba8(255, 0, 255, 0.2),
            track_off: Color::from_rgba8(0, 0, 0, 0.1),
            thumb: Color::from_rgba8(212, 22, 191, 0.8),
        }
    }
}
