//! Per-frame output colors

use crate::palette::PaletteEntry;
use dusk_core::Color;

/// The three colors painted on a given frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedStyle {
    pub background: Color,
    pub circle: Color,
    pub text: Color,
}

impl RenderedStyle {
    /// Blend every channel of every color independently by `t`.
    ///
    /// `t` is used as given; callers clamp it if they need in-range output.
    pub fn lerp(from: &PaletteEntry, to: &PaletteEntry, t: f32) -> Self {
        Self {
            background: Color::lerp(&from.background, &to.background, t),
            circle: Color::lerp(&from.circle, &to.circle, t),
            text: Color::lerp(&from.text, &to.text, t),
        }
    }
}

impl From<PaletteEntry> for RenderedStyle {
    fn from(entry: PaletteEntry) -> Self {
        Self {
            background: entry.background,
            circle: entry.circle,
            text: entry.text,
        }
    }
}
