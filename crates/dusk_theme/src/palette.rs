//! The two hardcoded palettes

use crate::theme::Theme;
use dusk_core::Color;

/// Colors for one theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteEntry {
    /// Full-screen fill behind everything
    pub background: Color,
    /// Fill of the circular panel holding the switch
    pub circle: Color,
    /// Label color
    pub text: Color,
}

/// Static mapping from [`Theme`] to its [`PaletteEntry`]
pub struct Palette;

impl Palette {
    pub fn light() -> PaletteEntry {
        PaletteEntry {
            background: Color::from_hex(0xF8F8F8),
            circle: Color::from_hex(0xFFFFFF),
            text: Color::from_hex(0x1E1E1E),
        }
    }

    pub fn dark() -> PaletteEntry {
        PaletteEntry {
            background: Color::from_hex(0x1E1E1E),
            circle: Color::from_hex(0x252525),
            text: Color::from_hex(0xF8F8F8),
        }
    }

    pub fn for_theme(theme: Theme) -> PaletteEntry {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex_values() {
        let light = Palette::light();
        assert_eq!(light.background.to_hex_string(), "#F8F8F8");
        assert_eq!(light.circle.to_hex_string(), "#FFFFFF");
        assert_eq!(light.text.to_hex_string(), "#1E1E1E");

        let dark = Palette::dark();
        assert_eq!(dark.background.to_hex_string(), "#1E1E1E");
        assert_eq!(dark.circle.to_hex_string(), "#252525");
        assert_eq!(dark.text.to_hex_string(), "#F8F8F8");
    }

    #[test]
    fn test_light_and_dark_swap_background_and_text() {
        assert_eq!(Palette::light().background, Palette::dark().text);
        assert_eq!(Palette::light().text, Palette::dark().background);
    }

    #[test]
    fn test_for_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), Palette::light());
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::dark());
    }
}
