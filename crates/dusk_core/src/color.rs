//! Color type and parsing
//!
//! Colors are stored as straight (non-premultiplied) RGBA with `f32` channels
//! in `0.0..=1.0`. Blending is a plain per-channel linear mix; no color-space
//! conversion happens anywhere.

use crate::error::{ColorParseError, Result};
use std::fmt;
use std::str::FromStr;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build a color from 8-bit channels and a unit alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit channels (alpha included)
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when the color is not fully opaque
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Linear interpolation between two colors.
    ///
    /// Written as `from * (1 - t) + to * t` so that `t == 0.0` and `t == 1.0`
    /// reproduce the endpoints exactly.
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Color {
            r: mix(from.r, to.r),
            g: mix(from.g, to.g),
            b: mix(from.b, to.b),
            a: mix(from.a, to.a),
        }
    }

    /// Channel-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Color, tolerance: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    ///
    /// Functional channels are clamped: `rgba(256, 0, 256, 0.2)` is read as
    /// `rgba(255, 0, 255, 0.2)`.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex_digits(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower.strip_prefix("rgba(") {
            return parse_function(s, body, 4);
        }
        if let Some(body) = lower.strip_prefix("rgb(") {
            return parse_function(s, body, 3);
        }

        Err(ColorParseError::Unsupported(s.to_string()))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

fn parse_hex_digits(hex: &str) -> Result<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigit(hex.to_string()));
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    match hex.len() {
        3 => {
            let nibble = |i: usize| {
                let v = u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
                v * 17
            };
            Ok(Color::from_rgba8(nibble(0), nibble(1), nibble(2), 1.0))
        }
        6 => Ok(Color::from_rgba8(byte(0), byte(2), byte(4), 1.0)),
        8 => Ok(Color::from_rgba8(
            byte(0),
            byte(2),
            byte(4),
            byte(6) as f32 / 255.0,
        )),
        n => Err(ColorParseError::InvalidHexLength(n)),
    }
}

fn parse_function(original: &str, body: &str, arity: usize) -> Result<Color> {
    let malformed = || ColorParseError::MalformedFunction(original.to_string());

    let inner = body.trim_end().strip_suffix(')').ok_or_else(malformed)?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != arity {
        return Err(malformed());
    }

    let number = |part: &str| {
        part.parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ColorParseError::InvalidChannel(part.to_string()))
    };
    let channel = |part: &str| number(part).map(|v| v.round().clamp(0.0, 255.0) as u8);

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if arity == 4 { number(parts[3])? } else { 1.0 };

    Ok(Color::from_rgba8(r, g, b, a))
}
