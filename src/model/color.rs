// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Error returned when a color string can't be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    #[error("invalid hex color format '{0}', expected #rrggbb")]
    Format(String),
}

/// An RGB color as stored in a frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed 0xRRGGBB value.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Packs the color into a 0xRRGGBB value.
    pub const fn to_rgb(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Converts hue (0.0-1.0, wrapping), saturation and value (both 0.0-1.0) to RGB.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = (h - h.floor()) * 6.0;
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        // Each sector covers 60 degrees of the color wheel.
        let (r, g, b) = match h.floor() as u8 % 6 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: to_channel((r + m) * 255.0),
            g: to_channel((g + m) * 255.0),
            b: to_channel((b + m) * 255.0),
        }
    }

    /// Linearly interpolates towards `other`. A blend of 0.0 returns `self` and
    /// 1.0 returns `other`.
    pub fn interpolate(self, other: Color, blend: f32) -> Self {
        let channel = |from: u8, to: u8| -> u8 {
            let value = f32::from(from) + (f32::from(to) - f32::from(from)) * blend;
            // Normalised to the unit range and back before rounding. Rendered
            // frames depend on this exact f32 rounding sequence.
            to_channel(value / 255.0 * 255.0)
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Scales every channel by `brightness` (0.0-1.0).
    pub fn adjust_brightness(self, brightness: f32) -> Self {
        Self {
            r: scale_channel(self.r, brightness),
            g: scale_channel(self.g, brightness),
            b: scale_channel(self.b, brightness),
        }
    }

    /// Adds `other` channel-wise, saturating at 255.
    pub fn saturating_add(self, other: Color) -> Self {
        Self {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
        }
    }
}

/// Scales a single channel value, rounding half up.
pub(crate) fn scale_channel(value: u8, factor: f32) -> u8 {
    to_channel(f32::from(value) * factor)
}

/// Rounds half up and clamps into the channel range.
fn to_channel(value: f32) -> u8 {
    (f64::from(value) + 0.5).clamp(0.0, 255.0) as u8
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::Format(s.to_string()));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::Format(s.to_string()))
        };

        Ok(Color {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
