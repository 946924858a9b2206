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

use std::collections::HashMap;

use serde::Deserialize;

use super::color::Color;

/// Well-known parameter names.
pub mod names {
    pub const COLOR: &str = "COLOR";
    pub const COLORS: &str = "COLORS";
    pub const BLEND_HARDNESS: &str = "BLEND_HARDNESS";
    pub const CYCLE_COUNT: &str = "CYCLE_COUNT";
    pub const CYCLES_PER_SECOND: &str = "CYCLES_PER_SECOND";
    pub const LENGTH: &str = "LENGTH";
}

/// A single named parameter value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Decimal(f32),
    Color(Color),
    Colors(Vec<Color>),
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Decimal(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Decimal(value as f32)
    }
}

impl From<Color> for ParamValue {
    fn from(value: Color) -> Self {
        ParamValue::Color(value)
    }
}

impl From<Vec<Color>> for ParamValue {
    fn from(value: Vec<Color>) -> Self {
        ParamValue::Colors(value)
    }
}

/// Named parameters attached to a fill or an effect. Names are case-insensitive.
///
/// Getters never fail: an absent parameter, or one holding the wrong kind of
/// value, yields the supplied default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, ParamValue>")]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl From<HashMap<String, ParamValue>> for Params {
    fn from(values: HashMap<String, ParamValue>) -> Self {
        Params {
            values: values
                .into_iter()
                .map(|(name, value)| (name.to_ascii_uppercase(), value))
                .collect(),
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these parameters with `name` set to `value`.
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.to_ascii_uppercase(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(&name.to_ascii_uppercase())
    }

    pub fn decimal(&self, name: &str, default: f32) -> f32 {
        match self.get(name) {
            Some(ParamValue::Decimal(value)) => *value,
            _ => default,
        }
    }

    pub fn color(&self, name: &str, default: Color) -> Color {
        match self.get(name) {
            Some(ParamValue::Color(color)) => *color,
            Some(ParamValue::Colors(colors)) => colors.first().copied().unwrap_or(default),
            _ => default,
        }
    }

    /// Returns the color list stored under `name`. A single color is treated as
    /// a one-element list. Empty lists are returned as-is; callers decide on
    /// their own fallback.
    pub fn colors(&self, name: &str) -> Option<&[Color]> {
        match self.get(name) {
            Some(ParamValue::Colors(colors)) => Some(colors),
            Some(ParamValue::Color(color)) => Some(std::slice::from_ref(color)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};

    use super::*;

    #[test]
    fn test_getters_fall_back_to_defaults() {
        let params = Params::new().with(names::COLOR, 5.0);

        assert_eq!(0.0, params.decimal(names::BLEND_HARDNESS, 0.0));
        // Wrong kind of value.
        assert_eq!(Color::WHITE, params.color(names::COLOR, Color::WHITE));
        assert_eq!(None, params.colors(names::COLORS));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let params = Params::new().with("blend_hardness", 50.0);
        assert_eq!(50.0, params.decimal(names::BLEND_HARDNESS, 0.0));
        assert_eq!(50.0, params.decimal("Blend_Hardness", 0.0));
    }

    #[test]
    fn test_single_color_is_a_color_list() {
        let params = Params::new().with(names::COLORS, Color::RED);
        assert_eq!(Some(&[Color::RED][..]), params.colors(names::COLORS));
    }

    #[test]
    fn test_deserialize() {
        let yaml = r##"
            colors: ["#ff0000", "#0000ff"]
            color: "#00ff00"
            blend_hardness: 50
            length: 12.5
        "##;

        let params: Params = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(
            Some(&[Color::RED, Color::BLUE][..]),
            params.colors(names::COLORS)
        );
        assert_eq!(Color::GREEN, params.color(names::COLOR, Color::WHITE));
        assert_eq!(50.0, params.decimal(names::BLEND_HARDNESS, 0.0));
        assert_eq!(12.5, params.decimal(names::LENGTH, 0.0));
    }

    #[test]
    fn test_deserialize_rejects_bad_colors() {
        let yaml = r##"
            colors: ["#ff0000", "not-a-color"]
        "##;

        let result: Result<Params, _> = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize();

        assert!(result.is_err());
    }
}
