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

use serde::Deserialize;

fn default_percent() -> f32 {
    50.0
}

/// Easing curves applied to an effect's linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Easing {
    #[default]
    Linear,
    /// Holds a fixed progress for the whole effect.
    Constant {
        #[serde(default = "default_percent")]
        percent: f32,
    },
    QuadIn,
    QuadOut,
    QuadInOut,
    SineInOut,
}

impl Easing {
    /// Maps linear progress (0.0-1.0) to eased progress (0.0-1.0).
    pub fn apply(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::Constant { percent } => (percent / 100.0).clamp(0.0, 1.0),
            Easing::QuadIn => p * p,
            Easing::QuadOut => 1.0 - (1.0 - p) * (1.0 - p),
            Easing::QuadInOut => {
                if p < 0.5 {
                    2.0 * p * p
                } else {
                    1.0 - 2.0 * (1.0 - p) * (1.0 - p)
                }
            }
            Easing::SineInOut => 0.5 - 0.5 * (p * std::f32::consts::PI).cos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};

    use super::*;

    fn assert_close(expected: f32, actual: f32) {
        assert!(
            (expected - actual).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_linear_is_identity() {
        for i in 0..=10 {
            let p = i as f32 / 10.0;
            assert_eq!(p, Easing::Linear.apply(p));
        }
    }

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::SineInOut,
        ] {
            assert_close(0.0, easing.apply(0.0));
            assert_close(1.0, easing.apply(1.0));
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert_close(0.25, Easing::QuadIn.apply(0.5));
        assert_close(0.75, Easing::QuadOut.apply(0.5));
        assert_close(0.5, Easing::QuadInOut.apply(0.5));
        assert_close(0.125, Easing::QuadInOut.apply(0.25));
        assert_close(0.5, Easing::SineInOut.apply(0.5));
    }

    #[test]
    fn test_constant() {
        let easing = Easing::Constant { percent: 30.0 };
        assert_close(0.3, easing.apply(0.0));
        assert_close(0.3, easing.apply(1.0));
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(1.0, Easing::Linear.apply(1.5));
        assert_eq!(0.0, Easing::QuadIn.apply(-0.5));
    }

    #[test]
    fn test_deserialize() {
        let parse = |yaml: &str| -> Easing {
            Config::builder()
                .add_source(File::from_str(yaml, FileFormat::Yaml))
                .build()
                .unwrap()
                .try_deserialize()
                .unwrap()
        };

        assert_eq!(Easing::Linear, parse("type: LINEAR"));
        assert_eq!(Easing::QuadInOut, parse("type: QUAD_IN_OUT"));
        assert_eq!(
            Easing::Constant { percent: 50.0 },
            parse("type: CONSTANT")
        );
        assert_eq!(
            Easing::Constant { percent: 80.0 },
            parse("type: CONSTANT\npercent: 80")
        );
    }
}
