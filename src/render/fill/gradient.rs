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

use crate::model::{param_names, Color};
use crate::render::context::RenderContext;
use crate::render::frame::Led;
use crate::util::remap;

use super::FillFunction;

const DEFAULT_COLORS: [Color; 1] = [Color::MAGENTA];

/// Fills pixels with an N-color gradient spread evenly along the prop.
///
/// Parameters:
///  - `COLORS`: the gradient stops. An empty or missing list renders magenta.
///  - `BLEND_HARDNESS`: 0-100. 0 blends linearly between stops, 100 steps
///    hard from one color to the next with no blending.
pub struct GradientFill;

impl FillFunction for GradientFill {
    fn fill(&self, ctx: &RenderContext<'_>, led: &mut Led<'_>, alpha: f32) {
        let params = &ctx.effect.fill.params;
        let colors = match params.colors(param_names::COLORS) {
            Some(colors) if !colors.is_empty() => colors,
            _ => &DEFAULT_COLORS,
        };

        let led_index_normalised = led.led_number() as f32 / ctx.led_count as f32;
        let gradient_progress = led_index_normalised * (colors.len() - 1) as f32;

        let color1 = colors[gradient_progress.floor() as usize];
        let color2 = colors[gradient_progress.ceil() as usize];

        let hardness = params.decimal(param_names::BLEND_HARDNESS, 0.0) / 100.0;
        let blend = blend(gradient_progress, hardness.clamp(0.0, 1.0));

        led.add_color(color1.interpolate(color2, blend).adjust_brightness(alpha));
    }
}

/// Windows the fractional gradient position by `hardness` (0.0-1.0).
///
/// The transition between two stops narrows as hardness grows, leaving flat
/// runs of each stop's pure color. At 1.0 the transition is a hard step at
/// the midpoint.
pub(crate) fn blend(gradient_progress: f32, hardness: f32) -> f32 {
    let blend = gradient_progress - gradient_progress.floor();
    let hardness_threshold = hardness / 2.0;

    let windowed = if hardness_threshold == 0.0 {
        blend
    } else if blend < hardness_threshold {
        0.0
    } else if blend < 0.5 {
        remap(blend, hardness_threshold, 0.5, 0.0, 0.5)
    } else if blend >= 1.0 - hardness_threshold {
        1.0
    } else {
        remap(
            blend,
            0.5,
            0.5 + hardness_threshold,
            0.5 + hardness_threshold,
            1.0,
        )
    };

    // Thresholds under 0.25 push the upper branch past the second stop.
    windowed.clamp(0.0, 1.0)
}
