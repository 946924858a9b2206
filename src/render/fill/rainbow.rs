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

use super::FillFunction;

/// Spreads the hue wheel along the prop.
///
/// Parameters:
///  - `CYCLE_COUNT`: how many times the wheel repeats along the prop (default 1).
///  - `CYCLES_PER_SECOND`: how fast the wheel rotates over time (default 0).
pub struct RainbowFill;

impl FillFunction for RainbowFill {
    fn fill(&self, ctx: &RenderContext<'_>, led: &mut Led<'_>, alpha: f32) {
        let params = &ctx.effect.fill.params;
        let cycle_count = params.decimal(param_names::CYCLE_COUNT, 1.0);
        let cycles_per_second = params.decimal(param_names::CYCLES_PER_SECOND, 0.0);

        let position = led.led_number() as f32 / ctx.led_count as f32;
        let hue = position * cycle_count + ctx.seconds() * cycles_per_second;

        led.add_color(Color::from_hsv(hue, 1.0, 1.0).adjust_brightness(alpha));
    }
}
