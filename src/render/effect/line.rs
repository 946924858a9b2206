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

use crate::model::param_names;
use crate::render::context::RenderContext;
use crate::render::frame::RenderedFrame;
use crate::util::remap;

use super::{fill_band, EffectTypeRenderer};

/// Sweeps a band of light along the prop, entering before the first LED and
/// leaving past the last one.
///
/// Parameters:
///  - `LENGTH`: band length as a percentage of the prop (default 10).
pub struct LineEffect;

impl EffectTypeRenderer for LineEffect {
    fn render(&self, ctx: &RenderContext<'_>, frame: &mut RenderedFrame<'_>) {
        let led_count = frame.led_count() as f32;
        let length_percent = ctx.effect.params.decimal(param_names::LENGTH, 10.0);
        let length = led_count * length_percent.clamp(0.0, 100.0) / 100.0;

        let band_start = remap(ctx.progress(), 0.0, 1.0, -length, led_count);
        fill_band(ctx, frame, band_start, band_start + length);
    }
}
