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

use crate::render::context::RenderContext;
use crate::render::frame::RenderedFrame;

use super::{fill_band, EffectTypeRenderer};

/// Grows a band outward from the centre of the prop until it reaches both ends.
pub struct SplitEffect;

impl EffectTypeRenderer for SplitEffect {
    fn render(&self, ctx: &RenderContext<'_>, frame: &mut RenderedFrame<'_>) {
        let centre = frame.led_count() as f32 / 2.0;
        let half_width = centre * ctx.progress();
        fill_band(ctx, frame, centre - half_width, centre + half_width);
    }
}
