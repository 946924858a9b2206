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

use super::{fill_all, EffectTypeRenderer};

/// Fades the whole prop in to full brightness at the effect's midpoint, then
/// back out.
pub struct FlashEffect;

impl EffectTypeRenderer for FlashEffect {
    fn render(&self, ctx: &RenderContext<'_>, frame: &mut RenderedFrame<'_>) {
        let progress = ctx.progress();
        let alpha = if progress < 0.5 {
            progress * 2.0
        } else {
            (1.0 - progress) * 2.0
        };
        fill_all(ctx, frame, alpha);
    }
}
