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

/// Holds the whole prop at full brightness for the effect's duration.
pub struct StaticEffect;

impl EffectTypeRenderer for StaticEffect {
    fn render(&self, ctx: &RenderContext<'_>, frame: &mut RenderedFrame<'_>) {
        fill_all(ctx, frame, 1.0);
    }
}
