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

/// Fills pixels with the single `COLOR` parameter (white if absent).
pub struct SolidFill;

impl FillFunction for SolidFill {
    fn fill(&self, ctx: &RenderContext<'_>, led: &mut Led<'_>, alpha: f32) {
        let color = ctx
            .effect
            .fill
            .params
            .color(param_names::COLOR, Color::WHITE);
        led.add_color(color.adjust_brightness(alpha));
    }
}
