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
use std::sync::Arc;

use crate::model::effect_types;
use crate::util::overlap;

use super::context::RenderContext;
use super::error::RenderError;
use super::frame::RenderedFrame;

mod flash;
mod line;
mod split;
mod static_effect;

pub use flash::FlashEffect;
pub use line::LineEffect;
pub use split::SplitEffect;
pub use static_effect::StaticEffect;

/// Renders one frame of one effect type onto a prop.
///
/// Implementations decide which LEDs are lit and how strongly, and hand each
/// lit LED to `ctx.fill`.
pub trait EffectTypeRenderer: Send + Sync {
    fn render(&self, ctx: &RenderContext<'_>, frame: &mut RenderedFrame<'_>);
}

/// Effect renderers keyed by effect type code.
#[derive(Clone)]
pub struct EffectTypeRenderers {
    renderers: HashMap<String, Arc<dyn EffectTypeRenderer>>,
}

impl EffectTypeRenderers {
    /// A registry with no renderers.
    pub fn empty() -> Self {
        EffectTypeRenderers {
            renderers: HashMap::new(),
        }
    }

    /// Registers `renderer` under `code`, replacing any previous registration.
    pub fn register(&mut self, code: &str, renderer: impl EffectTypeRenderer + 'static) {
        self.renderers
            .insert(code.to_ascii_uppercase(), Arc::new(renderer));
    }

    pub fn get(&self, code: &str) -> Result<&dyn EffectTypeRenderer, RenderError> {
        self.renderers
            .get(&code.to_ascii_uppercase())
            .map(|renderer| renderer.as_ref())
            .ok_or_else(|| RenderError::UnknownEffectType(code.to_string()))
    }

    /// Registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for EffectTypeRenderers {
    fn default() -> Self {
        let mut renderers = Self::empty();
        renderers.register(effect_types::FLASH, FlashEffect);
        renderers.register(effect_types::STATIC, StaticEffect);
        renderers.register(effect_types::LINE, LineEffect);
        renderers.register(effect_types::SPLIT, SplitEffect);
        renderers
    }
}

/// Fills every LED on the frame at the same alpha.
fn fill_all(ctx: &RenderContext<'_>, frame: &mut RenderedFrame<'_>, alpha: f32) {
    for led_number in 0..frame.led_count() {
        ctx.fill.fill(ctx, &mut frame.led(led_number), alpha);
    }
}

/// Fills each LED by how much of it falls within `band_start..band_end`,
/// measured in LED widths. LEDs outside the band are left untouched.
fn fill_band(
    ctx: &RenderContext<'_>,
    frame: &mut RenderedFrame<'_>,
    band_start: f32,
    band_end: f32,
) {
    for led_number in 0..frame.led_count() {
        let led_start = led_number as f32;
        let alpha = overlap(led_start, led_start + 1.0, band_start, band_end);
        if alpha > 0.0 {
            ctx.fill.fill(ctx, &mut frame.led(led_number), alpha);
        }
    }
}
