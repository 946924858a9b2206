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

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{Effect, Repetition, Sequence, SequenceChannel, StageProp};

use super::context::RenderContext;
use super::effect::{EffectTypeRenderer, EffectTypeRenderers};
use super::error::RenderError;
use super::fill::{FillFunction, FillFunctions};
use super::frame::RenderedStagePropData;
use super::pairs::{make_pairs, ChannelPropPair};

/// An inclusive range of frames to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RenderWindow {
    pub start_frame: i32,
    pub end_frame: i32,
}

impl RenderWindow {
    /// Panics if `end_frame` is before `start_frame`.
    pub fn new(start_frame: i32, end_frame: i32) -> Self {
        assert!(
            end_frame >= start_frame,
            "render window {start_frame}..={end_frame} is empty"
        );
        RenderWindow {
            start_frame,
            end_frame,
        }
    }

    pub fn frame_count(&self) -> usize {
        (i64::from(self.end_frame) - i64::from(self.start_frame) + 1) as usize
    }

    /// Clips a repetition to this window. Returns `None` when nothing is left.
    pub fn clip(&self, repetition: &Repetition) -> Option<(i32, i32)> {
        let start_frame = i64::from(self.start_frame).max(repetition.start_frame);
        let end_frame = i64::from(self.end_frame).min(repetition.end_frame);
        if start_frame > end_frame {
            return None;
        }
        // Both lie inside the window.
        Some((start_frame as i32, end_frame as i32))
    }
}

/// Tuning for how a render is executed. Results never depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RenderSettings {
    /// Render props on a thread pool.
    #[serde(default)]
    pub parallel: bool,
    /// Pool size when rendering in parallel. Defaults to the CPU count.
    #[serde(default)]
    pub threads: Option<usize>,
}

/// The output of a render: one buffer per stage prop drawn on by at least one
/// channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub stage_props: HashMap<String, RenderedStagePropData>,
    pub start_frame: i32,
    pub frame_count: usize,
}

impl RenderResult {
    pub fn get(&self, stage_prop_uuid: &str) -> Option<&RenderedStagePropData> {
        self.stage_props.get(stage_prop_uuid)
    }

    /// Describes the rendered buffers without their contents.
    pub fn summary(&self) -> RenderSummary {
        RenderSummary {
            start_frame: self.start_frame,
            frame_count: self.frame_count,
            stage_props: self
                .stage_props
                .iter()
                .map(|(uuid, data)| {
                    (
                        uuid.clone(),
                        PropSummary {
                            led_count: data.led_count(),
                            bytes: data.data().len(),
                        },
                    )
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub start_frame: i32,
    pub frame_count: usize,
    pub stage_props: BTreeMap<String, PropSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropSummary {
    pub led_count: usize,
    pub bytes: usize,
}

/// Turns channels of effects into per-prop frame buffers for a window of frames.
pub struct Renderer<'a> {
    sequence: &'a Sequence,
    channel_prop_pairs: Vec<ChannelPropPair<'a>>,
    window: RenderWindow,
    effect_renderers: EffectTypeRenderers,
    fill_functions: FillFunctions,
    settings: RenderSettings,
}

impl<'a> Renderer<'a> {
    /// Panics if the window ends before it starts.
    pub fn new(
        sequence: &'a Sequence,
        channels: &'a [SequenceChannel],
        stage_props: &'a [StageProp],
        window: RenderWindow,
    ) -> Self {
        assert!(
            window.end_frame >= window.start_frame,
            "render window {}..={} is empty",
            window.start_frame,
            window.end_frame
        );
        Renderer {
            sequence,
            channel_prop_pairs: make_pairs(channels, stage_props),
            window,
            effect_renderers: EffectTypeRenderers::default(),
            fill_functions: FillFunctions::default(),
            settings: RenderSettings::default(),
        }
    }

    pub fn with_effect_renderers(mut self, effect_renderers: EffectTypeRenderers) -> Self {
        self.effect_renderers = effect_renderers;
        self
    }

    pub fn with_fill_functions(mut self, fill_functions: FillFunctions) -> Self {
        self.fill_functions = fill_functions;
        self
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Renders every channel over the window.
    ///
    /// Channels sharing a prop are composited in reverse declaration order, so
    /// the first-declared channel is drawn last and sits on top.
    pub fn render(&self) -> Result<RenderResult, RenderError> {
        let started = Instant::now();
        info!(
            start_frame = self.window.start_frame,
            end_frame = self.window.end_frame,
            channels = self.channel_prop_pairs.len(),
            parallel = self.settings.parallel,
            "Rendering sequence"
        );

        let stage_props = if self.settings.parallel {
            self.render_parallel()?
        } else {
            self.render_sequential()?
        };

        info!(
            stage_props = stage_props.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Render complete"
        );

        Ok(RenderResult {
            stage_props,
            start_frame: self.window.start_frame,
            frame_count: self.window.frame_count(),
        })
    }

    fn render_sequential(&self) -> Result<HashMap<String, RenderedStagePropData>, RenderError> {
        let mut rendered_props: HashMap<String, (&StageProp, RenderedStagePropData)> =
            HashMap::new();

        for pair in self.channel_prop_pairs.iter().rev() {
            let (_, data) = rendered_props
                .entry(pair.stage_prop.uuid.clone())
                .or_insert_with(|| (pair.stage_prop, self.allocate(pair.stage_prop)));
            self.render_channel(pair, data)?;
        }

        Ok(rendered_props
            .into_iter()
            .map(|(uuid, (stage_prop, mut data))| {
                data.scale_brightness(stage_prop.brightness);
                (uuid, data)
            })
            .collect())
    }

    fn render_parallel(&self) -> Result<HashMap<String, RenderedStagePropData>, RenderError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.settings.threads.unwrap_or_else(num_cpus::get))
            .thread_name(|i| format!("ledreel-render-{i}"))
            .build()?;
        let groups = self.composition_order();

        pool.install(|| {
            groups
                .par_iter()
                .map(|(stage_prop, pairs)| self.render_group(stage_prop, pairs))
                .collect()
        })
    }

    /// Renders every channel of one prop onto a fresh buffer.
    fn render_group(
        &self,
        stage_prop: &StageProp,
        pairs: &[&ChannelPropPair<'_>],
    ) -> Result<(String, RenderedStagePropData), RenderError> {
        let mut data = self.allocate(stage_prop);
        for pair in pairs {
            self.render_channel(pair, &mut data)?;
        }
        data.scale_brightness(stage_prop.brightness);
        Ok((stage_prop.uuid.clone(), data))
    }

    /// Pairs grouped by prop, each group in compositing order.
    fn composition_order(&self) -> Vec<(&'a StageProp, Vec<&ChannelPropPair<'a>>)> {
        let mut groups: Vec<(&StageProp, Vec<&ChannelPropPair>)> = Vec::new();
        let mut group_by_uuid: HashMap<&str, usize> = HashMap::new();

        for pair in self.channel_prop_pairs.iter().rev() {
            let index = *group_by_uuid
                .entry(pair.stage_prop.uuid.as_str())
                .or_insert_with(|| {
                    groups.push((pair.stage_prop, Vec::new()));
                    groups.len() - 1
                });
            groups[index].1.push(pair);
        }

        groups
    }

    fn allocate(&self, stage_prop: &StageProp) -> RenderedStagePropData {
        RenderedStagePropData::new(
            self.window.start_frame,
            self.window.end_frame,
            stage_prop.led_count,
        )
    }

    fn render_channel(
        &self,
        pair: &ChannelPropPair<'_>,
        data: &mut RenderedStagePropData,
    ) -> Result<(), RenderError> {
        debug!(
            channel = %pair.channel.name,
            stage_prop = %pair.stage_prop.uuid,
            effects = pair.channel.effects.len(),
            "Rendering channel"
        );

        for effect in &pair.channel.effects {
            self.render_effect(pair.stage_prop, data, effect)?;
        }
        Ok(())
    }

    fn render_effect(
        &self,
        stage_prop: &StageProp,
        data: &mut RenderedStagePropData,
        effect: &Effect,
    ) -> Result<(), RenderError> {
        let renderer = self.effect_renderers.get(&effect.effect_type)?;
        let fill = self.fill_functions.get(&effect.fill.fill_type)?;

        let RenderWindow {
            start_frame,
            end_frame,
        } = self.window;
        for repetition in effect.repetitions_within(start_frame, end_frame) {
            self.render_repetition(renderer, fill, stage_prop, data, effect, repetition);
        }
        Ok(())
    }

    fn render_repetition(
        &self,
        renderer: &dyn EffectTypeRenderer,
        fill: &dyn FillFunction,
        stage_prop: &StageProp,
        data: &mut RenderedStagePropData,
        effect: &Effect,
        repetition: Repetition,
    ) {
        let Some((start_frame, end_frame)) = self.window.clip(&repetition) else {
            return;
        };

        for frame_number in start_frame..=end_frame {
            let mut frame = data.frame(frame_number);
            let ctx = RenderContext {
                sequence: self.sequence,
                stage_prop,
                effect,
                repetition,
                fill,
                frame_number,
                led_count: frame.led_count(),
            };
            renderer.render(&ctx, &mut frame);
        }
    }
}
