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
use crate::model::{
    effect_types, fill_types, param_names, Color, Effect, Fill, Params, Sequence,
    SequenceChannel, StageProp,
};
use crate::render::context::RenderContext;
use crate::render::fill::FillFunction;
use crate::render::frame::RenderedStagePropData;
use crate::render::{RenderWindow, Renderer};

pub(crate) const PROP_UUID: &str = "prop";

/// Runs a fill function over every LED of a fresh one-frame prop and returns
/// the resulting colors.
pub(crate) fn fill_prop(
    function: &dyn FillFunction,
    fill_type: &str,
    params: Params,
    led_count: usize,
    alpha: f32,
) -> Vec<Color> {
    let sequence = Sequence::default();
    let stage_prop = StageProp::new(PROP_UUID, led_count);
    let effect = Effect::new(effect_types::STATIC, 0, 0, Fill::new(fill_type, params));
    let mut data = RenderedStagePropData::new(0, 0, led_count);

    let mut frame = data.frame(0);
    let ctx = RenderContext {
        sequence: &sequence,
        stage_prop: &stage_prop,
        effect: &effect,
        repetition: effect.repetition(0),
        fill: function,
        frame_number: 0,
        led_count,
    };
    for led_number in 0..led_count {
        function.fill(&ctx, &mut frame.led(led_number), alpha);
    }

    frame_colors(&data, 0)
}

pub(crate) fn gradient_params(colors: Vec<Color>, hardness: f32) -> Params {
    Params::new()
        .with(param_names::COLORS, colors)
        .with(param_names::BLEND_HARDNESS, hardness)
}

pub(crate) fn solid(color: Color) -> Fill {
    Fill::new(
        fill_types::SOLID,
        Params::new().with(param_names::COLOR, color),
    )
}

/// Renders a single effect on a single prop over frames `0..frame_count`.
pub(crate) fn render_effect(
    effect: Effect,
    frame_count: i32,
    led_count: usize,
) -> RenderedStagePropData {
    let sequence = Sequence::default();
    let stage_props = vec![StageProp::new(PROP_UUID, led_count)];
    let channels = vec![SequenceChannel::new("channel", PROP_UUID, vec![effect])];

    let mut result = Renderer::new(
        &sequence,
        &channels,
        &stage_props,
        RenderWindow::new(0, frame_count - 1),
    )
    .render()
    .expect("render failed");

    result
        .stage_props
        .remove(PROP_UUID)
        .expect("prop was not rendered")
}

pub(crate) fn frame_colors(data: &RenderedStagePropData, frame_number: i32) -> Vec<Color> {
    (0..data.led_count())
        .map(|led_number| data.led_color(frame_number, led_number))
        .collect()
}

/// Asserts every frame of `data` against rows of `0xRRGGBB` values.
pub(crate) fn assert_rendered_frames<const N: usize>(
    data: &RenderedStagePropData,
    expected: &[[u32; N]],
) {
    assert_eq!(expected.len(), data.frame_count(), "frame count");
    assert_eq!(N, data.led_count(), "LED count");

    for (index, expected_frame) in expected.iter().enumerate() {
        let frame_number = data.start_frame() + index as i32;
        let actual: Vec<u32> = frame_colors(data, frame_number)
            .into_iter()
            .map(Color::to_rgb)
            .collect();
        assert_eq!(
            expected_frame.as_slice(),
            actual.as_slice(),
            "frame {frame_number}:\n expected {}\n   actual {}",
            hex(expected_frame),
            hex(&actual)
        );
    }
}

fn hex(values: &[u32]) -> String {
    values
        .iter()
        .map(|value| format!("{value:06X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
