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
use crate::model::{effect_types, Color, Effect, Sequence, SequenceChannel, StageProp};
use crate::render::frame::RenderedStagePropData;
use crate::render::tests::common::{render_effect, solid, PROP_UUID};
use crate::render::{RenderWindow, Renderer};

fn render_window(effect: Effect, window: RenderWindow, led_count: usize) -> RenderedStagePropData {
    let sequence = Sequence::default();
    let props = vec![StageProp::new(PROP_UUID, led_count)];
    let channels = vec![SequenceChannel::new("channel", PROP_UUID, vec![effect])];

    let mut result = Renderer::new(&sequence, &channels, &props, window)
        .render()
        .unwrap();
    result.stage_props.remove(PROP_UUID).unwrap()
}

fn lit_frames(data: &RenderedStagePropData) -> Vec<i32> {
    (data.start_frame()..=data.end_frame())
        .filter(|frame| data.frame_data(*frame).iter().any(|b| *b != 0))
        .collect()
}

#[test]
fn test_repetitions_are_spaced() {
    let effect = Effect::new(effect_types::STATIC, 0, 1, solid(Color::RED)).with_repetitions(3, 2);
    let data = render_effect(effect, 12, 2);

    assert_eq!(vec![0, 1, 4, 5, 8, 9], lit_frames(&data));
}

#[test]
fn test_repetitions_before_the_window_are_clipped() {
    let effect =
        Effect::new(effect_types::STATIC, -6, -5, solid(Color::RED)).with_repetitions(5, 1);
    let data = render_window(effect, RenderWindow::new(0, 9), 2);

    assert_eq!(vec![0, 1, 3, 4, 6, 7], lit_frames(&data));
}

#[test]
fn test_overlapping_repetitions_add() {
    let effect = Effect::new(effect_types::STATIC, 0, 3, solid(Color::new(100, 0, 0)))
        .with_repetitions(2, -2);
    let data = render_effect(effect, 6, 1);

    let reds: Vec<u8> = (0..6).map(|frame| data.led_color(frame, 0).r).collect();
    assert_eq!(vec![100, 100, 200, 200, 100, 100], reds);
}

#[test]
fn test_zero_repetitions_draw_nothing() {
    let effect = Effect::new(effect_types::STATIC, 0, 3, solid(Color::RED)).with_repetitions(0, 0);
    let data = render_effect(effect, 4, 3);

    assert!(lit_frames(&data).is_empty());
}

#[test]
fn test_clipped_effect_keeps_its_own_progress() {
    let effect = Effect::new(effect_types::FLASH, 5, 20, solid(Color::WHITE));
    let data = render_window(effect, RenderWindow::new(10, 14), 1);

    assert_eq!(5, data.frame_count());
    let levels: Vec<u8> = (10..=14).map(|frame| data.led_color(frame, 0).r).collect();
    assert_eq!(vec![170, 204, 238, 238, 204], levels);
}

#[test]
fn test_effect_outside_window_writes_nothing() {
    let before = Effect::new(effect_types::STATIC, 0, 9, solid(Color::RED));
    let after = Effect::new(effect_types::STATIC, 30, 40, solid(Color::RED));

    for effect in [before, after] {
        let data = render_window(effect, RenderWindow::new(10, 29), 4);
        assert!(data.data().iter().all(|b| *b == 0));
    }
}

#[test]
fn test_effect_touching_window_edges() {
    let effect = Effect::new(effect_types::STATIC, 5, 10, solid(Color::RED));
    assert_eq!(
        vec![10],
        lit_frames(&render_window(effect.clone(), RenderWindow::new(10, 15), 1))
    );
    assert_eq!(
        vec![5],
        lit_frames(&render_window(effect, RenderWindow::new(0, 5), 1))
    );
}

#[test]
fn test_long_effect_with_many_repetitions() {
    let effect = Effect::new(effect_types::STATIC, 0, 999_999, solid(Color::new(100, 0, 0)))
        .with_repetitions(3000, 0);
    let data = render_window(effect, RenderWindow::new(0, 1), 1);

    assert_eq!(vec![0, 1], lit_frames(&data));
    assert_eq!(Color::new(100, 0, 0), data.led_color(0, 0));
    assert_eq!(Color::new(100, 0, 0), data.led_color(1, 0));
}

#[test]
fn test_repetition_count_past_the_frame_range() {
    let effect = Effect::new(effect_types::STATIC, 0, 9, solid(Color::RED))
        .with_repetitions(u32::MAX, i32::MAX);
    let data = render_window(effect, RenderWindow::new(0, 19), 1);

    assert_eq!((0..=9).collect::<Vec<_>>(), lit_frames(&data));
}

#[test]
fn test_late_repetition_matches_the_first() {
    let effect = Effect::new(effect_types::FLASH, 0, 9, solid(Color::WHITE));
    let first = render_window(effect.clone(), RenderWindow::new(0, 9), 2);
    let late = render_window(
        effect.with_repetitions(1_000_000, 0),
        RenderWindow::new(5_000_000, 5_000_009),
        2,
    );

    assert_eq!(first.data(), late.data());
}
