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
use crate::model::{effect_types, param_names, Color, Easing, Effect, Params};
use crate::render::tests::common::{frame_colors, render_effect, solid};

fn gray(values: &[u8]) -> Vec<Color> {
    values.iter().map(|v| Color::new(*v, *v, *v)).collect()
}

#[test]
fn test_static_lights_every_frame() {
    let data = render_effect(
        Effect::new(effect_types::STATIC, 0, 4, solid(Color::RED)),
        5,
        6,
    );

    for frame_number in 0..5 {
        assert_eq!(vec![Color::RED; 6], frame_colors(&data, frame_number));
    }
}

#[test]
fn test_flash_peaks_at_midpoint() {
    let data = render_effect(
        Effect::new(effect_types::FLASH, 0, 10, solid(Color::WHITE)),
        11,
        2,
    );

    let levels: Vec<u8> = (0..11).map(|frame| data.led_color(frame, 0).r).collect();
    assert_eq!(vec![0, 51, 102, 153, 204, 255, 204, 153, 102, 51, 0], levels);
}

#[test]
fn test_single_frame_flash_is_at_full_brightness() {
    let data = render_effect(
        Effect::new(effect_types::FLASH, 0, 0, solid(Color::WHITE)),
        1,
        3,
    );
    assert_eq!(vec![Color::WHITE; 3], frame_colors(&data, 0));
}

#[test]
fn test_line_sweeps_across_the_prop() {
    let data = render_effect(
        Effect::new(effect_types::LINE, 0, 10, solid(Color::WHITE)),
        11,
        10,
    );

    // The band enters before the first LED and leaves after the last.
    assert_eq!(vec![Color::BLACK; 10], frame_colors(&data, 0));
    assert_eq!(vec![Color::BLACK; 10], frame_colors(&data, 10));
    assert_eq!(
        gray(&[0, 0, 0, 0, 128, 128, 0, 0, 0, 0]),
        frame_colors(&data, 5)
    );

    // The brightest LED moves forward every frame.
    let brightest: Vec<usize> = (1..10)
        .map(|frame| {
            let colors = frame_colors(&data, frame);
            (0..10).max_by_key(|led| colors[*led].r).unwrap()
        })
        .collect();
    assert!(brightest.windows(2).all(|pair| pair[0] < pair[1]), "{brightest:?}");
    assert_eq!(0, brightest[0]);
    assert_eq!(9, brightest[8]);
}

#[test]
fn test_line_length_parameter() {
    let effect = Effect::new(effect_types::LINE, 0, 10, solid(Color::WHITE))
        .with_params(Params::new().with(param_names::LENGTH, 50.0));
    let data = render_effect(effect, 11, 10);

    // A five LED band centred on the prop at the midpoint.
    assert_eq!(
        gray(&[0, 0, 128, 255, 255, 255, 255, 128, 0, 0]),
        frame_colors(&data, 5)
    );
}

#[test]
fn test_split_grows_from_the_centre() {
    let data = render_effect(
        Effect::new(effect_types::SPLIT, 0, 4, solid(Color::WHITE)),
        5,
        10,
    );

    assert_eq!(vec![Color::BLACK; 10], frame_colors(&data, 0));
    assert_eq!(
        gray(&[0, 0, 0, 64, 255, 255, 64, 0, 0, 0]),
        frame_colors(&data, 1)
    );
    assert_eq!(
        gray(&[0, 0, 128, 255, 255, 255, 255, 128, 0, 0]),
        frame_colors(&data, 2)
    );
    assert_eq!(vec![Color::WHITE; 10], frame_colors(&data, 4));
}

#[test]
fn test_constant_easing_freezes_progress() {
    let effect = Effect::new(effect_types::LINE, 0, 10, solid(Color::WHITE))
        .with_easing(Easing::Constant { percent: 50.0 });
    let data = render_effect(effect, 11, 10);

    let midpoint = gray(&[0, 0, 0, 0, 128, 128, 0, 0, 0, 0]);
    for frame_number in 0..11 {
        assert_eq!(midpoint, frame_colors(&data, frame_number));
    }
}
