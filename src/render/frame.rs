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

use crate::model::color::{scale_channel, Color};

/// Bytes stored per LED (R, G, B).
pub const BYTES_PER_LED: usize = 3;

/// The rendered frames of one stage prop.
///
/// Frames are laid out back to back, each frame holding `led_count` LEDs of
/// [`BYTES_PER_LED`] bytes. Per-frame and per-LED views borrow from this buffer
/// and are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStagePropData {
    start_frame: i32,
    end_frame: i32,
    led_count: usize,
    data: Vec<u8>,
}

impl RenderedStagePropData {
    /// Allocates a zeroed buffer covering frames `start_frame..=end_frame`.
    ///
    /// Panics if `end_frame` is before `start_frame`.
    pub fn new(start_frame: i32, end_frame: i32, led_count: usize) -> Self {
        assert!(
            end_frame >= start_frame,
            "frame range {start_frame}..={end_frame} is empty"
        );
        let frame_count = (i64::from(end_frame) - i64::from(start_frame) + 1) as usize;

        RenderedStagePropData {
            start_frame,
            end_frame,
            led_count,
            data: vec![0; frame_count * led_count * BYTES_PER_LED],
        }
    }

    pub fn start_frame(&self) -> i32 {
        self.start_frame
    }

    pub fn end_frame(&self) -> i32 {
        self.end_frame
    }

    pub fn frame_count(&self) -> usize {
        (i64::from(self.end_frame) - i64::from(self.start_frame) + 1) as usize
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// The raw buffer, `frame_count × led_count × BYTES_PER_LED` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn frame_range(&self, frame_number: i32) -> std::ops::Range<usize> {
        assert!(
            (self.start_frame..=self.end_frame).contains(&frame_number),
            "frame {frame_number} is outside {}..={}",
            self.start_frame,
            self.end_frame
        );
        let stride = self.led_count * BYTES_PER_LED;
        let offset = (i64::from(frame_number) - i64::from(self.start_frame)) as usize * stride;
        offset..offset + stride
    }

    /// A mutable view of one frame. Panics if the frame lies outside the buffer.
    pub fn frame(&mut self, frame_number: i32) -> RenderedFrame<'_> {
        let range = self.frame_range(frame_number);
        RenderedFrame {
            frame_number,
            led_count: self.led_count,
            data: &mut self.data[range],
        }
    }

    /// The bytes of one frame. Panics if the frame lies outside the buffer.
    pub fn frame_data(&self, frame_number: i32) -> &[u8] {
        &self.data[self.frame_range(frame_number)]
    }

    /// The color of one LED on one frame.
    pub fn led_color(&self, frame_number: i32, led_number: usize) -> Color {
        assert!(
            led_number < self.led_count,
            "LED {led_number} is outside a {}-LED prop",
            self.led_count
        );
        let frame = self.frame_data(frame_number);
        let offset = led_number * BYTES_PER_LED;
        Color::new(frame[offset], frame[offset + 1], frame[offset + 2])
    }

    /// Scales every stored byte by `percent` / 100.
    pub fn scale_brightness(&mut self, percent: u8) {
        if percent >= 100 {
            return;
        }
        let factor = f32::from(percent) / 100.0;
        self.data
            .iter_mut()
            .for_each(|value| *value = scale_channel(*value, factor));
    }
}

/// A mutable view over one frame of a [`RenderedStagePropData`].
pub struct RenderedFrame<'a> {
    frame_number: i32,
    led_count: usize,
    data: &'a mut [u8],
}

impl RenderedFrame<'_> {
    pub fn frame_number(&self) -> i32 {
        self.frame_number
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// A view of a single LED. Panics if `led_number` is out of range.
    pub fn led(&mut self, led_number: usize) -> Led<'_> {
        assert!(
            led_number < self.led_count,
            "LED {led_number} is outside a {}-LED prop",
            self.led_count
        );
        let offset = led_number * BYTES_PER_LED;
        Led {
            led_number,
            data: &mut self.data[offset..offset + BYTES_PER_LED],
        }
    }
}

/// A mutable view over one LED on one frame.
pub struct Led<'a> {
    led_number: usize,
    data: &'a mut [u8],
}

impl Led<'_> {
    pub fn led_number(&self) -> usize {
        self.led_number
    }

    /// The color composited so far.
    pub fn color(&self) -> Color {
        Color::new(self.data[0], self.data[1], self.data[2])
    }

    /// Adds `color` on top of the existing value, saturating each channel.
    pub fn add_color(&mut self, color: Color) {
        let blended = self.color().saturating_add(color);
        self.data[0] = blended.r;
        self.data[1] = blended.g;
        self.data[2] = blended.b;
    }
}
