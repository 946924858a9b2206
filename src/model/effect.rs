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

use std::cmp::Ordering;
use std::ops::Range;

use serde::Deserialize;

use super::easing::Easing;
use super::param::Params;

/// Built-in effect type codes.
pub mod effect_types {
    pub const FLASH: &str = "FLASH";
    pub const STATIC: &str = "STATIC";
    pub const LINE: &str = "LINE";
    pub const SPLIT: &str = "SPLIT";
}

/// Built-in fill type codes.
pub mod fill_types {
    pub const SOLID: &str = "SOLID";
    pub const GRADIENT: &str = "GRADIENT";
    pub const RAINBOW: &str = "RAINBOW";
}

fn default_repetitions() -> u32 {
    1
}

/// How an effect colors the pixels it lights.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fill {
    #[serde(rename = "type")]
    pub fill_type: String,
    #[serde(default)]
    pub params: Params,
}

impl Fill {
    pub fn new(fill_type: &str, params: Params) -> Self {
        Fill {
            fill_type: fill_type.to_string(),
            params,
        }
    }
}

/// A timed animation primitive on a channel. Frames are inclusive.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub start_frame: i32,
    pub end_frame: i32,
    #[serde(default)]
    pub easing: Easing,
    pub fill: Fill,
    /// Effect-type specific parameters (e.g. LINE length).
    #[serde(default)]
    pub params: Params,
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,
    /// Frames between the end of one repetition and the start of the next.
    /// Negative values overlap repetitions.
    #[serde(default)]
    pub repetition_spacing: i32,
}

impl Effect {
    pub fn new(effect_type: &str, start_frame: i32, end_frame: i32, fill: Fill) -> Self {
        Effect {
            effect_type: effect_type.to_string(),
            start_frame,
            end_frame,
            easing: Easing::default(),
            fill,
            params: Params::default(),
            repetitions: 1,
            repetition_spacing: 0,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32, spacing: i32) -> Self {
        self.repetitions = repetitions;
        self.repetition_spacing = spacing;
        self
    }

    /// Number of frames covered by a single repetition.
    pub fn duration(&self) -> i64 {
        i64::from(self.end_frame) - i64::from(self.start_frame) + 1
    }

    /// Frames from the start of one repetition to the start of the next.
    fn repetition_stride(&self) -> i64 {
        self.duration() + i64::from(self.repetition_spacing)
    }

    /// The frames covered by the `index`th repetition.
    ///
    /// Repetitions may run past the `i32` frame range, so the span is wider.
    /// Spans beyond `i64` saturate, which keeps them outside any window.
    pub fn repetition(&self, index: u32) -> Repetition {
        let start_frame = self
            .repetition_stride()
            .saturating_mul(i64::from(index))
            .saturating_add(i64::from(self.start_frame));

        Repetition {
            index,
            start_frame,
            end_frame: start_frame.saturating_add(self.duration() - 1),
        }
    }

    /// Every repetition of this effect, in order.
    pub fn repetitions(&self) -> impl Iterator<Item = Repetition> + '_ {
        (0..self.repetitions).map(|index| self.repetition(index))
    }

    /// The repetitions that cover at least one frame of
    /// `start_frame..=end_frame`, in order.
    ///
    /// The matching indices are solved for directly, so the cost does not
    /// depend on the repetition count.
    pub fn repetitions_within(
        &self,
        start_frame: i32,
        end_frame: i32,
    ) -> impl Iterator<Item = Repetition> + '_ {
        self.overlapping_indices(start_frame, end_frame)
            .map(|index| self.repetition(index))
    }

    fn overlapping_indices(&self, start_frame: i32, end_frame: i32) -> Range<u32> {
        if self.repetitions == 0 || self.duration() <= 0 || end_frame < start_frame {
            return 0..0;
        }

        let (window_start, window_end) = (i64::from(start_frame), i64::from(end_frame));
        let (first_start, first_end) = (i64::from(self.start_frame), i64::from(self.end_frame));
        let stride = self.repetition_stride();

        // Repetition k covers first_start + k * stride ..= first_end + k * stride.
        let (first, last) = match stride.cmp(&0) {
            Ordering::Greater => (
                div_ceil(window_start - first_end, stride),
                (window_end - first_start).div_euclid(stride),
            ),
            Ordering::Less => (
                div_ceil(first_start - window_end, -stride),
                (first_end - window_start).div_euclid(-stride),
            ),
            Ordering::Equal if first_start <= window_end && first_end >= window_start => {
                (0, i64::MAX)
            }
            Ordering::Equal => return 0..0,
        };

        let first = first.max(0);
        let last = last.min(i64::from(self.repetitions) - 1);
        if first > last {
            return 0..0;
        }
        // Both bounds lie within 0..repetitions.
        (first as u32)..(last as u32 + 1)
    }
}

/// One time-shifted occurrence of an [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    pub index: u32,
    pub start_frame: i64,
    pub end_frame: i64,
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    -(-numerator).div_euclid(denominator)
}
