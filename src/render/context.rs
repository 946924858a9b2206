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

use crate::model::{Effect, Repetition, Sequence, StageProp};
use crate::util::remap;

use super::fill::FillFunction;

/// Everything an effect renderer or fill function knows about the pixel
/// it is working on, apart from the frame buffer itself.
pub struct RenderContext<'a> {
    pub sequence: &'a Sequence,
    pub stage_prop: &'a StageProp,
    /// The effect as declared on its channel.
    pub effect: &'a Effect,
    /// The repetition of `effect` being drawn. Progress is measured against it.
    pub repetition: Repetition,
    /// The fill resolved from `effect.fill`.
    pub fill: &'a dyn FillFunction,
    pub frame_number: i32,
    /// LED count of the whole prop.
    pub led_count: usize,
}

impl RenderContext<'_> {
    /// Linear progress through the effect, 0.0 on its first frame and 1.0 on
    /// its last. One-frame effects sit at 0.5.
    pub fn linear_progress(&self) -> f32 {
        let (start, end) = (self.repetition.start_frame, self.repetition.end_frame);
        if start == end {
            return 0.5;
        }
        remap(
            self.frame_number as f32,
            start as f32,
            end as f32,
            0.0,
            1.0,
        )
    }

    /// Progress through the effect after the effect's easing is applied.
    pub fn progress(&self) -> f32 {
        self.effect.easing.apply(self.linear_progress())
    }

    /// Seconds elapsed since the start of the sequence.
    pub fn seconds(&self) -> f32 {
        self.frame_number as f32 / self.sequence.frames_per_second.max(1) as f32
    }
}
