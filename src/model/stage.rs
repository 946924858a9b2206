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

use serde::Deserialize;

use super::effect::Effect;

fn default_brightness() -> u8 {
    100
}

fn default_frames_per_second() -> u32 {
    60
}

/// A physical run of addressable LEDs (arch, ring, line, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StageProp {
    /// Stable unique identifier.
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    pub led_count: usize,
    /// Output brightness, 0-100.
    #[serde(default = "default_brightness")]
    pub brightness: u8,
}

impl StageProp {
    pub fn new(uuid: &str, led_count: usize) -> Self {
        StageProp {
            uuid: uuid.to_string(),
            name: uuid.to_string(),
            led_count,
            brightness: default_brightness(),
        }
    }

    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }
}

/// A named track of effects targeting one stage prop.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceChannel {
    #[serde(default)]
    pub name: String,
    pub stage_prop_uuid: String,
    #[serde(default)]
    pub effects: Vec<Effect>,
}

impl SequenceChannel {
    pub fn new(name: &str, stage_prop_uuid: &str, effects: Vec<Effect>) -> Self {
        SequenceChannel {
            name: name.to_string(),
            stage_prop_uuid: stage_prop_uuid.to_string(),
            effects,
        }
    }
}

/// Sequence-wide metadata handed through to effect renderers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sequence {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_frames_per_second")]
    pub frames_per_second: u32,
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence {
            name: String::new(),
            frames_per_second: default_frames_per_second(),
        }
    }
}

impl Sequence {
    pub fn new(name: &str, frames_per_second: u32) -> Self {
        Sequence {
            name: name.to_string(),
            frames_per_second,
        }
    }
}
