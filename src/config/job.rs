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
use std::collections::HashSet;
use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::model::{Sequence, SequenceChannel, StageProp};
use crate::render::{RenderSettings, RenderWindow, Renderer};

use super::error::ConfigError;

/// Everything needed to render part of a sequence.
#[derive(Debug, Deserialize)]
pub struct RenderJob {
    #[serde(default)]
    sequence: Sequence,
    #[serde(default)]
    stage_props: Vec<StageProp>,
    #[serde(default)]
    channels: Vec<SequenceChannel>,
    window: RenderWindow,
    #[serde(default)]
    settings: RenderSettings,
}

impl RenderJob {
    /// Parse a render job from a YAML file.
    pub fn deserialize(path: &Path) -> Result<RenderJob, ConfigError> {
        Ok(Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<RenderJob>()?)
    }

    /// Parse a render job from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<RenderJob, ConfigError> {
        Ok(Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize::<RenderJob>()?)
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn stage_props(&self) -> &[StageProp] {
        &self.stage_props
    }

    pub fn channels(&self) -> &[SequenceChannel] {
        &self.channels
    }

    pub fn window(&self) -> RenderWindow {
        self.window
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Checks the job for anything the renderer would refuse to draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.end_frame < self.window.start_frame {
            return Err(ConfigError::InvalidWindow {
                start_frame: self.window.start_frame,
                end_frame: self.window.end_frame,
            });
        }

        let mut seen = HashSet::new();
        for stage_prop in &self.stage_props {
            if !seen.insert(stage_prop.uuid.as_str()) {
                return Err(ConfigError::DuplicateStageProp(stage_prop.uuid.clone()));
            }
            validate_stage_prop(stage_prop)?;
        }

        for channel in &self.channels {
            for (index, effect) in channel.effects.iter().enumerate() {
                let reason = if effect.end_frame < effect.start_frame {
                    format!(
                        "ends at frame {} before it starts at {}",
                        effect.end_frame, effect.start_frame
                    )
                } else if effect.repetitions == 0 {
                    "repetitions must be at least 1".to_string()
                } else {
                    continue;
                };
                return Err(ConfigError::InvalidEffect {
                    channel: channel.name.clone(),
                    index,
                    reason,
                });
            }
        }

        Ok(())
    }

    /// A renderer over this job's window with its settings applied.
    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(
            &self.sequence,
            &self.channels,
            &self.stage_props,
            self.window,
        )
        .with_settings(self.settings.clone())
    }
}

fn validate_stage_prop(stage_prop: &StageProp) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidStageProp {
        uuid: stage_prop.uuid.clone(),
        reason: reason.to_string(),
    };

    // The uuid names the prop's output file.
    let safe_uuid = !stage_prop.uuid.is_empty()
        && !stage_prop.uuid.starts_with('.')
        && stage_prop
            .uuid
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !safe_uuid {
        return Err(invalid(
            "uuid may only contain letters, digits, '-', '_' and '.'",
        ));
    }
    if stage_prop.led_count == 0 {
        return Err(invalid("led_count must be at least 1"));
    }
    if stage_prop.brightness > 100 {
        return Err(invalid("brightness must be between 0 and 100"));
    }
    Ok(())
}
