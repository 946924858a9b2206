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

use tracing::warn;

use crate::model::{SequenceChannel, StageProp};

/// A channel paired with the stage prop it draws on.
#[derive(Debug, Clone, Copy)]
pub struct ChannelPropPair<'a> {
    pub channel: &'a SequenceChannel,
    pub stage_prop: &'a StageProp,
}

/// Pairs each channel with the prop whose uuid it names, keeping channel
/// declaration order. Channels naming an unknown prop are skipped.
pub fn make_pairs<'a>(
    channels: &'a [SequenceChannel],
    stage_props: &'a [StageProp],
) -> Vec<ChannelPropPair<'a>> {
    let props_by_uuid: HashMap<&str, &StageProp> = stage_props
        .iter()
        .map(|prop| (prop.uuid.as_str(), prop))
        .collect();

    channels
        .iter()
        .filter_map(|channel| {
            let stage_prop = props_by_uuid.get(channel.stage_prop_uuid.as_str()).copied();
            let Some(stage_prop) = stage_prop else {
                warn!(
                    channel = %channel.name,
                    stage_prop = %channel.stage_prop_uuid,
                    "Channel targets an unknown stage prop, skipping"
                );
                return None;
            };
            Some(ChannelPropPair {
                channel,
                stage_prop,
            })
        })
        .collect()
}
