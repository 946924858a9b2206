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

/// Typed error for render job load and validation failures so callers can
/// tell a malformed file from a job that parses but cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config load/parse error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("render window ends at frame {end_frame}, before it starts at {start_frame}")]
    InvalidWindow { start_frame: i32, end_frame: i32 },

    #[error("stage prop '{0}' is declared more than once")]
    DuplicateStageProp(String),

    #[error("stage prop '{uuid}': {reason}")]
    InvalidStageProp { uuid: String, reason: String },

    #[error("channel '{channel}', effect {index}: {reason}")]
    InvalidEffect {
        channel: String,
        index: usize,
        reason: String,
    },
}
