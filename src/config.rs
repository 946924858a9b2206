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
use std::path::Path;

use tracing::info;

mod error;
mod job;

pub use error::ConfigError;
pub use job::RenderJob;

/// Loads a render job from a YAML file and validates it.
pub fn load_job(path: &Path) -> Result<RenderJob, ConfigError> {
    let job = RenderJob::deserialize(path)?;
    job.validate()?;

    info!(
        path = %path.display(),
        sequence = %job.sequence().name,
        stage_props = job.stage_props().len(),
        channels = job.channels().len(),
        "Loaded render job"
    );
    Ok(job)
}
