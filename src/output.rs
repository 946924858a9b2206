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
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::render::{RenderResult, RenderSummary};

/// Name of the manifest written alongside the prop buffers.
pub const MANIFEST_FILE: &str = "render.json";

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("unable to write render output: {0}")]
    Io(#[from] io::Error),

    #[error("unable to encode render manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// The manifest describing a directory of rendered buffers.
#[derive(Debug, Serialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub summary: RenderSummary,
    /// Data file for each stage prop, relative to the manifest.
    pub files: BTreeMap<String, String>,
}

/// File name holding the raw frames of one stage prop.
pub fn data_file_name(stage_prop_uuid: &str) -> String {
    format!("{stage_prop_uuid}.bin")
}

/// Writes one raw buffer per stage prop plus a JSON manifest into `dir`,
/// creating it if needed.
pub fn write_render(result: &RenderResult, dir: &Path) -> Result<Manifest, OutputError> {
    fs::create_dir_all(dir)?;

    let mut files = BTreeMap::new();
    for (uuid, data) in &result.stage_props {
        let file_name = data_file_name(uuid);
        let path = dir.join(&file_name);
        fs::write(&path, data.data())?;
        debug!(
            stage_prop = %uuid,
            path = %path.display(),
            bytes = data.data().len(),
            "Wrote stage prop"
        );
        files.insert(uuid.clone(), file_name);
    }

    let manifest = Manifest {
        summary: result.summary(),
        files,
    };
    fs::write(
        dir.join(MANIFEST_FILE),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    info!(
        dir = %dir.display(),
        stage_props = manifest.files.len(),
        "Wrote render output"
    );
    Ok(manifest)
}
