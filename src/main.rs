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
use std::error::Error;
use std::path::PathBuf;

use clap::{crate_version, Parser, Subcommand};
use ledreel::config;
use ledreel::output;
use ledreel::render::{EffectTypeRenderers, FillFunctions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "An LED sequence renderer."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Loads and validates a render job.
    Verify {
        /// The path to the render job.
        job_path: PathBuf,
    },
    /// Renders a job's window and writes one buffer per stage prop.
    Render {
        /// The path to the render job.
        job_path: PathBuf,
        /// The directory to write buffers and the manifest to.
        output_path: PathBuf,
    },
    /// Lists the available effect and fill types.
    Effects {},
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Verify { job_path } => {
            let job = config::load_job(&job_path)?;
            let window = job.window();

            println!(
                "Sequence '{}' at {} fps, frames {}..={} ({} frames)",
                job.sequence().name,
                job.sequence().frames_per_second,
                window.start_frame,
                window.end_frame,
                window.frame_count()
            );
            println!("Stage props (count: {}):", job.stage_props().len());
            for stage_prop in job.stage_props() {
                println!(
                    "- {} ({}): {} LEDs, brightness {}%",
                    stage_prop.uuid, stage_prop.name, stage_prop.led_count, stage_prop.brightness
                );
            }
            println!("Channels (count: {}):", job.channels().len());
            for channel in job.channels() {
                println!(
                    "- {} -> {}: {} effects",
                    channel.name,
                    channel.stage_prop_uuid,
                    channel.effects.len()
                );
            }
        }
        Commands::Render {
            job_path,
            output_path,
        } => {
            let job = config::load_job(&job_path)?;
            let result = job.renderer().render()?;
            let manifest = output::write_render(&result, &output_path)?;

            println!(
                "Rendered {} frames for {} stage props into {}",
                manifest.summary.frame_count,
                manifest.files.len(),
                output_path.display()
            );
        }
        Commands::Effects {} => {
            println!("Effect types:");
            for code in EffectTypeRenderers::default().codes() {
                println!("- {code}");
            }
            println!("Fill types:");
            for code in FillFunctions::default().codes() {
                println!("- {code}");
            }
        }
    }

    Ok(())
}
