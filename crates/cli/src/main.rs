#![deny(unsafe_code)]
//! CLI binary for the trail-engine particle-trail generator.
//!
//! Subcommands:
//! - `generate` — sample, filter, and integrate trails over a mask, write PNG
//! - `list` — print available mask filter modes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use trail_engine_core::{Extent, TrailConfig, TrailGenerator};
use trail_engine_render::{plot_trajectories, snapshot, soft_disc_mask, PlotStyle};

#[derive(Parser)]
#[command(name = "trail-engine", about = "Masked particle-trail generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate trails over a mask and write a PNG preview.
    Generate {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 800)]
        height: usize,

        /// Mask PNG path; a feathered synthetic disc when omitted.
        #[arg(short, long)]
        mask: Option<PathBuf>,

        /// Seed string; overrides the one in --options when set.
        #[arg(long)]
        seed: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "trails.png")]
        output: PathBuf,

        /// Generator options as a JSON record (camelCase keys).
        #[arg(long, default_value = "{}")]
        options: String,
    },
    /// List available mask filter modes.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let filters = trail_engine_core::MaskFilter::list_names();
            if cli.json {
                let info = serde_json::json!({ "filters": filters });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Filters:");
                println!("  {}", filters.join(", "));
            }
        }
        Command::Generate {
            width,
            height,
            mask,
            seed,
            output,
            options,
        } => {
            let options: serde_json::Value = serde_json::from_str(&options)
                .map_err(|e| CliError::Input(format!("invalid --options JSON: {e}")))?;

            let mut config = TrailConfig::from_json(&options);
            if let Some(seed) = seed {
                config.letter_or_shape_seed = seed;
            }

            let mask_buffer = match &mask {
                Some(path) => snapshot::read_mask_png(path)?,
                None => soft_disc_mask(width, height, 0.8, 0.3)?,
            };

            let canvas = Extent::new(width as f64, height as f64)?;
            let generator = TrailGenerator::new(config)?;
            let trajectories = generator.generate(&mask_buffer, canvas)?;

            let rgba = plot_trajectories(
                &trajectories,
                generator.config(),
                width,
                height,
                &PlotStyle::default(),
            )?;
            snapshot::write_png(width, height, &rgba, &output)?;

            let config = generator.config();
            if cli.json {
                let info = serde_json::json!({
                    "seed": config.letter_or_shape_seed,
                    "filter": config.filter().name(),
                    "width": width,
                    "height": height,
                    "frames": config.frames_quantity,
                    "trails": trajectories.len(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "generated {} trails ({width}x{height}, {} frames, seed \"{}\") -> {}",
                    trajectories.len(),
                    config.frames_quantity,
                    config.letter_or_shape_seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
