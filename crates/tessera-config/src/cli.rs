//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Command-line arguments for the tessera tools.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tessera", about = "Procedural grid, cube sphere and spline generation")]
pub struct CliArgs {
    /// Flat grid cells along X.
    #[arg(long)]
    pub width: Option<u32>,

    /// Flat grid cells along Y.
    #[arg(long)]
    pub height: Option<u32>,

    /// Cube sphere subdivisions per edge.
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Cube sphere radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Spline direction samples per curve.
    #[arg(long)]
    pub steps_per_curve: Option<u32>,

    /// Write OBJ files into this directory (enables export).
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.grid.width = w;
        }
        if let Some(h) = args.height {
            self.grid.height = h;
        }
        if let Some(g) = args.grid_size {
            self.cube_sphere.grid_size = g;
        }
        if let Some(r) = args.radius {
            self.cube_sphere.radius = r;
        }
        if let Some(steps) = args.steps_per_curve {
            self.spline.steps_per_curve = steps;
        }
        if let Some(ref dir) = args.export_dir {
            self.export.enabled = true;
            self.export.output_dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
