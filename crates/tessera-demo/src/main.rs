//! Demo binary that generates every procedural mesh and logs its statistics.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p tessera-demo -- --grid-size 16 --export-dir out` to also
//! write the meshes as OBJ files.

mod mesh_demos;
mod spline_demos;

use std::process::ExitCode;

use clap::Parser;
use tessera_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    tessera_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(config_dir = %config_dir.display(), "Starting tessera demo");

    let mut failed = false;

    let grid = mesh_demos::demonstrate_flat_grid(&config);
    let sphere = mesh_demos::demonstrate_cube_sphere(&config);
    for (result, stem) in [(grid, "grid"), (sphere, "cube_sphere")] {
        match result {
            Ok(mesh) => {
                if let Err(e) = mesh_demos::export_mesh(&config, &mesh, stem) {
                    error!("Failed to export {stem}: {e}");
                    failed = true;
                }
            }
            Err(e) => {
                error!("Failed to generate {stem}: {e}");
                failed = true;
            }
        }
    }

    mesh_demos::demonstrate_lattice_projection(&config);

    if let Err(e) = spline_demos::demonstrate_spline_sampling(&config) {
        error!("Spline demonstration failed: {e}");
        failed = true;
    }
    if let Err(e) = spline_demos::demonstrate_edit_history() {
        error!("Edit history demonstration failed: {e}");
        failed = true;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        info!("All demonstrations completed");
        ExitCode::SUCCESS
    }
}
