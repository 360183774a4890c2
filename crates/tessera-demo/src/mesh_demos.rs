//! Mesh generation demonstrations.

use std::path::PathBuf;

use tessera_config::Config;
use tessera_cubesphere::{CubeAxis, LatticeCoord, MAX_GRID_SIZE, lattice_to_sphere};
use tessera_mesh::{Mesh, MeshError, generate_cube_sphere, generate_flat_grid, write_obj};
use tracing::info;

/// Generates the configured flat grid and logs its statistics.
pub(crate) fn demonstrate_flat_grid(config: &Config) -> Result<Mesh, MeshError> {
    let (width, height) = (config.grid.width, config.grid.height);
    info!("Starting flat grid demonstration ({width}x{height})");

    let mesh = generate_flat_grid(width, height)?;
    mesh.validate()?;
    log_mesh_stats(&mesh);
    Ok(mesh)
}

/// Generates the configured cube sphere and logs per-axis triangle counts.
pub(crate) fn demonstrate_cube_sphere(config: &Config) -> Result<Mesh, MeshError> {
    let (grid_size, radius) = (config.cube_sphere.grid_size, config.cube_sphere.radius);
    info!("Starting cube sphere demonstration (grid_size={grid_size}, radius={radius})");

    let mesh = generate_cube_sphere(grid_size, radius)?;
    mesh.validate()?;
    log_mesh_stats(&mesh);

    for sub in &mesh.submeshes {
        info!(
            "  submesh '{}': {} triangles",
            sub.label,
            sub.triangle_count()
        );
    }

    let max_deviation = mesh
        .vertices
        .iter()
        .map(|v| (v.position().length() - radius).abs())
        .fold(0.0_f32, f32::max);
    info!("Max distance from sphere surface: {max_deviation:.2e}");
    Ok(mesh)
}

/// Projects every surface lattice point and reports how they split across the
/// three cube axes.
pub(crate) fn demonstrate_lattice_projection(config: &Config) {
    let grid_size = config.cube_sphere.grid_size.clamp(1, MAX_GRID_SIZE);
    info!("Starting lattice projection demonstration (grid_size={grid_size})");

    let mut axis_counts = [0u32; 3];
    let mut max_deviation: f64 = 0.0;
    for x in 0..=grid_size {
        for y in 0..=grid_size {
            for z in 0..=grid_size {
                let coord = LatticeCoord::from_u32(x, y, z);
                if !coord.is_on_surface(grid_size) {
                    continue;
                }
                let p = lattice_to_sphere(coord, grid_size);
                max_deviation = max_deviation.max((p.length() - 1.0).abs());
                axis_counts[CubeAxis::dominant(p) as usize] += 1;
            }
        }
    }

    let total: u32 = axis_counts.iter().sum();
    info!("Projected {total} surface points (max deviation: {max_deviation:.2e})");
    for axis in CubeAxis::ALL {
        info!("  dominant {}: {}", axis.label(), axis_counts[axis as usize]);
    }
}

/// Writes `mesh` to `<output_dir>/<stem>.obj` when export is enabled.
///
/// Returns the written path, or `None` if export is disabled.
pub(crate) fn export_mesh(
    config: &Config,
    mesh: &Mesh,
    stem: &str,
) -> std::io::Result<Option<PathBuf>> {
    if !config.export.enabled {
        return Ok(None);
    }
    std::fs::create_dir_all(&config.export.output_dir)?;
    let path = config.export.output_dir.join(format!("{stem}.obj"));
    write_obj(mesh, &path, stem)?;
    info!("Exported {} to {}", mesh.name, path.display());
    Ok(Some(path))
}

fn log_mesh_stats(mesh: &Mesh) {
    info!(
        "{}: {} vertices, {} triangles in {} submesh(es)",
        mesh.name,
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.submesh_count()
    );
    if let Some(bounds) = mesh.bounding_sphere() {
        info!(
            "  bounds: center {:?}, radius {:.3}",
            bounds.center, bounds.radius
        );
    }
}
