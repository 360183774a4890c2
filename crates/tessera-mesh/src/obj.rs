//! Wavefront OBJ export for inspecting generated meshes in external tools.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::mesh::Mesh;

/// Write `mesh` to `path` as an OBJ file whose object is called `name`.
///
/// # Errors
///
/// Returns any I/O error from creating or writing the file.
pub fn write_obj(mesh: &Mesh, path: &Path, name: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj_to(&mut writer, mesh, name)?;
    writer.flush()
}

/// Write `mesh` as OBJ text to any writer.
///
/// Positions and normals are always written; texture coordinates only when the
/// mesh carries UVs. Each submesh becomes an OBJ group named after its label.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_obj_to<W: Write>(writer: &mut W, mesh: &Mesh, name: &str) -> io::Result<()> {
    writeln!(writer, "# {}", mesh.name)?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(writer, "o {name}")?;

    for v in &mesh.vertices {
        let [x, y, z] = v.position;
        writeln!(writer, "v {x} {y} {z}")?;
    }
    for v in &mesh.vertices {
        let [x, y, z] = v.normal;
        writeln!(writer, "vn {x} {y} {z}")?;
    }
    let with_uv = mesh.attributes.uv;
    if with_uv {
        for v in &mesh.vertices {
            let [u, w] = v.uv;
            writeln!(writer, "vt {u} {w}")?;
        }
    }

    for sub in &mesh.submeshes {
        writeln!(writer, "g {}", sub.label)?;
        for tri in sub.triangles() {
            // OBJ indices are 1-based.
            let [a, b, c] = tri.map(|i| i + 1);
            if with_uv {
                writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
            } else {
                writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
            }
        }
    }
    Ok(())
}
