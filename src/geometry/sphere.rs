//! UV-sphere mesh generation
//!
//! Latitude/longitude tessellation with per-vertex colors derived from the
//! surface normal and an equirectangular UV layout.

use super::Mesh;
use std::f32::consts::PI;

/// Generate a UV sphere with the given radius and resolution
///
/// # Arguments
/// * `radius` - Sphere radius; must be positive (validated by the caller,
///   see [`crate::simulation::Body::new`])
/// * `sector_count` - Longitude subdivisions, clamped to at least 3
/// * `stack_count` - Latitude subdivisions, clamped to at least 2
///
/// Returns a sphere centered at the origin with the Z axis up. Vertices are
/// laid out stack-major: `(stack_count + 1) * (sector_count + 1)` vertices,
/// with the sector seam duplicated so the texture can wrap cleanly, and the
/// first and last rings collapsed onto the poles. Per-vertex color is the
/// unit normal remapped from [-1, 1] to [0, 1] per channel.
///
/// The output depends only on the arguments; identical inputs produce
/// bit-identical meshes.
pub fn generate_sphere(radius: f32, sector_count: u32, stack_count: u32) -> Mesh {
    let mut mesh = Mesh::new();

    let sectors = sector_count.max(3);
    let stacks = stack_count.max(2);

    let length_inv = 1.0 / radius;
    let sector_step = 2.0 * PI / sectors as f32;
    let stack_step = PI / stacks as f32;

    // Generate vertices
    for i in 0..=stacks {
        let stack_angle = PI / 2.0 - i as f32 * stack_step; // PI/2 down to -PI/2
        let xy = radius * stack_angle.cos(); // projected ring radius
        let z = radius * stack_angle.sin();

        for j in 0..=sectors {
            let sector_angle = j as f32 * sector_step; // 0 to 2*PI

            let x = xy * sector_angle.cos();
            let y = xy * sector_angle.sin();
            mesh.vertices.push([x, y, z]);

            // Normal-as-color: map each unit component from [-1, 1] to [0, 1]
            let nx = x * length_inv;
            let ny = y * length_inv;
            let nz = z * length_inv;
            mesh.colors
                .push([0.5 + 0.5 * nx, 0.5 + 0.5 * ny, 0.5 + 0.5 * nz]);

            let u = j as f32 / sectors as f32;
            let v = i as f32 / stacks as f32;
            mesh.tex_coords.push([u, v]);
        }
    }

    // Generate indices, two triangles per quad
    for i in 0..stacks {
        for j in 0..sectors {
            let first = i * (sectors + 1) + j;
            let second = first + sectors + 1;

            mesh.indices.push(first);
            mesh.indices.push(second);
            mesh.indices.push(first + 1);

            mesh.indices.push(second);
            mesh.indices.push(second + 1);
            mesh.indices.push(first + 1);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_vertex_and_index_counts() {
        for (sectors, stacks) in [(3, 2), (8, 6), (36, 18)] {
            let mesh = generate_sphere(1.0, sectors, stacks);
            let expected = ((stacks + 1) * (sectors + 1)) as usize;
            assert_eq!(mesh.vertices.len(), expected);
            assert_eq!(mesh.colors.len(), expected);
            assert_eq!(mesh.tex_coords.len(), expected);
            assert_eq!(mesh.indices.len(), (6 * stacks * sectors) as usize);
            assert_eq!(mesh.triangle_count(), (2 * stacks * sectors) as usize);
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        let mesh = generate_sphere(2.0, 12, 7);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_deterministic_output() {
        let a = generate_sphere(1.5, 36, 18);
        let b = generate_sphere(1.5, 36, 18);
        assert_eq!(a, b);
    }

    #[test]
    fn test_vertices_lie_on_surface() {
        let radius = 3.25;
        let mesh = generate_sphere(radius, 16, 9);
        for v in &mesh.vertices {
            let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((norm - radius).abs() < EPS, "vertex off surface: {norm}");
        }
    }

    #[test]
    fn test_pole_rings_collapse() {
        let radius = 1.0;
        let sectors = 10u32;
        let stacks = 5u32;
        let mesh = generate_sphere(radius, sectors, stacks);

        let ring = (sectors + 1) as usize;
        for j in 0..ring {
            let top = mesh.vertices[j];
            assert!(top[0].abs() < EPS && top[1].abs() < EPS);
            assert!((top[2] - radius).abs() < EPS);

            let bottom = mesh.vertices[(stacks as usize) * ring + j];
            assert!(bottom[0].abs() < EPS && bottom[1].abs() < EPS);
            assert!((bottom[2] + radius).abs() < EPS);
        }
    }

    #[test]
    fn test_uv_layout() {
        let sectors = 8u32;
        let stacks = 4u32;
        let mesh = generate_sphere(1.0, sectors, stacks);

        // First vertex of the first ring and last vertex of the last ring
        assert_eq!(mesh.tex_coords[0], [0.0, 0.0]);
        let last = *mesh.tex_coords.last().unwrap();
        assert_eq!(last, [1.0, 1.0]);

        for uv in &mesh.tex_coords {
            assert!((0.0..=1.0).contains(&uv[0]));
            assert!((0.0..=1.0).contains(&uv[1]));
        }
    }

    #[test]
    fn test_colors_in_unit_range() {
        let mesh = generate_sphere(4.0, 36, 18);
        for c in &mesh.colors {
            for channel in c {
                assert!((0.0 - EPS..=1.0 + EPS).contains(channel));
            }
        }
    }

    #[test]
    fn test_degenerate_resolution_clamped() {
        // Below-minimum resolution clamps to the 3x2 floor
        let mesh = generate_sphere(1.0, 1, 0);
        assert_eq!(mesh.vertex_count(), 4 * 3);
        assert_eq!(mesh.indices.len(), 6 * 3 * 2);
    }
}
