//! # Procedural Geometry Generation
//!
//! This module provides the procedural mesh used by the sphere demo,
//! eliminating the need for external model files.
//!
//! ## Usage
//!
//! ```rust
//! use clatter::geometry::generate_sphere;
//!
//! // Generate a unit sphere with 36 sectors and 18 stacks
//! let mesh = generate_sphere(1.0, 36, 18);
//! assert_eq!(mesh.vertex_count(), 37 * 19);
//! ```

pub mod sphere;

pub use sphere::generate_sphere;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Per-vertex colors (r, g, b), one per vertex
    pub colors: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle indices, counter-clockwise winding
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            colors: Vec::new(),
            tex_coords: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw bytes of the position buffer, for upload into a GPU vertex buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the per-vertex color buffer
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw bytes of the texture coordinate buffer
    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    /// Raw bytes of the index buffer
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
