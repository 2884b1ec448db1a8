//! # Clatter Prelude
//!
//! Convenient single import for the types a typical driver loop needs.
//!
//! ## Usage
//!
//! ```rust
//! use clatter::prelude::*;
//!
//! let mut sim = clatter::default();
//! sim.configure();
//! sim.toggle_running();
//! sim.update(1.0 / 60.0);
//! let mesh = sim.body(BodyId::A).mesh();
//! assert_eq!(mesh.vertex_count(), 37 * 19);
//! ```

// Re-export core simulation types
pub use crate::error::ParameterError;
pub use crate::simulation::{
    Body, BodyId, CollisionResponse, Phase, SimulationParams, SphereSimulation, Tessellation,
};

// Re-export geometry types
pub use crate::geometry::{generate_sphere, Mesh};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
