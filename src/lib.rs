// src/lib.rs
//! Clatter
//!
//! Core of an interactive sphere collision demo: procedural UV-sphere mesh
//! generation and a one-dimensional elastic collision simulation, stepped
//! once per frame by an external rendering and UI driver.
//!
//! The driver owns timing, rendering, and input; this crate owns the mesh
//! buffers and the body state it mutates.

pub mod error;
pub mod geometry;
pub mod prelude;
pub mod simulation;

// Re-export main types for convenience
pub use error::ParameterError;
pub use simulation::SphereSimulation;

/// Creates a simulation with the default demo parameters
pub fn default() -> SphereSimulation {
    SphereSimulation::new()
}
