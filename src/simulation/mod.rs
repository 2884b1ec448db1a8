//! Simulation system
//!
//! Kinematics and collision model for the two-sphere demo: the bodies
//! themselves, the per-frame elastic collision step, and the lifecycle
//! state machine the control panel drives.

pub mod body;
pub mod collision;
pub mod state;

pub use body::{Body, Tessellation};
pub use collision::{elastic_velocities, resolve, step, CollisionResponse};
pub use state::{BodyId, Phase, SimulationParams, SphereSimulation};
