//! Simulated sphere body
//!
//! A [`Body`] owns its kinematic state (position, axial velocity, visual
//! rotation) together with the mesh generated from its radius and
//! tessellation. The mesh is regenerated wholesale whenever the radius
//! changes; it is never patched vertex-by-vertex.

use crate::error::ParameterError;
use crate::geometry::{generate_sphere, Mesh};
use cgmath::{Vector3, Zero};

/// UV-sphere resolution: longitude (sector) and latitude (stack) subdivisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tessellation {
    /// Longitude subdivisions, at least 3
    pub sectors: u32,
    /// Latitude subdivisions, at least 2
    pub stacks: u32,
}

impl Tessellation {
    /// Create a tessellation, rejecting resolutions too coarse to form a sphere
    pub fn new(sectors: u32, stacks: u32) -> Result<Self, ParameterError> {
        if sectors < 3 {
            return Err(ParameterError::TooFewSectors(sectors));
        }
        if stacks < 2 {
            return Err(ParameterError::TooFewStacks(stacks));
        }
        Ok(Self { sectors, stacks })
    }
}

impl Default for Tessellation {
    /// The demo's fixed resolution: 36 sectors by 18 stacks
    fn default() -> Self {
        Self {
            sectors: 36,
            stacks: 18,
        }
    }
}

/// Extra spin applied on top of velocity/radius, tuned for visual appeal
const SPIN_SCALE: f32 = 2.0;

/// One simulated sphere: kinematic state plus its owned render mesh
#[derive(Debug, Clone)]
pub struct Body {
    radius: f32,
    tessellation: Tessellation,
    /// World-space center, advanced along X each running frame
    pub position: Vector3<f32>,
    /// Signed speed along the X axis
    pub velocity: f32,
    /// Accumulated heading in degrees, wrapped into [0, 360); visual only
    pub rotation: f32,
    mesh: Mesh,
}

impl Body {
    /// Create a body at the origin with the given radius and resolution
    ///
    /// Fails fast on a non-positive radius rather than producing a
    /// degenerate mesh and an undefined collision mass.
    pub fn new(radius: f32, tessellation: Tessellation) -> Result<Self, ParameterError> {
        validate_radius(radius)?;
        Ok(Self::build(radius, tessellation))
    }

    /// Construct from already-validated parameters
    pub(crate) fn build(radius: f32, tessellation: Tessellation) -> Self {
        Self {
            radius,
            tessellation,
            position: Vector3::zero(),
            velocity: 0.0,
            rotation: 0.0,
            mesh: generate_sphere(radius, tessellation.sectors, tessellation.stacks),
        }
    }

    /// Current radius; also the collision mass proxy
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Current mesh resolution
    pub fn tessellation(&self) -> Tessellation {
        self.tessellation
    }

    /// The generated mesh, ready for the rendering layer to upload
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Change the radius and regenerate the mesh before the next draw
    pub fn set_radius(&mut self, radius: f32) -> Result<(), ParameterError> {
        validate_radius(radius)?;
        self.radius = radius;
        self.rebuild();
        Ok(())
    }

    /// Regenerate the mesh from the current radius and tessellation
    ///
    /// Replaces the buffers wholesale; with unchanged parameters the result
    /// is bit-identical to the previous mesh.
    pub fn rebuild(&mut self) {
        log::debug!(
            "rebuilding sphere mesh: radius={} sectors={} stacks={}",
            self.radius,
            self.tessellation.sectors,
            self.tessellation.stacks
        );
        self.mesh = generate_sphere(self.radius, self.tessellation.sectors, self.tessellation.stacks);
    }

    /// Advance the position along the X axis by `velocity * dt`
    pub fn advance(&mut self, dt: f32) {
        self.position.x += self.velocity * dt;
    }

    /// Accumulate rolling spin proportional to `velocity / radius`
    ///
    /// Purely cosmetic; collision logic never reads the rotation.
    pub fn spin(&mut self, dt: f32) {
        if self.velocity != 0.0 {
            let delta = (self.velocity / self.radius * dt * SPIN_SCALE).to_degrees();
            self.rotation = (self.rotation + delta).rem_euclid(360.0);
        }
    }
}

fn validate_radius(radius: f32) -> Result<(), ParameterError> {
    if radius > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositiveRadius(radius))
    }
}
