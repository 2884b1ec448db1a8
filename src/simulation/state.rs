//! Simulation state machine
//!
//! Owns the two bodies and the running/paused lifecycle that the demo's
//! control panel drives. The external driver calls [`SphereSimulation::update`]
//! once per rendered frame; positions only advance while the simulation is
//! in the [`Phase::Running`] state.

use super::body::{Body, Tessellation};
use super::collision::{self, CollisionResponse};
use crate::error::ParameterError;
use cgmath::Vector3;

/// Height of the demo's ground plane; spheres rest their bottom on it
const GROUND_Y: f32 = -3.0;

/// Default start positions along the X axis
const START_X: [f32; 2] = [-20.0, -10.0];

const DEFAULT_RADIUS: f32 = 1.0;
const DEFAULT_SPEED: f32 = 0.3;

/// Identifies one of the two simulated bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyId {
    A,
    B,
}

impl BodyId {
    fn index(self) -> usize {
        match self {
            BodyId::A => 0,
            BodyId::B => 1,
        }
    }
}

/// Lifecycle of the simulation as driven by the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Parameters editable, no motion
    Idle,
    /// Parameters applied and meshes built; motion permitted but not started
    Configured,
    /// Positions advance and collisions resolve every frame
    Running,
    /// Motion frozen; collision logic not evaluated
    Paused,
}

/// Editable parameter set, mirroring the demo's slider panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Radii of bodies A and B
    pub radius: [f32; 2],
    /// Signed speeds of bodies A and B along the X axis
    pub speed: [f32; 2],
    /// Mesh resolution shared by both bodies
    pub tessellation: Tessellation,
    /// Post-collision sign policy
    pub response: CollisionResponse,
}

impl SimulationParams {
    /// Reject parameter sets the core cannot represent
    pub fn validate(&self) -> Result<(), ParameterError> {
        for r in self.radius {
            if r <= 0.0 {
                return Err(ParameterError::NonPositiveRadius(r));
            }
        }
        Tessellation::new(self.tessellation.sectors, self.tessellation.stacks)?;
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            radius: [DEFAULT_RADIUS; 2],
            speed: [DEFAULT_SPEED; 2],
            tessellation: Tessellation::default(),
            response: CollisionResponse::default(),
        }
    }
}

/// Two-sphere collision simulation with an explicit lifecycle
///
/// Replaces the free-standing globals of the original demo with a single
/// owned state value; the driver holds it, renders from it, and feeds it
/// frame times and UI edits.
#[derive(Debug, Clone)]
pub struct SphereSimulation {
    params: SimulationParams,
    bodies: [Body; 2],
    phase: Phase,
}

impl SphereSimulation {
    /// Create a simulation with the default demo parameters
    pub fn new() -> Self {
        Self::from_validated(SimulationParams::default())
    }

    /// Create a simulation with custom parameters, rejecting invalid ones
    pub fn with_params(params: SimulationParams) -> Result<Self, ParameterError> {
        params.validate()?;
        Ok(Self::from_validated(params))
    }

    fn from_validated(params: SimulationParams) -> Self {
        let mut sim = Self {
            params,
            bodies: [
                Body::build(params.radius[0], params.tessellation),
                Body::build(params.radius[1], params.tessellation),
            ],
            phase: Phase::Idle,
        };
        sim.place_bodies();
        sim
    }

    /// Reposition both bodies at their start marks, resting on the ground
    fn place_bodies(&mut self) {
        for (i, body) in self.bodies.iter_mut().enumerate() {
            body.position = Vector3::new(START_X[i], body.radius() + GROUND_Y, 0.0);
            body.velocity = self.params.speed[i];
            body.rotation = 0.0;
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current parameter set
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Both bodies, A first
    pub fn bodies(&self) -> &[Body; 2] {
        &self.bodies
    }

    /// Access one body for rendering
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.index()]
    }

    /// Slider input: change one body's speed
    ///
    /// Applies immediately; while running this changes the motion on the
    /// next frame.
    pub fn set_speed(&mut self, id: BodyId, speed: f32) {
        self.params.speed[id.index()] = speed;
        self.bodies[id.index()].velocity = speed;
    }

    /// Slider input: change one body's radius
    ///
    /// Regenerates the mesh before the next draw and keeps the sphere
    /// resting on the ground plane.
    pub fn set_radius(&mut self, id: BodyId, radius: f32) -> Result<(), ParameterError> {
        let body = &mut self.bodies[id.index()];
        body.set_radius(radius)?;
        body.position.y = radius + GROUND_Y;
        self.params.radius[id.index()] = radius;
        Ok(())
    }

    /// Apply the edited parameters: Idle -> Configured
    ///
    /// Rebuilds both bodies from the current parameter set and places them
    /// at their start positions. No-op outside Idle.
    pub fn configure(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.rebuild_bodies();
        self.phase = Phase::Configured;
        log::info!("simulation configured: {:?}", self.params);
    }

    /// Replace both bodies wholesale from the current parameters
    fn rebuild_bodies(&mut self) {
        self.bodies = [
            Body::build(self.params.radius[0], self.params.tessellation),
            Body::build(self.params.radius[1], self.params.tessellation),
        ];
        self.place_bodies();
    }

    /// Start/pause toggle: Configured or Paused -> Running, Running -> Paused
    pub fn toggle_running(&mut self) {
        self.phase = match self.phase {
            Phase::Configured | Phase::Paused => Phase::Running,
            Phase::Running => Phase::Paused,
            Phase::Idle => Phase::Idle,
        };
        log::info!("simulation phase: {:?}", self.phase);
    }

    /// Whether positions advance on update
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Advance one frame while running; otherwise a no-op
    pub fn update(&mut self, dt: f32) {
        if self.phase != Phase::Running {
            return;
        }
        let [a, b] = &mut self.bodies;
        collision::step(a, b, dt, self.params.response);
    }

    /// Reset to Idle with the default parameter set
    ///
    /// Discards running state, restores default radius and speed for both
    /// bodies and rebuilds their meshes from scratch.
    pub fn reset(&mut self) {
        self.params = SimulationParams {
            response: self.params.response,
            ..SimulationParams::default()
        };
        self.rebuild_bodies();
        self.phase = Phase::Idle;
        log::info!("simulation reset");
    }
}

impl Default for SphereSimulation {
    fn default() -> Self {
        Self::new()
    }
}
