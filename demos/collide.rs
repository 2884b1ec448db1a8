//! # Headless Collision Demo
//!
//! Stand-in for the windowed demo loop: configures two spheres, runs the
//! simulation at a fixed 60 Hz timestep, and reports the collision when the
//! bodies make contact. The rendering layer would consume the same mesh and
//! position data each frame.
//!
//! ## Usage
//! ```bash
//! RUST_LOG=debug cargo run --example collide
//! ```

use anyhow::Result;
use clatter::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut sim = SphereSimulation::with_params(SimulationParams {
        radius: [2.0, 1.0],
        speed: [0.3, -0.3],
        ..SimulationParams::default()
    })?;

    // Slider-equivalent edits are allowed while idle
    sim.set_speed(BodyId::B, -0.3);

    sim.configure();
    sim.toggle_running();

    let mesh = sim.body(BodyId::A).mesh();
    println!(
        "sphere A: {} vertices, {} triangles ({} bytes of position data)",
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.vertex_bytes().len()
    );

    let dt = 1.0 / 60.0;
    let mut elapsed = 0.0;
    let initial_velocity = sim.body(BodyId::A).velocity;

    for _ in 0..20_000 {
        sim.update(dt);
        elapsed += dt;

        if sim.body(BodyId::A).velocity != initial_velocity {
            let a = sim.body(BodyId::A);
            let b = sim.body(BodyId::B);
            println!(
                "contact after {elapsed:.2}s at x = {:.2} / {:.2}",
                a.position.x, b.position.x
            );
            println!("velocities: {:.3} / {:.3}", a.velocity, b.velocity);
            break;
        }
    }

    sim.reset();
    println!("reset to phase {:?}", sim.phase());
    Ok(())
}
