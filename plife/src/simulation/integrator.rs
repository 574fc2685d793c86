//! Fixed-step integrator for particle life
//!
//! One explicit Euler step per tick with a unit time step, followed by a
//! toroidal wrap and multiplicative friction.

use super::states::{NVec2, Particle};
use super::torus::Torus;

/// Advance one particle by a tick given its net force.
/// - v_n+1/2 = v_n + F
/// - x_n+1 = wrap(x_n + v_n+1/2)
/// - v_n+1 = friction * v_n+1/2
pub fn euler_friction_step(p: &mut Particle, total_force: NVec2, torus: &Torus, friction: f64) {
    p.v += total_force;

    p.x += p.v;
    torus.wrap(&mut p.x);

    // damping comes after the move, every tick
    p.v *= friction;
}
