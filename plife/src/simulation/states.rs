//! Core state types for the particle life simulation.
//!
//! - `Particle` holds a position, a velocity and an immutable type tag
//! - `Snapshot` is a read-only copy of a whole population after a completed tick
//!
//! Positions live on the torus described by [`Torus`].

use nalgebra::Vector2;
use rand::Rng;

use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_friction_step;
use crate::simulation::matrix::InteractionMatrix;
use crate::simulation::params::Parameters;
use crate::simulation::torus::Torus;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position, inside [0, width) x [0, height)
    pub v: NVec2, // velocity
    pub kind: usize, // type tag, fixed at creation
}

impl Particle {
    pub fn new(x: NVec2, v: NVec2, kind: usize) -> Self {
        Self { x, v, kind }
    }

    /// Random position on the torus, uniform random type, at rest.
    /// Draw order is x, y, type.
    pub fn random<R: Rng + ?Sized>(torus: &Torus, num_types: usize, rng: &mut R) -> Self {
        let x = rng.gen_range(0.0..torus.width);
        let y = rng.gen_range(0.0..torus.height);
        let kind = rng.gen_range(0..num_types);

        Self {
            x: NVec2::new(x, y),
            v: NVec2::zeros(),
            kind,
        }
    }

    /// Advance this particle by one tick.
    ///
    /// `index` is this particle's slot in `swarm`, which is the pre-step
    /// state of the whole population. The slot is skipped by identity so a
    /// second particle with an identical state still counts as a neighbor.
    pub fn update(
        &mut self,
        index: usize,
        swarm: &[Particle],
        matrix: &InteractionMatrix,
        torus: &Torus,
        forces: &ForceSet,
        params: &Parameters,
    ) {
        let total_force = forces.total_force(index, swarm, matrix, torus, params.k);
        euler_friction_step(self, total_force, torus, params.friction);
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }
}

/// Population state after a completed tick, handed to renderers that need
/// to own their copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64, // number of completed ticks
    pub num_types: usize,
    pub particles: Vec<Particle>,
}
