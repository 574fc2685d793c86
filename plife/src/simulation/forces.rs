//! Pairwise force terms for particle life
//!
//! Each term implements [`PairForce`] and maps a distance plus the pair's
//! [`PairParams`] to a signed magnitude along the unit direction from the
//! acting particle toward its neighbor. [`ForceSet`] sums every term over
//! every neighbor (dense all-pairs) into one force vector per particle.

use crate::simulation::matrix::{InteractionMatrix, PairParams};
use crate::simulation::states::{NVec2, Particle};
use crate::simulation::torus::Torus;

/// Multiplier on |force| inside the hard repulsion band
pub const HARD_REPULSION_STRENGTH: f64 = 3.0;

/// Linear remap of `v` from `[a0, a1]` onto `[b0, b1]`.
pub fn lerp(v: f64, a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    b0 + (b1 - b0) * ((v - a0) / (a1 - a0))
}

/// A distance-dependent interaction between two typed particles.
/// Returned magnitudes are before the global `k` scale; negative pushes away.
pub trait PairForce {
    fn magnitude(&self, dis: f64, pair: &PairParams) -> f64;
}

/// Short-range repulsion below `min_distance`, whatever the sign of `force`.
/// Strength is 1 at distance 0 and fades to 0 at `min_distance`.
pub struct HardRepulsion;

impl PairForce for HardRepulsion {
    fn magnitude(&self, dis: f64, pair: &PairParams) -> f64 {
        if dis >= pair.min_distance {
            return 0.0;
        }
        let mag = pair.force.abs() * -HARD_REPULSION_STRENGTH;
        mag * lerp(dis, 0.0, pair.min_distance, 1.0, 0.0)
    }
}

/// Attraction (positive `force`) or repulsion (negative) inside `radius`,
/// fading linearly to 0 at `radius`.
pub struct TypeForce;

impl PairForce for TypeForce {
    fn magnitude(&self, dis: f64, pair: &PairParams) -> f64 {
        if dis >= pair.radius {
            return 0.0;
        }
        pair.force * lerp(dis, 0.0, pair.radius, 1.0, 0.0)
    }
}

/// Ordered collection of pair-force terms.
/// Terms are independent: for one pair several may fire at once.
pub struct ForceSet {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::particle_life()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Hard repulsion followed by the type force
    pub fn particle_life() -> Self {
        Self::new().with(HardRepulsion).with(TypeForce)
    }

    /// Add a term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Net force on `swarm[index]` from every other particle in `swarm`.
    ///
    /// Neighbors at zero wrapped distance contribute nothing.
    pub fn total_force(&self, index: usize, swarm: &[Particle], matrix: &InteractionMatrix, torus: &Torus, k: f64) -> NVec2 {
        let me = &swarm[index];
        let mut total = NVec2::zeros();

        for (j, other) in swarm.iter().enumerate() {
            if j == index {
                continue;
            }

            let delta = torus.delta(&me.x, &other.x);
            let dis = delta.norm();
            if dis == 0.0 {
                continue;
            }

            // unit vector from me toward the neighbor
            let direction = delta / dis;
            let pair = matrix.pair(me.kind, other.kind);

            for term in &self.terms {
                let mag = term.magnitude(dis, &pair) * k;
                total += direction * mag;
            }
        }

        total
    }
}
