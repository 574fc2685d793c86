//! Simulation engine: the world that owns particles, matrices and the torus
//!
//! `World::step` is synchronous: every particle's next state is computed
//! from the same pre-step snapshot, then the whole population is swapped in.
//! Because `step` and `randomize` both take `&mut self`, a reader can never
//! observe a half-updated population or a half-replaced matrix.

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::error::WorldError;
use crate::simulation::forces::ForceSet;
use crate::simulation::matrix::{InteractionMatrix, SampleRanges};
use crate::simulation::params::{Parameters, StepModifiers};
use crate::simulation::states::{Particle, Snapshot};
use crate::simulation::torus::Torus;

/// Everything fixed at construction; changing any of it means a new world.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSettings {
    pub num_types: usize,
    pub num_particles: usize,
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>, // None = seed from OS entropy
    pub ranges: SampleRanges,
    pub parameters: Parameters,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            num_types: 6,
            num_particles: 500,
            width: 1200.0,
            height: 600.0,
            seed: None,
            ranges: SampleRanges::default(),
            parameters: Parameters::default(),
        }
    }
}

impl WorldSettings {
    fn validate(&self) -> Result<Torus, WorldError> {
        if self.num_types == 0 {
            return Err(WorldError::NoTypes);
        }
        self.ranges.validate()?;
        self.parameters.validate()?;
        Torus::new(self.width, self.height)
    }
}

pub struct World {
    particles: Vec<Particle>,
    next: Vec<Particle>, // back buffer for the synchronous update
    matrix: InteractionMatrix,
    forces: ForceSet,
    torus: Torus,
    ranges: SampleRanges,
    parameters: Parameters,
    rng: ChaCha12Rng,
    paused: bool,
    tick: u64,
}

impl World {
    /// Random world: particles first (x, y, type each), then the matrices,
    /// all from one rng.
    pub fn new(settings: &WorldSettings) -> Result<Self, WorldError> {
        let torus = settings.validate()?;
        let mut rng = seeded_rng(settings.seed);

        let particles: Vec<Particle> = (0..settings.num_particles)
            .map(|_| Particle::random(&torus, settings.num_types, &mut rng))
            .collect();
        let matrix = InteractionMatrix::random(settings.num_types, &settings.ranges, &mut rng);

        let world = Self::assemble(settings, torus, particles, matrix, rng);
        info!(
            "world: {} particles, {} types, {} force terms, {} x {}, K = {}, friction = {}",
            world.particles.len(),
            world.num_types(),
            world.forces.len(),
            torus.width,
            torus.height,
            world.parameters.k,
            world.parameters.friction,
        );
        debug!("initial parameters\n{}", world.matrix);
        Ok(world)
    }

    /// World with a hand-made population and matrices. `num_particles` in
    /// the settings is ignored; `num_types` must match the matrix size.
    pub fn with_state(settings: &WorldSettings, particles: Vec<Particle>, matrix: InteractionMatrix) -> Result<Self, WorldError> {
        let torus = settings.validate()?;
        if matrix.num_types() != settings.num_types {
            return Err(WorldError::MatrixSize {
                expected: settings.num_types,
                found: matrix.num_types(),
            });
        }
        for (index, p) in particles.iter().enumerate() {
            if p.kind >= settings.num_types {
                return Err(WorldError::TypeOutOfRange {
                    index,
                    kind: p.kind,
                    num_types: settings.num_types,
                });
            }
            if !torus.contains(&p.x) {
                return Err(WorldError::OutOfBounds { index, x: p.x.x, y: p.x.y });
            }
            if !p.v.iter().all(|c| c.is_finite()) {
                return Err(WorldError::NonFiniteVelocity { index });
            }
        }

        Ok(Self::assemble(settings, torus, particles, matrix, seeded_rng(settings.seed)))
    }

    fn assemble(settings: &WorldSettings, torus: Torus, particles: Vec<Particle>, matrix: InteractionMatrix, rng: ChaCha12Rng) -> Self {
        Self {
            next: Vec::with_capacity(particles.len()),
            particles,
            matrix,
            forces: ForceSet::particle_life(),
            torus,
            ranges: settings.ranges,
            parameters: settings.parameters,
            rng,
            paused: false,
            tick: 0,
        }
    }

    /// One tick with the configured K and friction. Returns false when paused.
    pub fn step(&mut self) -> bool {
        self.step_with(StepModifiers::IDENTITY)
    }

    /// One tick with K and friction scaled by `modifiers`.
    pub fn step_with(&mut self, modifiers: StepModifiers) -> bool {
        if self.paused {
            return false;
        }

        let params = self.parameters.scaled(modifiers);
        let World {
            particles,
            next,
            matrix,
            forces,
            torus,
            ..
        } = self;

        // every update reads `particles` (old state) and writes `next`
        next.clone_from(particles);
        let swarm: &[Particle] = particles;
        let (matrix, forces, torus): (&InteractionMatrix, &ForceSet, &Torus) = (matrix, forces, torus);
        next.par_iter_mut()
            .enumerate()
            .for_each(|(i, p)| p.update(i, swarm, matrix, torus, forces, &params));

        std::mem::swap(particles, next);
        self.tick += 1;
        trace!(tick = self.tick, "step");
        true
    }

    /// Replace all three matrices with a fresh sample.
    pub fn randomize(&mut self) {
        self.matrix.randomize(&self.ranges, &mut self.rng);
        info!(
            "parameters updated: {} types, {} particles, K = {}, friction = {}",
            self.num_types(),
            self.particles.len(),
            self.parameters.k,
            self.parameters.friction,
        );
        debug!("\n{}", self.matrix);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!(paused = self.paused, "pause toggled");
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn num_types(&self) -> usize {
        self.matrix.num_types()
    }

    /// Read-only view of the population after the last completed tick.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            num_types: self.num_types(),
            particles: self.particles.clone(),
        }
    }

    pub fn matrix(&self) -> &InteractionMatrix {
        &self.matrix
    }

    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn mean_speed(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        self.particles.iter().map(Particle::speed).sum::<f64>() / self.particles.len() as f64
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha12Rng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_entropy(),
    }
}
