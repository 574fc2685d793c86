//! Configuration types for loading particle life scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – population size, type count, world extents, seed
//! - [`ParametersConfig`] – force scale `k` and `friction`
//! - [`MatrixConfig`]     – intervals the interaction matrices are sampled from
//! - [`HostConfig`]       – run-loop behavior (periodic randomization, start paused)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty file is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   num_types: 6
//!   num_particles: 500
//!   width: 1200.0
//!   height: 600.0
//!   seed: 42                # omit for a different world every run
//!
//! parameters:
//!   k: 0.05                 # force scale
//!   friction: 0.85          # velocity kept per tick
//!
//! matrix:
//!   force: [0.3, 1.0]       # magnitude, sign is a coin flip
//!   min_distance: [30.0, 50.0]
//!   radius: [70.0, 250.0]
//!
//! host:
//!   randomize_every: 600    # ticks, omit to only randomize on demand
//!   start_paused: false
//! ```

use serde::Deserialize;

use crate::simulation::engine::WorldSettings;
use crate::simulation::matrix::SampleRanges;
use crate::simulation::params::Parameters;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub num_types: usize,     // number of particle types, at least 1
    pub num_particles: usize, // fixed population size
    pub width: f64,           // torus width
    pub height: f64,          // torus height
    pub seed: Option<u64>,    // deterministic seed to make runs reproducible
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_types: 6,
            num_particles: 500,
            width: 1200.0,
            height: 600.0,
            seed: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub k: f64,        // scale on every pair-force magnitude
    pub friction: f64, // multiplicative velocity damping per tick
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            k: p.k,
            friction: p.friction,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixConfig {
    pub force: [f64; 2],
    pub min_distance: [f64; 2],
    pub radius: [f64; 2],
}

impl Default for MatrixConfig {
    fn default() -> Self {
        let r = SampleRanges::default();
        Self {
            force: r.force,
            min_distance: r.min_distance,
            radius: r.radius,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub randomize_every: Option<u64>, // periodic randomization, in completed ticks
    pub start_paused: bool,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub matrix: MatrixConfig,
    pub host: HostConfig,
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn world_settings(&self) -> WorldSettings {
        WorldSettings {
            num_types: self.engine.num_types,
            num_particles: self.engine.num_particles,
            width: self.engine.width,
            height: self.engine.height,
            seed: self.engine.seed,
            ranges: SampleRanges {
                force: self.matrix.force,
                min_distance: self.matrix.min_distance,
                radius: self.matrix.radius,
            },
            parameters: Parameters {
                k: self.parameters.k,
                friction: self.parameters.friction,
            },
        }
    }
}
