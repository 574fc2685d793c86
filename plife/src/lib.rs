pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Particle, Snapshot, NVec2};
pub use simulation::torus::Torus;
pub use simulation::matrix::{InteractionMatrix, PairParams, SampleRanges};
pub use simulation::forces::{lerp, ForceSet, PairForce, HardRepulsion, TypeForce};
pub use simulation::integrator::euler_friction_step;
pub use simulation::params::{Parameters, StepModifiers};
pub use simulation::engine::{World, WorldSettings};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, MatrixConfig, HostConfig, ScenarioConfig};

pub use error::WorldError;

#[cfg(feature = "viewer")]
pub use visualization::particle_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
