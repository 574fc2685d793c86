//! Build a running scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! - the `World` (particles, matrices, torus)
//! - host behavior: periodic randomization and the initial pause state
//!
//! The viewer inserts it as a Bevy `Resource`; the headless runner and the
//! benchmarks drive it directly.

use tracing::info;

use crate::configuration::config::{HostConfig, ScenarioConfig};
use crate::error::WorldError;
use crate::simulation::engine::World;

#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub host: HostConfig,
    pub world: World,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, WorldError> {
        let mut world = World::new(&cfg.world_settings())?;
        if cfg.host.start_paused {
            world.toggle_pause();
        }

        Ok(Self {
            host: cfg.host,
            world,
        })
    }

    /// One host tick: step the world, then fire the periodic randomization
    /// if this tick completes a period. Returns whether the world stepped.
    pub fn advance(&mut self) -> bool {
        if !self.world.step() {
            return false;
        }

        if let Some(every) = self.host.randomize_every.filter(|n| *n > 0) {
            if self.world.tick() % every == 0 {
                info!(tick = self.world.tick(), "periodic randomization");
                self.world.randomize();
            }
        }
        true
    }

    /// Advance `ticks` times (paused ticks count too).
    pub fn run(&mut self, ticks: u64) -> u64 {
        (0..ticks).filter(|_| self.advance()).count() as u64
    }
}
