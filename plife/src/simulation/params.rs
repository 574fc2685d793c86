//! Global constants of the force and friction model
//!
//! `Parameters` are fixed for a run:
//! - `k`: scale applied to every pair-force magnitude
//! - `friction`: per-tick multiplicative velocity damping
//!
//! `StepModifiers` scale them for a single step and default to identity.

use crate::error::WorldError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub k: f64, // force scale
    pub friction: f64, // velocity damping per tick
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            k: 0.05,
            friction: 0.85,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), WorldError> {
        for (name, value) in [("k", self.k), ("friction", self.friction)] {
            if !value.is_finite() || value < 0.0 {
                return Err(WorldError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Effective parameters for one step.
    pub fn scaled(&self, modifiers: StepModifiers) -> Self {
        Self {
            k: self.k * modifiers.force_scale,
            friction: self.friction * modifiers.friction_scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepModifiers {
    pub force_scale: f64,
    pub friction_scale: f64,
}

impl StepModifiers {
    pub const IDENTITY: Self = Self {
        force_scale: 1.0,
        friction_scale: 1.0,
    };
}

impl Default for StepModifiers {
    fn default() -> Self {
        Self::IDENTITY
    }
}
