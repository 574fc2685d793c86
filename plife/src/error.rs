//! Construction errors for the simulation.
//!
//! Stepping, randomizing and pausing are total; only building a world from
//! bad settings can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// A world needs at least one particle type
    #[error("number of types must be at least 1")]
    NoTypes,

    /// Extents must be finite and strictly positive
    #[error("invalid world extent {width} x {height}")]
    InvalidExtent { width: f64, height: f64 },

    /// A particle carries a type tag the matrices have no row for
    #[error("particle {index} has type {kind}, but only {num_types} types exist")]
    TypeOutOfRange { index: usize, kind: usize, num_types: usize },

    /// Particle sits outside `[0, width) x [0, height)`
    #[error("particle {index} at ({x}, {y}) is outside the world")]
    OutOfBounds { index: usize, x: f64, y: f64 },

    /// Particle velocity has an infinite or NaN component
    #[error("particle {index} has a non-finite velocity")]
    NonFiniteVelocity { index: usize },

    /// Sampling range is empty, non-finite, or outside its allowed domain
    #[error("invalid {name} range [{lo}, {hi}]")]
    InvalidRange { name: &'static str, lo: f64, hi: f64 },

    /// K or friction is negative or non-finite
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Matrix dimension does not match the configured type count
    #[error("interaction matrix has {found} types, expected {expected}")]
    MatrixSize { expected: usize, found: usize },
}
