//! Type-indexed interaction parameters
//!
//! Three square matrices indexed `[acting type][other type]`:
//! - `force`: signed coefficient, positive attracts, negative repels
//! - `min_distance`: below this, hard repulsion kicks in
//! - `radius`: beyond this, no force at all
//!
//! The matrices are not symmetric. They are only ever replaced as a whole,
//! see [`InteractionMatrix::random`].

use std::fmt;

use nalgebra::DMatrix;
use rand::Rng;

use crate::error::WorldError;

/// Parameters for one ordered type pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairParams {
    pub force: f64,
    pub min_distance: f64,
    pub radius: f64,
}

/// Closed intervals the matrices are sampled from.
/// `force` bounds the magnitude; the sign is drawn separately, so forces
/// never land in the dead zone `(-force[0], force[0])`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRanges {
    pub force: [f64; 2],
    pub min_distance: [f64; 2],
    pub radius: [f64; 2],
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            force: [0.3, 1.0],
            min_distance: [30.0, 50.0],
            radius: [70.0, 250.0],
        }
    }
}

impl SampleRanges {
    pub fn validate(&self) -> Result<(), WorldError> {
        // a zero magnitude would let a pair ignore each other entirely
        check_range("force", self.force, f64::MIN_POSITIVE)?;
        check_range("min_distance", self.min_distance, f64::MIN_POSITIVE)?;
        check_range("radius", self.radius, f64::MIN_POSITIVE)?;
        Ok(())
    }
}

fn check_range(name: &'static str, [lo, hi]: [f64; 2], floor: f64) -> Result<(), WorldError> {
    if lo.is_finite() && hi.is_finite() && lo >= floor && lo <= hi {
        Ok(())
    } else {
        Err(WorldError::InvalidRange { name, lo, hi })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix {
    force: DMatrix<f64>,
    min_distance: DMatrix<f64>,
    radius: DMatrix<f64>,
}

impl InteractionMatrix {
    /// Sample a fresh set of matrices.
    ///
    /// For each ordered pair, `i` outer and `j` inner, the draws are:
    /// force magnitude, force sign (fair coin), min distance, radius.
    /// The same rng state always gives the same matrices.
    pub fn random<R: Rng + ?Sized>(num_types: usize, ranges: &SampleRanges, rng: &mut R) -> Self {
        let mut force = DMatrix::zeros(num_types, num_types);
        let mut min_distance = DMatrix::zeros(num_types, num_types);
        let mut radius = DMatrix::zeros(num_types, num_types);

        for i in 0..num_types {
            for j in 0..num_types {
                let magnitude = rng.gen_range(ranges.force[0]..=ranges.force[1]);
                force[(i, j)] = if rng.gen_bool(0.5) { -magnitude } else { magnitude };
                min_distance[(i, j)] = rng.gen_range(ranges.min_distance[0]..=ranges.min_distance[1]);
                radius[(i, j)] = rng.gen_range(ranges.radius[0]..=ranges.radius[1]);
            }
        }

        Self { force, min_distance, radius }
    }

    /// Build matrices from a per-pair function, for hand-made setups.
    pub fn from_fn<F>(num_types: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> PairParams,
    {
        let mut m = Self {
            force: DMatrix::zeros(num_types, num_types),
            min_distance: DMatrix::zeros(num_types, num_types),
            radius: DMatrix::zeros(num_types, num_types),
        };
        for i in 0..num_types {
            for j in 0..num_types {
                m.set(i, j, f(i, j));
            }
        }
        m
    }

    /// Replace every entry with a fresh sample. The new matrices are built
    /// completely before the old ones are dropped.
    pub fn randomize<R: Rng + ?Sized>(&mut self, ranges: &SampleRanges, rng: &mut R) {
        *self = Self::random(self.num_types(), ranges, rng);
    }

    pub fn num_types(&self) -> usize {
        self.force.nrows()
    }

    /// Parameters `a` uses when reacting to `b`.
    pub fn pair(&self, a: usize, b: usize) -> PairParams {
        PairParams {
            force: self.force[(a, b)],
            min_distance: self.min_distance[(a, b)],
            radius: self.radius[(a, b)],
        }
    }

    pub fn set(&mut self, a: usize, b: usize, pair: PairParams) {
        self.force[(a, b)] = pair.force;
        self.min_distance[(a, b)] = pair.min_distance;
        self.radius[(a, b)] = pair.radius;
    }

    pub fn force(&self) -> &DMatrix<f64> {
        &self.force
    }

    pub fn min_distance(&self) -> &DMatrix<f64> {
        &self.min_distance
    }

    pub fn radius(&self) -> &DMatrix<f64> {
        &self.radius
    }
}

impl fmt::Display for InteractionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, "Forces", &self.force, 2)?;
        write_table(f, "Minimum distances", &self.min_distance, 1)?;
        write_table(f, "Radii", &self.radius, 1)
    }
}

fn write_table(f: &mut fmt::Formatter<'_>, title: &str, m: &DMatrix<f64>, precision: usize) -> fmt::Result {
    writeln!(f, "{title} matrix:")?;
    for i in 0..m.nrows() {
        write!(f, "Type {i}:")?;
        for j in 0..m.ncols() {
            write!(f, " {:.*}", precision, m[(i, j)])?;
        }
        writeln!(f)?;
    }
    Ok(())
}
