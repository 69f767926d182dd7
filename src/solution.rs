//! Individuals handled by the operator pipeline.
//!
//! A [`Solution`] is what the external engine keeps in its population and
//! archive. This crate creates fresh, unevaluated solutions as offspring and
//! flags those whose constraint repair ran out of attempts; objective values
//! and fitness are written by the engine.

use std::cmp::Ordering;

use crate::chromosome::Chromosome;

/// A candidate product configuration with its recorded evaluation.
///
/// All objectives are **minimized**, and a lower scalar `fitness` is better,
/// matching the indicator-based engines that assign it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Feature selection.
    pub chromosome: Chromosome,

    /// Objective values written by the engine (empty until evaluated).
    pub objectives: Vec<f64>,

    /// Scalar fitness written by the engine; `f64::INFINITY` until evaluated.
    pub fitness: f64,

    /// Set when constraint-guided mutation exhausted its repair attempts
    /// without reaching a satisfiable configuration.
    ///
    /// The engine's fitness function is expected to penalize such
    /// individuals; they are never dropped by the operators.
    pub repair_exhausted: bool,
}

impl Solution {
    /// Creates an unevaluated solution.
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            objectives: Vec::new(),
            fitness: f64::INFINITY,
            repair_exhausted: false,
        }
    }

    /// Creates a solution with recorded objectives and fitness.
    pub fn evaluated(chromosome: Chromosome, objectives: Vec<f64>, fitness: f64) -> Self {
        Self {
            chromosome,
            objectives,
            fitness,
            repair_exhausted: false,
        }
    }

    /// Whether the engine has evaluated this solution since it last changed.
    pub fn is_evaluated(&self) -> bool {
        !self.objectives.is_empty() || self.fitness.is_finite()
    }

    /// Discards the recorded evaluation after the chromosome changed.
    pub fn invalidate(&mut self) {
        self.objectives.clear();
        self.fitness = f64::INFINITY;
    }
}

/// Pareto dominance between two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (including equal vectors).
    Neither,
}

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// Vectors of different lengths are compared over their common prefix, and
/// NaN components decide nothing.
///
/// # Example
///
/// ```
/// use spl_moea::solution::{dominance_cmp, Dominance};
///
/// assert_eq!(dominance_cmp(&[1.0, 2.0], &[2.0, 2.0]), Dominance::Left);
/// assert_eq!(dominance_cmp(&[1.0, 3.0], &[2.0, 2.0]), Dominance::Neither);
/// ```
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let (mut left, mut right) = (false, false);
    for (x, y) in a.iter().zip(b) {
        match x.partial_cmp(y) {
            Some(Ordering::Less) => left = true,
            Some(Ordering::Greater) => right = true,
            Some(Ordering::Equal) | None => {}
        }
        if left && right {
            return Dominance::Neither;
        }
    }
    match (left, right) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}
