//! Binary tournament selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use std::cmp::Ordering;

use rand::Rng;

use super::config::SelectionParams;
use crate::error::{ConfigError, OperandError};
use crate::solution::{dominance_cmp, Dominance, Solution};

/// Order used to decide a tournament.
///
/// [`compare`](Comparator::compare) returns `Less` when the first solution
/// is the better one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparator {
    /// Lower scalar fitness wins. Unordered values (NaN) tie.
    #[default]
    Fitness,
    /// Pareto dominance over the objective vectors; incomparable solutions tie.
    Dominance,
}

impl Comparator {
    pub fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        match self {
            Comparator::Fitness => a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal),
            Comparator::Dominance => match dominance_cmp(&a.objectives, &b.objectives) {
                Dominance::Left => Ordering::Less,
                Dominance::Right => Ordering::Greater,
                Dominance::Neither => Ordering::Equal,
            },
        }
    }
}

/// Draws two individuals uniformly with replacement and keeps the better.
///
/// Ties go to the first drawn.
///
/// # Complexity
/// O(1) per selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryTournament {
    comparator: Comparator,
}

impl BinaryTournament {
    /// Fails with [`ConfigError::MissingComparator`] when no comparator is set.
    pub fn new(params: SelectionParams) -> Result<Self, ConfigError> {
        let comparator = params.comparator.ok_or(ConfigError::MissingComparator)?;
        Ok(Self { comparator })
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// Decides a tournament between two contestants.
    pub fn compete<'a>(&self, first: &'a Solution, second: &'a Solution) -> &'a Solution {
        match self.comparator.compare(first, second) {
            Ordering::Greater => second,
            Ordering::Less | Ordering::Equal => first,
        }
    }

    /// Returns the index of the tournament winner.
    pub fn select_index<R: Rng>(
        &self,
        population: &[Solution],
        rng: &mut R,
    ) -> Result<usize, OperandError> {
        if population.is_empty() {
            return Err(OperandError::EmptyPopulation);
        }
        let n = population.len();
        let first = rng.random_range(0..n);
        let second = rng.random_range(0..n);

        Ok(
            match self.comparator.compare(&population[first], &population[second]) {
                Ordering::Greater => second,
                Ordering::Less | Ordering::Equal => first,
            },
        )
    }

    /// Returns the tournament winner.
    pub fn select<'a, R: Rng>(
        &self,
        population: &'a [Solution],
        rng: &mut R,
    ) -> Result<&'a Solution, OperandError> {
        self.select_index(population, rng).map(|i| &population[i])
    }
}
