//! Fully wired, immutable algorithm descriptor.

use std::time::Instant;

use rand::Rng;

use super::types::{Budget, Family, Variant};
use crate::error::OperandError;
use crate::operators::{BinaryTournament, Mutation, SinglePointCrossover};
use crate::solution::Solution;

/// A ready-to-run search: variant, sizes, budget and the three operators.
///
/// Only the [`Assembler`](super::Assembler) creates descriptors, and only
/// after every parameter has been validated. Fields are read-only; changing
/// a parameter means assembling a new descriptor.
#[derive(Debug, Clone)]
pub struct AlgorithmDescriptor {
    pub(super) variant: Variant,
    pub(super) population_size: usize,
    pub(super) archive_size: usize,
    pub(super) budget: Budget,
    pub(super) crossover: SinglePointCrossover,
    pub(super) mutation: Mutation,
    pub(super) selection: BinaryTournament,
}

impl AlgorithmDescriptor {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn family(&self) -> Family {
        self.variant.family()
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn archive_size(&self) -> usize {
        self.archive_size
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn crossover(&self) -> &SinglePointCrossover {
        &self.crossover
    }

    pub fn mutation(&self) -> &Mutation {
        &self.mutation
    }

    pub fn selection(&self) -> &BinaryTournament {
        &self.selection
    }

    /// The instant a run started at `start` must stop, for runtime budgets.
    ///
    /// Recorded for the engine; nothing in this crate polls the clock.
    pub fn deadline_from(&self, start: Instant) -> Option<Instant> {
        self.budget.deadline_from(start)
    }

    /// One reproduction step: two tournaments, crossover, then mutation of
    /// both children.
    ///
    /// The offspring are new, unevaluated solutions; children whose repair
    /// was exhausted carry [`Solution::repair_exhausted`].
    pub fn reproduce<R: Rng>(
        &self,
        population: &[Solution],
        rng: &mut R,
    ) -> Result<(Solution, Solution), OperandError> {
        let parent1 = self.selection.select(population, rng)?;
        let parent2 = self.selection.select(population, rng)?;

        let (c1, c2) = self
            .crossover
            .execute(&parent1.chromosome, &parent2.chromosome, rng)?;

        let mut child1 = Solution::new(c1);
        let mut child2 = Solution::new(c2);
        self.mutation.apply(&mut child1, rng)?;
        self.mutation.apply(&mut child2, rng)?;
        Ok((child1, child2))
    }

    /// Fills an offspring pool of `count` solutions by repeated
    /// [`reproduce`](Self::reproduce) calls.
    pub fn offspring<R: Rng>(
        &self,
        population: &[Solution],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Solution>, OperandError> {
        let mut pool = Vec::with_capacity(count + 1);
        while pool.len() < count {
            let (a, b) = self.reproduce(population, rng)?;
            pool.push(a);
            pool.push(b);
        }
        pool.truncate(count);
        Ok(pool)
    }
}
