//! Feature model as a CNF clause set.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::clause::Clause;
use super::oracle::{ClauseId, ConstraintOracle};
use crate::chromosome::Chromosome;
use crate::error::{ConfigError, OperandError};

/// The constraints of a product line: `feature_count` boolean features and
/// a conjunction of clauses over them.
///
/// Immutable once built. Operators share it through an `Arc` and never copy
/// the clause list.
///
/// # Examples
///
/// ```
/// use spl_moea::{Chromosome, model::{ConstraintOracle, FeatureModel}};
///
/// let model = FeatureModel::from_dimacs_clauses(3, vec![vec![1, -2], vec![3]]).unwrap();
/// let config = Chromosome::from_bits(&[0, 1, 1]);
/// assert_eq!(model.violated_clauses(&config), vec![0]);
/// assert!(!model.is_satisfiable(&config));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFeatureModel")
)]
pub struct FeatureModel {
    feature_count: usize,
    clauses: Vec<Clause>,
}

/// Unvalidated wire form; deserialization goes through [`FeatureModel::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFeatureModel {
    feature_count: usize,
    clauses: Vec<Clause>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFeatureModel> for FeatureModel {
    type Error = ConfigError;

    fn try_from(raw: RawFeatureModel) -> Result<Self, Self::Error> {
        Self::new(raw.feature_count, raw.clauses)
    }
}

impl FeatureModel {
    /// Builds a model, validating every literal against `feature_count`.
    pub fn new(feature_count: usize, clauses: Vec<Clause>) -> Result<Self, ConfigError> {
        if feature_count == 0 {
            return Err(ConfigError::EmptyFeatureModel);
        }
        for (id, clause) in clauses.iter().enumerate() {
            if clause.is_empty() {
                return Err(ConfigError::EmptyClause { clause: id });
            }
            if let Some(bad) = clause
                .literals()
                .iter()
                .find(|lit| lit.feature() > feature_count)
            {
                return Err(ConfigError::InvalidLiteral {
                    clause: id,
                    literal: bad.value(),
                    feature_count,
                });
            }
        }
        Ok(Self {
            feature_count,
            clauses,
        })
    }

    /// Builds a model from raw DIMACS clause rows such as `[[1, -2], [3]]`.
    pub fn from_dimacs_clauses(
        feature_count: usize,
        clauses: Vec<Vec<i32>>,
    ) -> Result<Self, ConfigError> {
        let clauses = clauses
            .into_iter()
            .enumerate()
            .map(|(id, row)| {
                Clause::try_from(row).map_err(|_| ConfigError::InvalidLiteral {
                    clause: id,
                    literal: 0,
                    feature_count,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(feature_count, clauses)
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn clause(&self, id: ClauseId) -> Option<&Clause> {
        self.clauses.get(id)
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Fails unless `chromosome` has exactly one gene per feature.
    pub fn check(&self, chromosome: &Chromosome) -> Result<(), OperandError> {
        chromosome.ensure_non_empty()?;
        if chromosome.len() != self.feature_count {
            return Err(OperandError::FeatureCountMismatch {
                expected: self.feature_count,
                actual: chromosome.len(),
            });
        }
        Ok(())
    }

    /// Number of clauses `chromosome` violates.
    ///
    /// This is the constraint-violation objective engines typically minimize
    /// alongside richness, cost and defect counts.
    pub fn violation_count(&self, chromosome: &Chromosome) -> Result<usize, OperandError> {
        self.check(chromosome)?;
        Ok(self
            .clauses
            .iter()
            .filter(|c| !c.is_satisfied_by(chromosome))
            .count())
    }

    /// Violation counts for a whole population, evaluated in parallel when
    /// the `parallel` feature is enabled.
    ///
    /// Fails on the first chromosome of the wrong length.
    pub fn violation_counts(
        &self,
        population: &[Chromosome],
    ) -> Result<Vec<usize>, OperandError> {
        #[cfg(feature = "parallel")]
        {
            population
                .par_iter()
                .map(|c| self.violation_count(c))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            population.iter().map(|c| self.violation_count(c)).collect()
        }
    }

    /// Values forced by unit propagation, per 0-based gene.
    ///
    /// `Some(true)` marks a core feature (selected in every valid product),
    /// `Some(false)` a dead one, `None` a feature left open. Propagation stops
    /// at a fixpoint; a contradiction leaves the first assignment in place.
    pub fn fixed_features(&self) -> Vec<Option<bool>> {
        let mut assignment: Vec<Option<bool>> = vec![None; self.feature_count];

        loop {
            let mut changed = false;
            for clause in &self.clauses {
                let mut satisfied = false;
                let mut open = None;
                let mut open_count = 0usize;

                for &lit in clause.literals() {
                    match assignment[lit.index()] {
                        Some(v) if v == lit.is_positive() => {
                            satisfied = true;
                            break;
                        }
                        Some(_) => {}
                        None => {
                            open_count += 1;
                            open = Some(lit);
                        }
                    }
                }

                if satisfied || open_count != 1 {
                    continue;
                }
                if let Some(lit) = open {
                    assignment[lit.index()] = Some(lit.is_positive());
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        assignment
    }

    /// 1-based ids of the core features.
    pub fn core_features(&self) -> Vec<usize> {
        collect_fixed(&self.fixed_features(), true)
    }

    /// 1-based ids of the dead features.
    pub fn dead_features(&self) -> Vec<usize> {
        collect_fixed(&self.fixed_features(), false)
    }
}

fn collect_fixed(assignment: &[Option<bool>], value: bool) -> Vec<usize> {
    assignment
        .iter()
        .enumerate()
        .filter(|(_, a)| **a == Some(value))
        .map(|(i, _)| i + 1)
        .collect()
}

/// The trait methods do not check lengths: genes missing from a short
/// chromosome count as unmet literals, and surplus genes are ignored. Call
/// [`FeatureModel::check`] first where lengths are not already guaranteed.
impl ConstraintOracle for FeatureModel {
    fn feature_count(&self) -> usize {
        self.feature_count
    }

    fn violated_clauses(&self, chromosome: &Chromosome) -> Vec<ClauseId> {
        self.clauses
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_satisfied_by(chromosome))
            .map(|(id, _)| id)
            .collect()
    }

    fn is_satisfiable(&self, chromosome: &Chromosome) -> bool {
        self.clauses.iter().all(|c| c.is_satisfied_by(chromosome))
    }
}
