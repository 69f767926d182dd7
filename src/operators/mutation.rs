//! Bit-flip and constraint-guided mutation.
//!
//! Both operators flip each gene independently with probability `p`.
//! [`SatAwareMutation`] then repairs the result against the feature model:
//! it repeatedly picks a violated clause and flips one of its features,
//! preferring the flip that breaks the fewest satisfied clauses (a
//! WalkSAT-style step). Repair is bounded; an individual that is still
//! infeasible when the bound is hit is passed through and flagged.
//!
//! # References
//!
//! - Selman, Kautz & Cohen (1994), "Noise Strategies for Improving Local Search"
//! - Henard et al. (2015), "Combining Multi-Objective Search and Constraint
//!   Solving for Configuring Large Software Product Lines"

use std::sync::Arc;

use rand::Rng;

use super::config::{MutationParams, RepairConfig};
use crate::chromosome::Chromosome;
use crate::error::{ConfigError, OperandError};
use crate::model::index::OccurrenceIndex;
use crate::model::{Clause, ClauseId, ConstraintOracle, FeatureModel};
use crate::solution::Solution;

/// How a mutation call left the individual with respect to the constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairStatus {
    /// The operator does not consult the constraints.
    Unchecked,
    /// The individual was satisfiable right after the random flips.
    Satisfied,
    /// Repair flips made the individual satisfiable.
    Repaired,
    /// The repair bound was reached (or no repairable clause remained) and
    /// the individual still violates the constraints.
    BoundExceeded,
}

/// Result of one mutation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Genes changed by random flips and fixed-feature pinning.
    pub flips: usize,
    /// Repair flips performed; never exceeds [`RepairConfig::max_attempts`].
    pub repair_attempts: usize,
    pub status: RepairStatus,
}

impl MutationOutcome {
    fn unchecked(flips: usize) -> Self {
        Self {
            flips,
            repair_attempts: 0,
            status: RepairStatus::Unchecked,
        }
    }

    /// Whether the chromosome was modified.
    pub fn changed(&self) -> bool {
        self.flips > 0 || self.repair_attempts > 0
    }

    /// Whether repair gave up on an infeasible individual.
    pub fn bound_exceeded(&self) -> bool {
        self.status == RepairStatus::BoundExceeded
    }
}

/// Flips each non-frozen gene with probability `p`; returns the flip count.
fn flip_genes<R: Rng>(
    genes: &mut [bool],
    probability: f64,
    frozen: Option<&[Option<bool>]>,
    rng: &mut R,
) -> usize {
    let mut flips = 0;
    for (i, gene) in genes.iter_mut().enumerate() {
        if frozen.is_some_and(|f| f[i].is_some()) {
            continue;
        }
        if rng.random::<f64>() < probability {
            *gene = !*gene;
            flips += 1;
        }
    }
    flips
}

// ============================================================================
// Bit-flip
// ============================================================================

/// Independent Bernoulli flips with no knowledge of the feature model.
///
/// # Complexity
/// O(L)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlipMutation {
    params: MutationParams,
}

impl BitFlipMutation {
    pub fn new(params: MutationParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn probability(&self) -> f64 {
        self.params.probability
    }

    /// Mutates `chromosome` in place and returns the number of flipped genes.
    pub fn execute<R: Rng>(
        &self,
        chromosome: &mut Chromosome,
        rng: &mut R,
    ) -> Result<usize, OperandError> {
        chromosome.ensure_non_empty()?;
        Ok(flip_genes(
            chromosome.genes_mut(),
            self.params.probability,
            None,
            rng,
        ))
    }
}

// ============================================================================
// Constraint-guided
// ============================================================================

/// Bit-flip followed by bounded, clause-directed repair.
///
/// Holds the feature model by `Arc` together with a clause occurrence index
/// built at construction. Both are read-only afterwards, so the operator is
/// `Send + Sync` and can be cloned cheaply into worker threads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use spl_moea::{Chromosome, model::FeatureModel};
/// use spl_moea::operators::{MutationParams, RepairConfig, SatAwareMutation};
/// use spl_moea::random::create_rng;
///
/// let model = Arc::new(FeatureModel::from_dimacs_clauses(3, vec![vec![1, -2]]).unwrap());
/// let mutation =
///     SatAwareMutation::new(MutationParams::new(0.0), 3, model, RepairConfig::default()).unwrap();
///
/// let mut config = Chromosome::from_bits(&[0, 1, 0]); // violates (1 or not 2)
/// let outcome = mutation.execute(&mut config, &mut create_rng(5)).unwrap();
/// assert_eq!(outcome.repair_attempts, 1);
/// assert!(config.is_selected(1) || !config.is_selected(2));
/// ```
#[derive(Debug, Clone)]
pub struct SatAwareMutation {
    params: MutationParams,
    repair: RepairConfig,
    model: Arc<FeatureModel>,
    oracle: Arc<dyn ConstraintOracle>,
    index: Arc<OccurrenceIndex>,
    fixed: Option<Arc<[Option<bool>]>>,
}

impl SatAwareMutation {
    /// Builds the operator for chromosomes of `feature_count` genes.
    ///
    /// Fails if `feature_count` differs from the model's feature count, or
    /// if any parameter is out of range.
    pub fn new(
        params: MutationParams,
        feature_count: usize,
        model: Arc<FeatureModel>,
        repair: RepairConfig,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        repair.validate()?;
        if feature_count != model.feature_count() {
            return Err(ConfigError::FeatureCountMismatch {
                expected: feature_count,
                actual: model.feature_count(),
            });
        }

        let index = Arc::new(OccurrenceIndex::build(&model));
        let fixed = repair
            .freeze_fixed_features
            .then(|| Arc::from(model.fixed_features()));
        let oracle: Arc<dyn ConstraintOracle> = model.clone();

        Ok(Self {
            params,
            repair,
            model,
            oracle,
            index,
            fixed,
        })
    }

    /// Replaces the satisfiability oracle, e.g. with a SAT-solver front end.
    ///
    /// The oracle's clause ids must index this operator's feature model.
    pub fn with_oracle(mut self, oracle: Arc<dyn ConstraintOracle>) -> Result<Self, ConfigError> {
        if oracle.feature_count() != self.feature_count() {
            return Err(ConfigError::FeatureCountMismatch {
                expected: self.feature_count(),
                actual: oracle.feature_count(),
            });
        }
        self.oracle = oracle;
        Ok(self)
    }

    pub fn probability(&self) -> f64 {
        self.params.probability
    }

    pub fn repair_config(&self) -> RepairConfig {
        self.repair
    }

    pub fn feature_count(&self) -> usize {
        self.model.feature_count()
    }

    pub fn feature_model(&self) -> &Arc<FeatureModel> {
        &self.model
    }

    /// Mutates and repairs `chromosome` in place.
    ///
    /// Never fails because of infeasibility: exhausting the repair bound is
    /// reported as [`RepairStatus::BoundExceeded`].
    pub fn execute<R: Rng>(
        &self,
        chromosome: &mut Chromosome,
        rng: &mut R,
    ) -> Result<MutationOutcome, OperandError> {
        self.model.check(chromosome)?;

        let frozen = self.fixed.as_deref();
        let mut flips = frozen.map_or(0, |f| pin_fixed(chromosome, f));
        flips += flip_genes(
            chromosome.genes_mut(),
            self.params.probability,
            frozen,
            rng,
        );

        let mut repair_attempts = 0;
        let status = loop {
            let violated = self.oracle.violated_clauses(chromosome);
            if violated.is_empty() {
                break if repair_attempts == 0 {
                    RepairStatus::Satisfied
                } else {
                    RepairStatus::Repaired
                };
            }
            if repair_attempts >= self.repair.max_attempts {
                log::trace!(
                    "repair bound of {} reached with {} clauses violated",
                    self.repair.max_attempts,
                    violated.len()
                );
                break RepairStatus::BoundExceeded;
            }

            let repairable = self.repairable_clauses(&violated);
            if repairable.is_empty() {
                break RepairStatus::BoundExceeded;
            }
            let clause = repairable[rng.random_range(0..repairable.len())];
            let Some(gene) = self.pick_repair_gene(clause, chromosome, rng) else {
                break RepairStatus::BoundExceeded;
            };
            chromosome.flip(gene);
            repair_attempts += 1;
        };

        Ok(MutationOutcome {
            flips,
            repair_attempts,
            status,
        })
    }

    /// Violated clauses that have at least one flippable feature.
    fn repairable_clauses(&self, violated: &[ClauseId]) -> Vec<&Clause> {
        let mut unknown = 0usize;
        let clauses: Vec<&Clause> = violated
            .iter()
            .filter_map(|&id| {
                let clause = self.model.clause(id);
                if clause.is_none() {
                    unknown += 1;
                }
                clause
            })
            .filter(|c| c.literals().iter().any(|l| !self.is_frozen(l.index())))
            .collect();
        if unknown > 0 {
            log::warn!(
                "oracle reported {unknown} clause ids unknown to the feature model ({} clauses)",
                self.model.clause_count()
            );
        }
        clauses
    }

    /// Chooses the feature of `clause` to flip.
    ///
    /// With probability `noise` a random flippable feature; otherwise the one
    /// with the lowest break count, ties broken at random.
    fn pick_repair_gene<R: Rng>(
        &self,
        clause: &Clause,
        chromosome: &Chromosome,
        rng: &mut R,
    ) -> Option<usize> {
        let mut candidates: Vec<usize> = clause
            .literals()
            .iter()
            .map(|l| l.index())
            .filter(|&g| !self.is_frozen(g))
            .collect();
        candidates.sort_unstable();
        candidates.dedup();
        if candidates.is_empty() {
            return None;
        }

        if rng.random::<f64>() < self.repair.noise {
            return Some(candidates[rng.random_range(0..candidates.len())]);
        }

        let mut best = Vec::with_capacity(candidates.len());
        let mut best_breaks = usize::MAX;
        for gene in candidates {
            let breaks = self.index.break_count(&self.model, chromosome, gene);
            if breaks < best_breaks {
                best_breaks = breaks;
                best.clear();
                best.push(gene);
            } else if breaks == best_breaks {
                best.push(gene);
            }
        }
        Some(best[rng.random_range(0..best.len())])
    }

    fn is_frozen(&self, gene: usize) -> bool {
        self.fixed.as_ref().is_some_and(|f| f[gene].is_some())
    }
}

/// Forces core and dead features to their values; returns genes changed.
fn pin_fixed(chromosome: &mut Chromosome, fixed: &[Option<bool>]) -> usize {
    let mut changed = 0;
    for (gene, forced) in chromosome.genes_mut().iter_mut().zip(fixed) {
        if let Some(value) = *forced {
            if *gene != value {
                *gene = value;
                changed += 1;
            }
        }
    }
    changed
}

// ============================================================================
// Dispatch
// ============================================================================

/// The mutation operator attached to an algorithm descriptor.
#[derive(Debug, Clone)]
pub enum Mutation {
    BitFlip(BitFlipMutation),
    SatAware(SatAwareMutation),
}

impl Mutation {
    pub fn probability(&self) -> f64 {
        match self {
            Mutation::BitFlip(m) => m.probability(),
            Mutation::SatAware(m) => m.probability(),
        }
    }

    /// Whether the operator repairs offspring against the feature model.
    pub fn is_constraint_aware(&self) -> bool {
        matches!(self, Mutation::SatAware(_))
    }

    /// Mutates a bare chromosome.
    pub fn mutate<R: Rng>(
        &self,
        chromosome: &mut Chromosome,
        rng: &mut R,
    ) -> Result<MutationOutcome, OperandError> {
        match self {
            Mutation::BitFlip(m) => m.execute(chromosome, rng).map(MutationOutcome::unchecked),
            Mutation::SatAware(m) => m.execute(chromosome, rng),
        }
    }

    /// Mutates a solution, flagging it when repair was exhausted and
    /// discarding its evaluation when the chromosome changed.
    pub fn apply<R: Rng>(
        &self,
        solution: &mut Solution,
        rng: &mut R,
    ) -> Result<MutationOutcome, OperandError> {
        let outcome = self.mutate(&mut solution.chromosome, rng)?;
        solution.repair_exhausted = outcome.bound_exceeded();
        if outcome.changed() {
            solution.invalidate();
        }
        Ok(outcome)
    }
}

impl From<BitFlipMutation> for Mutation {
    fn from(m: BitFlipMutation) -> Self {
        Mutation::BitFlip(m)
    }
}

impl From<SatAwareMutation> for Mutation {
    fn from(m: SatAwareMutation) -> Self {
        Mutation::SatAware(m)
    }
}
