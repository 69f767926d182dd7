//! Constraint oracle interface.

use std::fmt;

use crate::chromosome::Chromosome;

/// Position of a clause in its [`FeatureModel`](super::FeatureModel).
pub type ClauseId = usize;

/// Reports whether a configuration satisfies the feature-model constraints.
///
/// [`FeatureModel`](super::FeatureModel) implements this by evaluating its
/// clauses directly. A SAT-solver-backed oracle can be plugged into
/// [`SatAwareMutation`](crate::operators::SatAwareMutation) instead, provided
/// its clause ids index the same clause list.
///
/// Implementations are shared across concurrent operator invocations and
/// must not mutate shared state without their own synchronization.
pub trait ConstraintOracle: Send + Sync + fmt::Debug {
    /// Number of features the constraints range over.
    fn feature_count(&self) -> usize;

    /// Ids of the clauses that `chromosome` violates, in ascending order.
    fn violated_clauses(&self, chromosome: &Chromosome) -> Vec<ClauseId>;

    /// Whether `chromosome` satisfies every clause.
    fn is_satisfiable(&self, chromosome: &Chromosome) -> bool {
        self.violated_clauses(chromosome).is_empty()
    }
}
