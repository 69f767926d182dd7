//! Clause occurrence index used by constraint repair.

use super::feature_model::FeatureModel;
use super::oracle::ClauseId;
use crate::chromosome::Chromosome;

/// For each 0-based gene, the clauses mentioning that feature.
///
/// Built once from a [`FeatureModel`] and read-only afterwards, so it can be
/// shared by concurrent mutation calls without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OccurrenceIndex {
    by_gene: Vec<Vec<ClauseId>>,
}

impl OccurrenceIndex {
    pub(crate) fn build(model: &FeatureModel) -> Self {
        let mut by_gene: Vec<Vec<ClauseId>> = vec![Vec::new(); model.feature_count()];
        for (id, clause) in model.clauses().iter().enumerate() {
            for lit in clause.literals() {
                let slot = &mut by_gene[lit.index()];
                // a feature may occur twice in one clause
                if slot.last() != Some(&id) {
                    slot.push(id);
                }
            }
        }
        Self { by_gene }
    }

    pub(crate) fn clauses_of(&self, gene: usize) -> &[ClauseId] {
        &self.by_gene[gene]
    }

    /// Number of currently satisfied clauses that flipping `gene` would break.
    pub(crate) fn break_count(
        &self,
        model: &FeatureModel,
        chromosome: &Chromosome,
        gene: usize,
    ) -> usize {
        self.clauses_of(gene)
            .iter()
            .filter_map(|&id| model.clause(id))
            .filter(|c| {
                c.is_satisfied_by(chromosome) && !c.is_satisfied_with_flip(chromosome, gene)
            })
            .count()
    }
}
