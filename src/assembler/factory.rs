//! Descriptor assembly.

use std::sync::Arc;
use std::time::Duration;

use super::config::SearchConfig;
use super::descriptor::AlgorithmDescriptor;
use super::types::Variant;
use crate::error::ConfigError;
use crate::model::FeatureModel;
use crate::operators::{
    BinaryTournament, BitFlipMutation, CrossoverParams, Mutation, MutationParams,
    SatAwareMutation, SinglePointCrossover,
};

/// Builds [`AlgorithmDescriptor`]s.
///
/// Assembly validates the whole request before returning: a descriptor is
/// either complete or not produced at all.
///
/// # Usage
///
/// ```
/// use spl_moea::assembler::{Assembler, Budget, Variant};
///
/// let descriptor = Assembler::nsga2(1000).unwrap();
/// assert_eq!(descriptor.variant(), Variant::Nsga2);
/// assert_eq!(descriptor.population_size(), 100);
/// assert_eq!(descriptor.budget(), Budget::MaxEvaluations(1000));
/// assert!((descriptor.mutation().probability() - 0.05).abs() < 1e-12);
/// assert!((descriptor.crossover().probability() - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Assembler;

impl Assembler {
    /// Resolves `config` against its variant's defaults and wires the
    /// operators.
    pub fn assemble(config: &SearchConfig) -> Result<AlgorithmDescriptor, ConfigError> {
        let variant = config.variant;
        let defaults = variant.defaults();

        let budget = config.budget()?;
        if variant.requires_runtime_budget() && budget.max_runtime().is_none() {
            return Err(ConfigError::RuntimeBudgetRequired(variant.name()));
        }

        let population_size = config.population_size.unwrap_or(defaults.population_size);
        if population_size == 0 {
            return Err(ConfigError::NonPositivePopulation);
        }
        let archive_size = config.archive_size.unwrap_or(defaults.archive_size);
        if archive_size == 0 {
            return Err(ConfigError::NonPositiveArchive);
        }

        let crossover = SinglePointCrossover::new(CrossoverParams::new(
            config
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
        ))?;
        let mutation_params = MutationParams::new(
            config
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
        );
        let selection = BinaryTournament::new(config.selection)?;

        let mutation: Mutation = if variant.is_constraint_aware() {
            let (Some(feature_count), Some(model)) =
                (config.feature_count, config.feature_model.clone())
            else {
                return Err(ConfigError::MissingFeatureModel(variant.name()));
            };
            SatAwareMutation::new(mutation_params, feature_count, model, config.repair)?.into()
        } else {
            BitFlipMutation::new(mutation_params)?.into()
        };

        log::debug!(
            "assembled {variant}: population={population_size} archive={archive_size} \
             budget={budget:?} crossover={} mutation={} constraint_aware={} comparator={:?}",
            crossover.probability(),
            mutation.probability(),
            mutation.is_constraint_aware(),
            selection.comparator(),
        );

        Ok(AlgorithmDescriptor {
            variant,
            population_size,
            archive_size,
            budget,
            crossover,
            mutation,
            selection,
        })
    }

    /// Dominance-based NSGA-II with an evaluation budget.
    pub fn nsga2(max_evaluations: u64) -> Result<AlgorithmDescriptor, ConfigError> {
        Self::assemble(&SearchConfig::new(Variant::Nsga2).with_max_evaluations(max_evaluations))
    }

    /// Dominance-based SPEA2 with an evaluation budget.
    pub fn spea2(max_evaluations: u64) -> Result<AlgorithmDescriptor, ConfigError> {
        Self::assemble(&SearchConfig::new(Variant::Spea2).with_max_evaluations(max_evaluations))
    }

    /// Indicator-based IBEA with an evaluation budget.
    pub fn ibea(max_evaluations: u64) -> Result<AlgorithmDescriptor, ConfigError> {
        Self::assemble(&SearchConfig::new(Variant::Ibea).with_max_evaluations(max_evaluations))
    }

    /// IBEA over a seeded initial population, with an evaluation budget.
    pub fn sip_ibea(max_evaluations: u64) -> Result<AlgorithmDescriptor, ConfigError> {
        Self::assemble(&SearchConfig::new(Variant::SipIbea).with_max_evaluations(max_evaluations))
    }

    /// SAT-aware IBEA for `feature_count`-gene chromosomes constrained by
    /// `model`, with an evaluation budget.
    pub fn sat_ibea(
        max_evaluations: u64,
        feature_count: usize,
        model: Arc<FeatureModel>,
    ) -> Result<AlgorithmDescriptor, ConfigError> {
        Self::assemble(
            &SearchConfig::new(Variant::SatIbea)
                .with_max_evaluations(max_evaluations)
                .with_feature_model(feature_count, model),
        )
    }

    /// SAT-aware IBEA bounded by a wall-clock `deadline`.
    pub fn sat_ibea_with_deadline(
        deadline: Duration,
        feature_count: usize,
        model: Arc<FeatureModel>,
    ) -> Result<AlgorithmDescriptor, ConfigError> {
        Self::assemble(
            &SearchConfig::new(Variant::SatIbea)
                .with_max_runtime(deadline)
                .with_feature_model(feature_count, model),
        )
    }

    /// Anytime IBEA bounded by a wall-clock `deadline`.
    pub fn time_limited_ibea(deadline: Duration) -> Result<AlgorithmDescriptor, ConfigError> {
        Self::assemble(&SearchConfig::new(Variant::TimeLimitedIbea).with_max_runtime(deadline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::{Budget, Family};
    use crate::chromosome::Chromosome;
    use crate::operators::{Comparator, RepairConfig, SelectionParams};
    use crate::random::create_rng;
    use crate::solution::Solution;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn model10() -> Arc<FeatureModel> {
        Arc::new(FeatureModel::from_dimacs_clauses(10, vec![vec![1, -2]]).unwrap())
    }

    #[test]
    fn test_nsga2_exact_defaults() {
        let d = Assembler::assemble(
            &SearchConfig::new(Variant::Nsga2)
                .with_population_size(100)
                .with_max_evaluations(1000),
        )
        .unwrap();
        assert_eq!(d.population_size(), 100);
        assert_eq!(d.archive_size(), 100);
        assert_eq!(d.budget(), Budget::MaxEvaluations(1000));
        assert!(approx(d.mutation().probability(), 0.05));
        assert!(approx(d.crossover().probability(), 0.9));
        assert!(!d.mutation().is_constraint_aware());
        assert_eq!(d.family(), Family::DominanceBased);
        assert_eq!(d.selection().comparator(), Comparator::Fitness);
    }

    #[test]
    fn test_named_factories() {
        assert_eq!(Assembler::spea2(10).unwrap().variant(), Variant::Spea2);
        assert_eq!(Assembler::ibea(10).unwrap().family(), Family::IndicatorBased);
        assert_eq!(Assembler::sip_ibea(10).unwrap().population_size(), 100);
    }

    #[test]
    fn test_sat_ibea_defaults() {
        let d = Assembler::sat_ibea(5000, 10, model10()).unwrap();
        assert_eq!(d.population_size(), 300);
        assert_eq!(d.archive_size(), 300);
        assert!(approx(d.mutation().probability(), 0.001));
        assert!(approx(d.crossover().probability(), 0.05));
        assert!(d.mutation().is_constraint_aware());
    }

    #[test]
    fn test_sat_ibea_with_deadline() {
        let d = Assembler::sat_ibea_with_deadline(Duration::from_secs(6), 10, model10()).unwrap();
        assert_eq!(d.budget(), Budget::MaxRuntime(Duration::from_secs(6)));
        assert!(d.mutation().is_constraint_aware());
    }

    #[test]
    fn test_time_limited_ibea() {
        let d = Assembler::time_limited_ibea(Duration::from_millis(500)).unwrap();
        assert_eq!(d.population_size(), 300);
        assert_eq!(d.budget().max_runtime(), Some(Duration::from_millis(500)));
        assert!(!d.mutation().is_constraint_aware());
    }

    #[test]
    fn test_time_limited_requires_runtime() {
        let err = Assembler::assemble(
            &SearchConfig::new(Variant::TimeLimitedIbea).with_max_evaluations(100),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::RuntimeBudgetRequired("ibea-time-limited"));
    }

    #[test]
    fn test_both_budgets_rejected() {
        let err = Assembler::assemble(
            &SearchConfig::new(Variant::Nsga2)
                .with_max_evaluations(1000)
                .with_max_runtime(Duration::from_secs(1)),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingBudget { .. }));
    }

    #[test]
    fn test_missing_budget_rejected() {
        assert_eq!(
            Assembler::assemble(&SearchConfig::new(Variant::Ibea)).unwrap_err(),
            ConfigError::MissingBudget
        );
    }

    #[test]
    fn test_non_positive_sizes_rejected() {
        let base = SearchConfig::new(Variant::Ibea).with_max_evaluations(10);
        assert_eq!(
            Assembler::assemble(&base.clone().with_population_size(0)).unwrap_err(),
            ConfigError::NonPositivePopulation
        );
        assert_eq!(
            Assembler::assemble(&base.with_archive_size(0)).unwrap_err(),
            ConfigError::NonPositiveArchive
        );
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = Assembler::assemble(
            &SearchConfig::new(Variant::Nsga2)
                .with_max_evaluations(10)
                .with_mutation_probability(1.2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidProbability {
                name: "mutation",
                value: 1.2
            }
        );
    }

    #[test]
    fn test_missing_comparator_rejected() {
        let err = Assembler::assemble(
            &SearchConfig::new(Variant::Nsga2)
                .with_max_evaluations(10)
                .with_selection(SelectionParams { comparator: None }),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingComparator);
    }

    #[test]
    fn test_sat_ibea_requires_model() {
        let err = Assembler::assemble(&SearchConfig::new(Variant::SatIbea).with_max_evaluations(10))
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingFeatureModel("sat-ibea"));
    }

    #[test]
    fn test_sat_ibea_feature_count_mismatch() {
        let err = Assembler::sat_ibea(10, 12, model10()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::FeatureCountMismatch {
                expected: 12,
                actual: 10
            }
        );
    }

    #[test]
    fn test_invalid_repair_config_rejected() {
        let err = Assembler::assemble(
            &SearchConfig::new(Variant::SatIbea)
                .with_max_evaluations(10)
                .with_feature_model(10, model10())
                .with_repair(RepairConfig::default().with_noise(-1.0)),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidRepairNoise(-1.0));
    }

    #[test]
    fn test_overrides_apply() {
        let d = Assembler::assemble(
            &SearchConfig::new(Variant::Spea2)
                .with_max_evaluations(10)
                .with_population_size(40)
                .with_archive_size(20)
                .with_crossover_probability(0.7)
                .with_mutation_probability(0.01)
                .with_comparator(Comparator::Dominance),
        )
        .unwrap();
        assert_eq!(d.population_size(), 40);
        assert_eq!(d.archive_size(), 20);
        assert!(approx(d.crossover().probability(), 0.7));
        assert!(approx(d.mutation().probability(), 0.01));
        assert_eq!(d.selection().comparator(), Comparator::Dominance);
    }

    #[test]
    fn test_reproduce_yields_unevaluated_offspring() {
        let d = Assembler::nsga2(100).unwrap();
        let population: Vec<Solution> = (0..6u8)
            .map(|i| {
                let bits: Vec<u8> = (0..8).map(|j| (i >> (j % 3)) & 1).collect();
                Solution::evaluated(Chromosome::from_bits(&bits), vec![i as f64], i as f64)
            })
            .collect();
        let mut rng = create_rng(42);

        for _ in 0..50 {
            let (a, b) = d.reproduce(&population, &mut rng).unwrap();
            assert_eq!(a.chromosome.len(), 8);
            assert_eq!(b.chromosome.len(), 8);
            assert!(!a.is_evaluated());
            assert!(!b.is_evaluated());
        }

        let pool = d.offspring(&population, 5, &mut rng).unwrap();
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_reproduce_empty_population() {
        let d = Assembler::ibea(100).unwrap();
        assert!(d.reproduce(&[], &mut create_rng(1)).is_err());
    }

    #[test]
    fn test_deadline_only_for_runtime_budget() {
        let start = std::time::Instant::now();
        let timed = Assembler::time_limited_ibea(Duration::from_secs(2)).unwrap();
        assert_eq!(timed.deadline_from(start), Some(start + Duration::from_secs(2)));
        assert_eq!(Assembler::ibea(10).unwrap().deadline_from(start), None);
    }
}
