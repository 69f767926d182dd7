//! Assembly request.
//!
//! [`SearchConfig`] names a variant and carries optional overrides. Unset
//! values take the variant's defaults when the
//! [`Assembler`](super::Assembler) resolves the request.

use std::sync::Arc;
use std::time::Duration;

use super::types::{Budget, Variant};
use crate::error::ConfigError;
use crate::model::FeatureModel;
use crate::operators::{Comparator, RepairConfig, SelectionParams};

/// Everything needed to assemble one search.
///
/// # Builder Pattern
///
/// ```
/// use std::time::Duration;
/// use spl_moea::assembler::{Budget, SearchConfig, Variant};
///
/// let config = SearchConfig::new(Variant::Ibea)
///     .with_population_size(200)
///     .with_max_runtime(Duration::from_secs(30))
///     .with_mutation_probability(0.01);
///
/// assert_eq!(config.budget(), Ok(Budget::MaxRuntime(Duration::from_secs(30))));
/// assert!(SearchConfig::named("unknown").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub variant: Variant,

    /// Population size; `None` uses the variant default.
    pub population_size: Option<usize>,

    /// Archive size; `None` uses the variant default.
    pub archive_size: Option<usize>,

    /// Evaluation budget. Mutually exclusive with `max_runtime`.
    pub max_evaluations: Option<u64>,

    /// Wall-clock budget. Mutually exclusive with `max_evaluations`.
    pub max_runtime: Option<Duration>,

    /// Crossover probability; `None` uses the variant default.
    pub crossover_probability: Option<f64>,

    /// Per-gene mutation probability; `None` uses the variant default.
    pub mutation_probability: Option<f64>,

    /// Tournament comparator. Defaults to scalar fitness.
    pub selection: SelectionParams,

    /// Repair bounds for constraint-aware variants.
    pub repair: RepairConfig,

    /// Chromosome length the search will use.
    pub feature_count: Option<usize>,

    /// Constraints for constraint-aware variants.
    pub feature_model: Option<Arc<FeatureModel>>,
}

impl SearchConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            population_size: None,
            archive_size: None,
            max_evaluations: None,
            max_runtime: None,
            crossover_probability: None,
            mutation_probability: None,
            selection: SelectionParams::default(),
            repair: RepairConfig::default(),
            feature_count: None,
            feature_model: None,
        }
    }

    /// Starts from a variant name; unknown names are rejected.
    pub fn named(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }

    pub fn with_archive_size(mut self, n: usize) -> Self {
        self.archive_size = Some(n);
        self
    }

    pub fn with_max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = Some(n);
        self
    }

    pub fn with_max_runtime(mut self, runtime: Duration) -> Self {
        self.max_runtime = Some(runtime);
        self
    }

    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = Some(p);
        self
    }

    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = Some(p);
        self
    }

    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.selection = SelectionParams::new(comparator);
        self
    }

    pub fn with_selection(mut self, selection: SelectionParams) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_repair(mut self, repair: RepairConfig) -> Self {
        self.repair = repair;
        self
    }

    /// Attaches the feature model and the chromosome length it must match.
    pub fn with_feature_model(mut self, feature_count: usize, model: Arc<FeatureModel>) -> Self {
        self.feature_count = Some(feature_count);
        self.feature_model = Some(model);
        self
    }

    /// Resolves the budget; see [`Budget::from_limits`].
    pub fn budget(&self) -> Result<Budget, ConfigError> {
        Budget::from_limits(self.max_evaluations, self.max_runtime)
    }
}
