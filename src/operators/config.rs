//! Operator parameters.
//!
//! Each operator receives its parameters by value at construction and never
//! changes them afterwards. Constructors call `validate()` so that an
//! operator holding out-of-range parameters cannot exist.

use super::selection::Comparator;
use crate::error::ConfigError;

/// Rejects NaN and values outside `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

/// Parameters of [`SinglePointCrossover`](super::SinglePointCrossover).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossoverParams {
    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, copies of the parents are returned.
    pub probability: f64,
}

impl CrossoverParams {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("crossover", self.probability)
    }
}

impl Default for CrossoverParams {
    fn default() -> Self {
        Self { probability: 0.9 }
    }
}

/// Per-gene flip probability shared by both mutation operators.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationParams {
    /// Probability of flipping each gene independently (0.0–1.0).
    pub probability: f64,
}

impl MutationParams {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("mutation", self.probability)
    }
}

impl Default for MutationParams {
    fn default() -> Self {
        Self { probability: 0.05 }
    }
}

/// Parameters of [`BinaryTournament`](super::BinaryTournament).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionParams {
    /// Order used to decide each tournament. Required.
    pub comparator: Option<Comparator>,
}

impl SelectionParams {
    pub fn new(comparator: Comparator) -> Self {
        Self {
            comparator: Some(comparator),
        }
    }
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self::new(Comparator::Fitness)
    }
}

/// Bounds and heuristics of constraint repair in
/// [`SatAwareMutation`](super::SatAwareMutation).
///
/// # Examples
///
/// ```
/// use spl_moea::operators::RepairConfig;
///
/// let repair = RepairConfig::default()
///     .with_max_attempts(25)
///     .with_noise(0.0)
///     .with_freeze_fixed_features(true);
/// assert!(repair.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepairConfig {
    /// Maximum number of repair flips per mutation call.
    ///
    /// Zero disables repair: violating offspring are flagged immediately.
    pub max_attempts: usize,

    /// Probability of flipping a random feature of the chosen violated
    /// clause instead of the one that breaks the fewest satisfied clauses.
    ///
    /// 0.0 is pure greedy repair; some noise helps escape cycles between
    /// two clauses that keep breaking each other.
    pub noise: f64,

    /// Pin core and dead features (as found by unit propagation) to their
    /// forced values and never flip them.
    pub freeze_fixed_features: bool,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            noise: 0.2,
            freeze_fixed_features: false,
        }
    }
}

impl RepairConfig {
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_freeze_fixed_features(mut self, freeze: bool) -> Self {
        self.freeze_fixed_features = freeze;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(ConfigError::InvalidRepairNoise(self.noise));
        }
        Ok(())
    }
}
