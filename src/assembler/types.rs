//! Algorithm variants and search budgets.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::error::ConfigError;

/// How a variant ranks individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Pareto dominance ranking (NSGA-II, SPEA2).
    DominanceBased,
    /// Scalar quality-indicator fitness (IBEA and its derivatives).
    IndicatorBased,
}

/// Parameter defaults of a variant, applied where the caller sets nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantDefaults {
    pub population_size: usize,
    pub archive_size: usize,
    pub mutation_probability: f64,
    pub crossover_probability: f64,
}

const STANDARD: VariantDefaults = VariantDefaults {
    population_size: 100,
    archive_size: 100,
    mutation_probability: 0.05,
    crossover_probability: 0.9,
};

/// Near-disjoint crossover/mutation balance for heavily constrained spaces.
const CONSTRAINED: VariantDefaults = VariantDefaults {
    population_size: 300,
    archive_size: 300,
    mutation_probability: 0.001,
    crossover_probability: 0.05,
};

/// Evolutionary algorithm variant selected by the assembler.
///
/// # Examples
///
/// ```
/// use spl_moea::assembler::{Family, Variant};
///
/// let v: Variant = "SAT_IBEA".parse().unwrap();
/// assert_eq!(v, Variant::SatIbea);
/// assert_eq!(v.family(), Family::IndicatorBased);
/// assert!(v.is_constraint_aware());
/// assert!("moead".parse::<Variant>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// NSGA-II: non-dominated sorting with crowding distance.
    Nsga2,
    /// SPEA2: strength Pareto with a bounded archive.
    Spea2,
    /// IBEA: indicator-based selection.
    Ibea,
    /// IBEA started from a seeded initial population.
    SipIbea,
    /// IBEA with SAT-aware mutation for heavily constrained models.
    SatIbea,
    /// IBEA bounded by wall-clock time, for anytime use.
    TimeLimitedIbea,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Nsga2,
        Variant::Spea2,
        Variant::Ibea,
        Variant::SipIbea,
        Variant::SatIbea,
        Variant::TimeLimitedIbea,
    ];

    /// Canonical name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Variant::Nsga2 => "nsga2",
            Variant::Spea2 => "spea2",
            Variant::Ibea => "ibea",
            Variant::SipIbea => "sip-ibea",
            Variant::SatIbea => "sat-ibea",
            Variant::TimeLimitedIbea => "ibea-time-limited",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Variant::Nsga2 | Variant::Spea2 => Family::DominanceBased,
            Variant::Ibea | Variant::SipIbea | Variant::SatIbea | Variant::TimeLimitedIbea => {
                Family::IndicatorBased
            }
        }
    }

    pub fn defaults(self) -> VariantDefaults {
        match self {
            Variant::Nsga2 | Variant::Spea2 | Variant::Ibea | Variant::SipIbea => STANDARD,
            Variant::SatIbea | Variant::TimeLimitedIbea => CONSTRAINED,
        }
    }

    /// Whether the variant mutates with constraint repair and therefore
    /// needs a feature model.
    pub fn is_constraint_aware(self) -> bool {
        self == Variant::SatIbea
    }

    /// Whether the variant only accepts a wall-clock budget.
    pub fn requires_runtime_budget(self) -> bool {
        self == Variant::TimeLimitedIbea
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "nsga2" | "nsga-ii" | "nsgaii" => Ok(Variant::Nsga2),
            "spea2" | "spea-2" => Ok(Variant::Spea2),
            "ibea" => Ok(Variant::Ibea),
            "sip-ibea" | "sipibea" => Ok(Variant::SipIbea),
            "sat-ibea" | "satibea" => Ok(Variant::SatIbea),
            "ibea-time-limited" | "time-limited-ibea" => Ok(Variant::TimeLimitedIbea),
            _ => Err(ConfigError::UnknownVariant(s.to_owned())),
        }
    }
}

/// Resource budget of a run: an evaluation count or a wall-clock duration.
///
/// The crate only records a runtime budget; the engine's loop enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Budget {
    MaxEvaluations(u64),
    MaxRuntime(Duration),
}

impl Budget {
    /// Resolves exactly one positive limit into a budget.
    ///
    /// Neither or both limits, or a zero limit, is a configuration error.
    pub fn from_limits(
        max_evaluations: Option<u64>,
        max_runtime: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        match (max_evaluations, max_runtime) {
            (None, None) => Err(ConfigError::MissingBudget),
            (Some(evaluations), Some(runtime)) => {
                Err(ConfigError::ConflictingBudget { evaluations, runtime })
            }
            (Some(0), None) => Err(ConfigError::NonPositiveEvaluations),
            (None, Some(runtime)) if runtime.is_zero() => Err(ConfigError::NonPositiveRuntime),
            (Some(evaluations), None) => Ok(Budget::MaxEvaluations(evaluations)),
            (None, Some(runtime)) => Ok(Budget::MaxRuntime(runtime)),
        }
    }

    pub fn max_evaluations(&self) -> Option<u64> {
        match *self {
            Budget::MaxEvaluations(n) => Some(n),
            Budget::MaxRuntime(_) => None,
        }
    }

    pub fn max_runtime(&self) -> Option<Duration> {
        match *self {
            Budget::MaxEvaluations(_) => None,
            Budget::MaxRuntime(d) => Some(d),
        }
    }

    /// The instant a run started at `start` must stop, for runtime budgets.
    pub fn deadline_from(&self, start: Instant) -> Option<Instant> {
        self.max_runtime().and_then(|d| start.checked_add(d))
    }
}
