//! Error taxonomy.
//!
//! Configuration problems are caught when a descriptor or operator is built;
//! malformed chromosomes and populations are caught when an operator runs.
//! Repair exhaustion is not an error: it is reported on the mutation outcome
//! and on the [`Solution`](crate::Solution).

use std::time::Duration;

/// Invalid, missing or inconsistent search parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown algorithm variant: {0:?}")]
    UnknownVariant(String),
    #[error("a budget is required: set either max_evaluations or max_runtime")]
    MissingBudget,
    #[error("max_evaluations ({evaluations}) and max_runtime ({runtime:?}) are mutually exclusive")]
    ConflictingBudget { evaluations: u64, runtime: Duration },
    #[error("max_evaluations must be positive")]
    NonPositiveEvaluations,
    #[error("max_runtime must be positive")]
    NonPositiveRuntime,
    #[error("variant {0} is wall-clock bounded and requires max_runtime")]
    RuntimeBudgetRequired(&'static str),
    #[error("population size must be positive")]
    NonPositivePopulation,
    #[error("archive size must be positive")]
    NonPositiveArchive,
    #[error("{name} probability must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("repair noise must lie in [0, 1], got {0}")]
    InvalidRepairNoise(f64),
    #[error("selection requires a comparator")]
    MissingComparator,
    #[error("variant {0} requires a feature model and its feature count")]
    MissingFeatureModel(&'static str),
    #[error("feature model must declare at least one feature")]
    EmptyFeatureModel,
    #[error("0 is not a DIMACS literal")]
    ZeroLiteral,
    #[error("clause {clause} is empty")]
    EmptyClause { clause: usize },
    #[error("clause {clause} references literal {literal} outside 1..={feature_count}")]
    InvalidLiteral {
        clause: usize,
        literal: i32,
        feature_count: usize,
    },
    #[error("feature count {expected} does not match constraint model with {actual} features")]
    FeatureCountMismatch { expected: usize, actual: usize },
}

/// Malformed operator input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperandError {
    #[error("chromosome must not be empty")]
    EmptyChromosome,
    #[error("parents differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("chromosome has {actual} genes but the feature model has {expected} features")]
    FeatureCountMismatch { expected: usize, actual: usize },
    #[error("cannot select from an empty population")]
    EmptyPopulation,
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("invalid operand: {0}")]
    InvalidOperand(#[from] OperandError),
}
