//! Genetic operators over binary feature-selection chromosomes.
//!
//! # Crossover
//!
//! - [`SinglePointCrossover`]: exchange tails at a uniformly drawn cut point
//!
//! # Mutation
//!
//! - [`BitFlipMutation`]: independent per-gene flips, no constraint awareness
//! - [`SatAwareMutation`]: bit-flip followed by bounded clause-directed repair
//! - [`Mutation`]: the variant attached to an algorithm descriptor
//!
//! # Selection
//!
//! - [`BinaryTournament`] with a [`Comparator`] (scalar fitness or Pareto dominance)
//!
//! All operators take `&self` and receive the RNG per call; none keeps
//! mutable state between invocations.

mod config;
mod crossover;
mod mutation;
mod selection;

pub use config::{CrossoverParams, MutationParams, RepairConfig, SelectionParams};
pub use crossover::{cross_at, SinglePointCrossover};
pub use mutation::{BitFlipMutation, Mutation, MutationOutcome, RepairStatus, SatAwareMutation};
pub use selection::{BinaryTournament, Comparator};
