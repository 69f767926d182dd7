//! Operator pipeline and algorithm assembly for multi-objective search over
//! software product line configurations.
//!
//! A product configuration is a binary [`Chromosome`] with one gene per
//! feature; its validity is defined by a CNF [`FeatureModel`](model::FeatureModel).
//! This crate provides:
//!
//! - **Operators**: single-point crossover, bit-flip mutation, SAT-aware
//!   mutation with bounded clause-directed repair, and binary tournament
//!   selection by scalar fitness or Pareto dominance.
//! - **Constraint model**: DIMACS clauses, the [`ConstraintOracle`](model::ConstraintOracle)
//!   seam for SAT-backed validity checks, and core/dead feature analysis.
//! - **Assembly**: the [`Assembler`] turns a variant name and a budget into
//!   a fully wired, immutable [`AlgorithmDescriptor`] for NSGA-II, SPEA2,
//!   IBEA, SIP-IBEA, SAT-IBEA or time-limited IBEA.
//!
//! # Architecture
//!
//! The evolutionary loop itself (population and archive management, ranking,
//! indicator computation, objective evaluation) belongs to an external engine
//! implementing [`SearchEngine`]. Operators hold no mutable state and take the
//! RNG per call, so an engine may invoke them concurrently on different
//! individuals.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use spl_moea::assembler::Assembler;
//! use spl_moea::model::{ConstraintOracle, FeatureModel};
//! use spl_moea::random::create_rng;
//! use spl_moea::{Chromosome, Solution};
//!
//! // Feature 2 requires feature 1.
//! let model = Arc::new(FeatureModel::from_dimacs_clauses(4, vec![vec![1, -2]]).unwrap());
//! let descriptor = Assembler::sat_ibea(1_000, 4, model.clone()).unwrap();
//!
//! let population: Vec<Solution> = ["1100", "1000", "0011", "1111"]
//!     .iter()
//!     .map(|s| Chromosome::from_bits(&s.bytes().map(|b| b - b'0').collect::<Vec<_>>()))
//!     .map(Solution::new)
//!     .collect();
//!
//! let mut rng = create_rng(42);
//! let (a, b) = descriptor.reproduce(&population, &mut rng).unwrap();
//! for child in [a, b] {
//!     assert!(model.is_satisfiable(&child.chromosome) || child.repair_exhausted);
//! }
//! ```

pub mod assembler;
pub mod chromosome;
pub mod error;
pub mod model;
pub mod operators;
pub mod random;
pub mod solution;

pub use assembler::{AlgorithmDescriptor, Assembler, Budget, SearchConfig, SearchEngine, Variant};
pub use chromosome::Chromosome;
pub use error::{ConfigError, Error, OperandError};
pub use solution::Solution;
