//! Algorithm assembly.
//!
//! Given a [`Variant`] and a [`Budget`], the [`Assembler`] resolves the
//! variant's parameter defaults, validates every value and wires the three
//! operators into an immutable [`AlgorithmDescriptor`]:
//!
//! | Variant | Population / archive | Mutation | Crossover | Mutation operator |
//! |---|---|---|---|---|
//! | NSGA-II, SPEA2, IBEA, SIP-IBEA | 100 / 100 | 0.05 | 0.9 | bit-flip |
//! | SAT-IBEA | 300 / 300 | 0.001 | 0.05 | SAT-aware |
//! | time-limited IBEA | 300 / 300 | 0.001 | 0.05 | bit-flip |
//!
//! Running the descriptor is the job of a [`SearchEngine`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use spl_moea::assembler::{Assembler, SearchConfig, Variant};
//! use spl_moea::model::FeatureModel;
//!
//! let model = Arc::new(FeatureModel::from_dimacs_clauses(3, vec![vec![1, -2]]).unwrap());
//! let config = SearchConfig::new(Variant::SatIbea)
//!     .with_max_evaluations(10_000)
//!     .with_feature_model(3, model);
//!
//! let descriptor = Assembler::assemble(&config).unwrap();
//! assert!(descriptor.mutation().is_constraint_aware());
//! assert_eq!(descriptor.population_size(), 300);
//! ```

mod config;
mod descriptor;
mod engine;
mod factory;
mod types;

pub use config::SearchConfig;
pub use descriptor::AlgorithmDescriptor;
pub use engine::SearchEngine;
pub use factory::Assembler;
pub use types::{Budget, Family, Variant, VariantDefaults};
