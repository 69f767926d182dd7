//! Feature-model constraints.
//!
//! A product line's valid configurations are described by a CNF clause set
//! over its features. This module holds that clause set and the
//! [`ConstraintOracle`] seam through which operators ask whether a
//! configuration is valid.
//!
//! # Key Types
//!
//! - [`FeatureModel`]: validated, immutable clause set; also the default oracle
//! - [`Clause`] / [`Literal`]: DIMACS-numbered disjunctions
//! - [`ConstraintOracle`]: satisfiability queries, pluggable for SAT solvers

mod clause;
mod feature_model;
pub(crate) mod index;
mod oracle;

pub use clause::{Clause, Literal};
pub use feature_model::FeatureModel;
pub use oracle::{ClauseId, ConstraintOracle};
