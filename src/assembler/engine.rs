//! Contract for the external evolutionary engine.

use super::descriptor::AlgorithmDescriptor;
use crate::solution::Solution;

/// An engine that turns an [`AlgorithmDescriptor`] into a runnable search.
///
/// The engine owns the generational loop, population and archive handling,
/// ranking, indicator computation and objective evaluation. It drives the
/// descriptor's operators through [`AlgorithmDescriptor::reproduce`] and
/// enforces the descriptor's [`Budget`](super::Budget).
///
/// # Implementing
///
/// ```ignore
/// struct MyEngine { problem: MyProblem }
///
/// impl SearchEngine for MyEngine {
///     type Search = MyRun;
///     type Error = MyError;
///
///     fn create_algorithm(&self, d: AlgorithmDescriptor) -> Result<MyRun, MyError> {
///         MyRun::new(d, &self.problem)
///     }
///
///     fn run(&self, search: &mut MyRun) -> Result<Vec<Solution>, MyError> {
///         search.evolve_until_budget()
///     }
/// }
/// ```
pub trait SearchEngine {
    /// Engine-specific executable search.
    type Search;

    /// Engine-specific failure.
    type Error;

    /// Instantiates a search from a validated descriptor.
    fn create_algorithm(&self, descriptor: AlgorithmDescriptor)
        -> Result<Self::Search, Self::Error>;

    /// Runs the search to budget exhaustion and returns its final
    /// non-dominated set.
    fn run(&self, search: &mut Self::Search) -> Result<Vec<Solution>, Self::Error>;
}
