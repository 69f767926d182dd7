//! Single-point crossover for binary chromosomes.

use rand::Rng;

use super::config::CrossoverParams;
use crate::chromosome::{ensure_same_length, Chromosome};
use crate::error::{ConfigError, OperandError};

/// Single-point recombination.
///
/// With probability `p` a cut point is drawn uniformly from `[1, L-1]` and
/// the parents exchange their tails; otherwise the parents are copied.
///
/// The operator holds only its parameters, so one instance can serve any
/// number of concurrent calls as long as each call gets its own RNG.
///
/// # Examples
///
/// ```
/// use spl_moea::Chromosome;
/// use spl_moea::operators::{CrossoverParams, SinglePointCrossover};
/// use spl_moea::random::create_rng;
///
/// let crossover = SinglePointCrossover::new(CrossoverParams::new(1.0)).unwrap();
/// let a = Chromosome::zeros(6);
/// let b = Chromosome::zeros(6).complement();
///
/// let (c1, c2) = crossover.execute(&a, &b, &mut create_rng(1)).unwrap();
/// assert_eq!(c1.len(), 6);
/// assert_eq!(c1.count_selected() + c2.count_selected(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinglePointCrossover {
    params: CrossoverParams,
}

impl SinglePointCrossover {
    pub fn new(params: CrossoverParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn probability(&self) -> f64 {
        self.params.probability
    }

    pub fn params(&self) -> CrossoverParams {
        self.params
    }

    /// Produces two offspring from two parents of equal, positive length.
    ///
    /// Length-1 parents have no interior cut point and are always copied.
    pub fn execute<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Result<(Chromosome, Chromosome), OperandError> {
        ensure_same_length(parent1, parent2)?;

        let n = parent1.len();
        if n < 2 || rng.random::<f64>() >= self.params.probability {
            return Ok((parent1.clone(), parent2.clone()));
        }

        let cut = rng.random_range(1..n);
        cross_at(parent1, parent2, cut)
    }
}

/// Exchanges the tails of two parents at `cut`.
///
/// The first child takes genes `[0, cut)` from `parent1` and the rest from
/// `parent2`; the second child is its mirror. A `cut` beyond the length is
/// treated as the length.
pub fn cross_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    cut: usize,
) -> Result<(Chromosome, Chromosome), OperandError> {
    ensure_same_length(parent1, parent2)?;

    let cut = cut.min(parent1.len());
    let (a, b) = (parent1.as_slice(), parent2.as_slice());

    let child1 = a[..cut].iter().chain(&b[cut..]).copied().collect();
    let child2 = b[..cut].iter().chain(&a[cut..]).copied().collect();
    Ok((child1, child2))
}
