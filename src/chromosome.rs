//! Binary feature-selection chromosome.
//!
//! Gene `i` (0-based) encodes whether feature `i + 1` (DIMACS numbering)
//! is part of the product configuration.

use std::fmt;
use std::ops::Index;

use crate::error::OperandError;

/// A product configuration: one boolean gene per feature.
///
/// The length is fixed for the lifetime of a run and shared by every
/// individual in a population. Operators check lengths on entry and report
/// mismatches as [`OperandError`].
///
/// # Examples
///
/// ```
/// use spl_moea::Chromosome;
///
/// let c = Chromosome::from_bits(&[1, 0, 1]);
/// assert_eq!(c.len(), 3);
/// assert!(c.is_selected(1));
/// assert!(!c.is_selected(2));
/// assert_eq!(c.to_string(), "101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from explicit genes.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Creates a chromosome of `len` deselected features.
    pub fn zeros(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    /// Creates a chromosome from `0`/non-zero bits.
    pub fn from_bits(bits: &[u8]) -> Self {
        bits.iter().map(|&b| b != 0).collect()
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene at 0-based position `index`.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.genes.get(index).copied()
    }

    /// Whether the 1-based DIMACS `feature` is selected.
    ///
    /// # Panics
    /// Panics if `feature` is 0 or exceeds the chromosome length.
    pub fn is_selected(&self, feature: usize) -> bool {
        self.genes[feature - 1]
    }

    /// Sets the gene at 0-based position `index`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.genes[index] = value;
    }

    /// Flips the gene at 0-based position `index`.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Returns the bitwise complement.
    pub fn complement(&self) -> Self {
        self.genes.iter().map(|&g| !g).collect()
    }

    /// Number of selected features.
    pub fn count_selected(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// Fails if the lengths differ.
    pub fn hamming_distance(&self, other: &Self) -> Result<usize, OperandError> {
        ensure_same_length(self, other)?;
        Ok(self
            .genes
            .iter()
            .zip(&other.genes)
            .filter(|(a, b)| a != b)
            .count())
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.genes
    }

    /// Fails with [`OperandError::EmptyChromosome`] for a zero-length chromosome.
    pub fn ensure_non_empty(&self) -> Result<(), OperandError> {
        if self.genes.is_empty() {
            return Err(OperandError::EmptyChromosome);
        }
        Ok(())
    }
}

/// Fails unless both chromosomes are non-empty and of equal length.
pub(crate) fn ensure_same_length(a: &Chromosome, b: &Chromosome) -> Result<(), OperandError> {
    if a.len() != b.len() {
        return Err(OperandError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    a.ensure_non_empty()
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

impl FromIterator<bool> for Chromosome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.genes[index]
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}
