//! Literals and clauses in DIMACS numbering.

use std::fmt;

use crate::chromosome::Chromosome;
use crate::error::ConfigError;

/// A signed, 1-based feature reference.
///
/// `3` requires feature 3 to be selected, `-3` requires it to be deselected.
/// Zero is not a literal and cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Literal(i32);

impl Literal {
    /// Returns `None` for zero.
    pub fn new(value: i32) -> Option<Self> {
        (value != 0).then_some(Self(value))
    }

    /// The raw DIMACS value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// The 1-based feature this literal refers to.
    pub fn feature(self) -> usize {
        self.0.unsigned_abs() as usize
    }

    /// The 0-based gene position of [`feature`](Self::feature).
    pub fn index(self) -> usize {
        self.feature() - 1
    }

    /// Whether the literal requires the feature to be selected.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Whether the literal holds under `chromosome`.
    ///
    /// A literal beyond the chromosome's length never holds.
    pub fn holds(self, chromosome: &Chromosome) -> bool {
        chromosome.get(self.index()) == Some(self.is_positive())
    }
}

impl TryFrom<i32> for Literal {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ConfigError::ZeroLiteral)
    }
}

impl From<Literal> for i32 {
    fn from(literal: Literal) -> Self {
        literal.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A disjunction of literals.
///
/// # Examples
///
/// ```
/// use spl_moea::{Chromosome, model::Clause};
///
/// // feature 1 OR NOT feature 2
/// let clause = Clause::try_from(vec![1, -2]).unwrap();
/// assert!(Clause::try_from(vec![1, 0]).is_err());
/// assert!(clause.is_satisfied_by(&Chromosome::from_bits(&[0, 0])));
/// assert!(!clause.is_satisfied_by(&Chromosome::from_bits(&[0, 1])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether at least one literal holds under `chromosome`.
    pub fn is_satisfied_by(&self, chromosome: &Chromosome) -> bool {
        self.literals.iter().any(|lit| lit.holds(chromosome))
    }

    /// Whether the clause would hold if the gene at `index` were flipped.
    pub(crate) fn is_satisfied_with_flip(&self, chromosome: &Chromosome, index: usize) -> bool {
        self.literals.iter().any(|lit| match chromosome.get(lit.index()) {
            Some(gene) => (gene ^ (lit.index() == index)) == lit.is_positive(),
            None => false,
        })
    }
}

impl TryFrom<Vec<i32>> for Clause {
    type Error = ConfigError;

    /// Fails with [`ConfigError::ZeroLiteral`] if any value is zero.
    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        values
            .into_iter()
            .map(Literal::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(value: i32) -> Literal {
        Literal::new(value).unwrap()
    }

    fn clause(values: Vec<i32>) -> Clause {
        Clause::try_from(values).unwrap()
    }

    #[test]
    fn test_literal_accessors() {
        let pos = lit(4);
        let neg = lit(-4);
        assert_eq!(pos.feature(), 4);
        assert_eq!(neg.feature(), 4);
        assert_eq!(neg.index(), 3);
        assert!(pos.is_positive());
        assert!(!neg.is_positive());
    }

    #[test]
    fn test_literal_holds() {
        let c = Chromosome::from_bits(&[1, 0]);
        assert!(lit(1).holds(&c));
        assert!(!lit(-1).holds(&c));
        assert!(lit(-2).holds(&c));
    }

    #[test]
    fn test_zero_literal_rejected() {
        assert_eq!(Literal::new(0), None);
        assert_eq!(Literal::try_from(0), Err(ConfigError::ZeroLiteral));
        assert_eq!(Clause::try_from(vec![2, 0, -1]), Err(ConfigError::ZeroLiteral));
        assert_eq!(i32::from(lit(-7)), -7);
    }

    #[test]
    fn test_literal_beyond_chromosome_does_not_hold() {
        let short = Chromosome::from_bits(&[1, 1]);
        assert!(!lit(5).holds(&short));
        assert!(!lit(-5).holds(&short));
        assert!(!clause(vec![5, -9]).is_satisfied_by(&short));
        assert!(clause(vec![5, 1]).is_satisfied_by(&short));
        assert!(!clause(vec![5]).is_satisfied_with_flip(&short, 0));
    }

    #[test]
    fn test_clause_satisfaction() {
        let clause = clause(vec![1, -2]);
        assert!(clause.is_satisfied_by(&Chromosome::from_bits(&[1, 1])));
        assert!(!clause.is_satisfied_by(&Chromosome::from_bits(&[0, 1])));
    }

    #[test]
    fn test_satisfied_with_flip() {
        let clause = clause(vec![1, -2]);
        let c = Chromosome::from_bits(&[0, 1]);
        assert!(clause.is_satisfied_with_flip(&c, 0));
        assert!(clause.is_satisfied_with_flip(&c, 1));

        let ok = Chromosome::from_bits(&[1, 1]);
        assert!(!clause.is_satisfied_with_flip(&ok, 0));
    }
}
