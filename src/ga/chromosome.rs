//! A single candidate solution.
//!
//! A [`Chromosome`] is immutable: [`mutate`](Chromosome::mutate) and
//! [`mate`](Chromosome::mate) return new instances and leave the receiver
//! untouched. Fitness is computed once, at construction, against the
//! [`Target`] passed in.

use super::target::{codes_to_string, random_symbol, Target};
use crate::error::{GaError, Result};
use rand::Rng;
use std::fmt;

/// Sum of absolute symbol-code differences between `gene` and `target`.
///
/// This is an L1 distance, so it is symmetric in its arguments and 0 only
/// for identical sequences.
///
/// # Errors
/// [`GaError::LengthMismatch`] if the lengths differ.
///
/// # Examples
///
/// ```
/// use hello_ga::ga::fitness;
///
/// assert_eq!(fitness(b"AB", b"AB").unwrap(), 0);
/// assert_eq!(fitness(b"AC", b"AB").unwrap(), 1);
/// ```
pub fn fitness(gene: &[u8], target: &[u8]) -> Result<u64> {
    if gene.len() != target.len() {
        return Err(GaError::LengthMismatch {
            expected: target.len(),
            actual: gene.len(),
        });
    }
    Ok(l1_distance(gene, target))
}

fn l1_distance(a: &[u8], b: &[u8]) -> u64 {
    a.iter().zip(b).map(|(&x, &y)| u64::from(x.abs_diff(y))).sum()
}

/// A fixed-length gene plus its fitness against the run's target.
///
/// Lower fitness is better; 0 is an exact match. Populations order
/// chromosomes by fitness only, so two different genes with equal fitness
/// are tied and their relative order is whatever a stable sort leaves.
///
/// Serializable for reporting; rebuild from a saved gene with
/// [`from_gene`](Self::from_gene) so fitness is recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chromosome {
    gene: Vec<u8>,
    fitness: u64,
}

impl Chromosome {
    /// Builds a chromosome from explicit symbol codes.
    pub fn from_gene(target: &Target, gene: Vec<u8>) -> Result<Self> {
        let fitness = fitness(&gene, target.codes())?;
        Ok(Self { gene, fitness })
    }

    /// Builds a chromosome from display text.
    pub fn from_text(target: &Target, text: &str) -> Result<Self> {
        let gene = target.encode(text)?;
        Self::from_gene(target, gene)
    }

    /// Generates a chromosome of the target's length with every symbol
    /// drawn independently and uniformly from the alphabet.
    pub fn generate_random<R: Rng>(target: &Target, rng: &mut R) -> Self {
        let gene: Vec<u8> = (0..target.len()).map(|_| random_symbol(rng)).collect();
        Self::scored(target, gene)
    }

    /// Symbol codes of the gene.
    pub fn gene(&self) -> &[u8] {
        &self.gene
    }

    /// The gene rendered as text.
    pub fn gene_string(&self) -> String {
        codes_to_string(&self.gene)
    }

    /// Distance to the target; 0 means exact match.
    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    /// Number of symbols in the gene.
    pub fn len(&self) -> usize {
        self.gene.len()
    }

    /// Whether the gene has no symbols.
    pub fn is_empty(&self) -> bool {
        self.gene.is_empty()
    }

    /// Returns a copy with one uniformly chosen position replaced by a
    /// uniformly random symbol.
    ///
    /// The replacement may equal the original symbol, in which case the
    /// copy is identical to `self`.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`] if `target` is not as long as the gene.
    pub fn mutate<R: Rng>(&self, target: &Target, rng: &mut R) -> Result<Self> {
        self.check_target_len(target)?;
        let mut gene = self.gene.clone();
        mutate_gene(&mut gene, rng);
        Ok(Self::scored(target, gene))
    }

    /// Single-point crossover at a pivot drawn uniformly from
    /// `[1, len - 1]`, so both children inherit from both parents.
    ///
    /// Single-symbol genes have no interior pivot; the children are then
    /// copies of the parents.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`] if the parents differ in length or
    /// `target` is not as long as they are.
    pub fn mate<R: Rng>(
        &self,
        other: &Self,
        target: &Target,
        rng: &mut R,
    ) -> Result<(Self, Self)> {
        self.check_same_len(other)?;
        self.check_target_len(target)?;
        match random_pivot(self.len(), rng) {
            Some(pivot) => self.mate_at(other, target, pivot),
            None => Ok((self.clone(), other.clone())),
        }
    }

    /// Single-point crossover at an explicit pivot.
    ///
    /// Child A is `self[..pivot] + other[pivot..]`, child B is
    /// `other[..pivot] + self[pivot..]`.
    ///
    /// # Errors
    /// [`GaError::LengthMismatch`] if the parents differ in length or from
    /// `target`, [`GaError::InvalidConfig`] if `pivot` is not in `[1, len - 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hello_ga::ga::{Chromosome, Target};
    ///
    /// let target = Target::new("AB").unwrap();
    /// let a = Chromosome::from_text(&target, "AC").unwrap();
    /// let b = Chromosome::from_text(&target, "BA").unwrap();
    /// let (c1, c2) = a.mate_at(&b, &target, 1).unwrap();
    /// assert_eq!(c1.gene_string(), "AA");
    /// assert_eq!(c2.gene_string(), "BC");
    /// ```
    pub fn mate_at(&self, other: &Self, target: &Target, pivot: usize) -> Result<(Self, Self)> {
        self.check_same_len(other)?;
        self.check_target_len(target)?;
        let n = self.len();
        if pivot == 0 || pivot >= n {
            return Err(GaError::InvalidConfig(format!(
                "crossover pivot {pivot} must lie in [1, {}]",
                n.saturating_sub(1)
            )));
        }

        let (first, second) = crossover_genes(&self.gene, &other.gene, pivot);
        Ok((Self::scored(target, first), Self::scored(target, second)))
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(GaError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }

    fn check_target_len(&self, target: &Target) -> Result<()> {
        if self.len() != target.len() {
            return Err(GaError::LengthMismatch {
                expected: target.len(),
                actual: self.len(),
            });
        }
        Ok(())
    }

    // Only for genes whose length is already known to match the target.
    pub(crate) fn scored(target: &Target, gene: Vec<u8>) -> Self {
        debug_assert_eq!(gene.len(), target.len());
        let fitness = l1_distance(&gene, target.codes());
        Self { gene, fitness }
    }
}

/// Replaces one uniformly chosen position with a random symbol.
pub(crate) fn mutate_gene<R: Rng>(gene: &mut [u8], rng: &mut R) {
    let idx = rng.random_range(0..gene.len());
    gene[idx] = random_symbol(rng);
}

/// Draws a crossover pivot in `[1, len - 1]`, or `None` below two symbols.
pub(crate) fn random_pivot<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    (len >= 2).then(|| rng.random_range(1..len))
}

/// Swaps the tails of two equal-length genes at `pivot`.
pub(crate) fn crossover_genes(a: &[u8], b: &[u8], pivot: usize) -> (Vec<u8>, Vec<u8>) {
    let mut first = Vec::with_capacity(a.len());
    first.extend_from_slice(&a[..pivot]);
    first.extend_from_slice(&b[pivot..]);

    let mut second = Vec::with_capacity(b.len());
    second.extend_from_slice(&b[..pivot]);
    second.extend_from_slice(&a[pivot..]);

    (first, second)
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.gene_string(), self.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::target::{SYMBOL_MAX, SYMBOL_MIN};
    use crate::random::create_rng;

    fn hello() -> Target {
        Target::new("Hello, world!").unwrap()
    }

    #[test]
    fn test_fitness_exact_match_is_zero() {
        assert_eq!(fitness(b"Hello, world!", b"Hello, world!").unwrap(), 0);
    }

    #[test]
    fn test_fitness_one_off() {
        assert_eq!(fitness(b"Hello, world\"", b"Hello, world!").unwrap(), 1);
        assert_eq!(fitness(b"Gello, world!", b"Hello, world!").unwrap(), 1);
    }

    #[test]
    fn test_fitness_sums_distances() {
        // |'H'-'A'| + |'i'-'a'| = 7 + 8
        assert_eq!(fitness(b"Hi", b"Aa").unwrap(), 15);
    }

    #[test]
    fn test_fitness_length_mismatch() {
        assert_eq!(
            fitness(b"abc", b"ab"),
            Err(GaError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_text_computes_fitness() {
        let target = hello();
        let c = Chromosome::from_text(&target, "Hello, world!").unwrap();
        assert_eq!(c.fitness(), 0);
        assert_eq!(c.gene_string(), "Hello, world!");

        let c = Chromosome::from_text(&target, "H5p&J;!l<X\\7l").unwrap();
        assert_eq!(c.fitness(), 399);
    }

    #[test]
    fn test_from_text_wrong_length() {
        let target = hello();
        assert!(matches!(
            Chromosome::from_text(&target, "Hello"),
            Err(GaError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_generate_random() {
        let target = hello();
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let c = Chromosome::generate_random(&target, &mut rng);
            assert_eq!(c.len(), target.len());
            assert!(c.gene().iter().all(|s| (SYMBOL_MIN..=SYMBOL_MAX).contains(s)));
            assert_eq!(c.fitness(), fitness(c.gene(), target.codes()).unwrap());
        }
    }

    #[test]
    fn test_mutate_changes_at_most_one_position() {
        let target = hello();
        let mut rng = create_rng(42);
        let original = Chromosome::generate_random(&target, &mut rng);
        let snapshot = original.clone();
        for _ in 0..1000 {
            let mutated = original.mutate(&target, &mut rng).unwrap();
            assert_eq!(mutated.len(), original.len());
            let diffs = mutated
                .gene()
                .iter()
                .zip(original.gene())
                .filter(|(a, b)| a != b)
                .count();
            assert!(diffs <= 1);
            assert_eq!(
                mutated.fitness(),
                fitness(mutated.gene(), target.codes()).unwrap()
            );
        }
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_mate_at_scenario() {
        let target = Target::new("AB").unwrap();
        let a = Chromosome::from_text(&target, "AC").unwrap();
        let b = Chromosome::from_text(&target, "BA").unwrap();
        let (c1, c2) = a.mate_at(&b, &target, 1).unwrap();
        assert_eq!(c1.gene_string(), "AA");
        assert_eq!(c2.gene_string(), "BC");
        assert_eq!(c1.fitness(), 1);
        assert_eq!(c2.fitness(), 2);
    }

    #[test]
    fn test_mate_at_rejects_edge_pivots() {
        let target = Target::new("ABC").unwrap();
        let a = Chromosome::from_text(&target, "AAA").unwrap();
        let b = Chromosome::from_text(&target, "CCC").unwrap();
        assert!(matches!(
            a.mate_at(&b, &target, 0),
            Err(GaError::InvalidConfig(_))
        ));
        assert!(matches!(
            a.mate_at(&b, &target, 3),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mate_children_inherit_from_both_parents() {
        let target = hello();
        let a = Chromosome::from_gene(&target, vec![b'a'; 13]).unwrap();
        let b = Chromosome::from_gene(&target, vec![b'b'; 13]).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let (c1, c2) = a.mate(&b, &target, &mut rng).unwrap();
            assert_eq!(c1.len(), 13);
            assert_eq!(c2.len(), 13);
            assert_eq!(c1.gene()[0], b'a');
            assert_eq!(*c1.gene().last().unwrap(), b'b');
            assert_eq!(c2.gene()[0], b'b');
            assert_eq!(*c2.gene().last().unwrap(), b'a');
            // Pivot is shared: wherever c1 switches to b, c2 switches to a.
            let pivot = c1.gene().iter().position(|&s| s == b'b').unwrap();
            assert_eq!(c2.gene().iter().position(|&s| s == b'a').unwrap(), pivot);
        }
    }

    #[test]
    fn test_mate_length_mismatch() {
        let short = Target::new("AB").unwrap();
        let long = Target::new("ABC").unwrap();
        let a = Chromosome::from_text(&short, "AB").unwrap();
        let b = Chromosome::from_text(&long, "ABC").unwrap();
        let mut rng = create_rng(42);
        assert_eq!(
            a.mate(&b, &short, &mut rng),
            Err(GaError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_operators_reject_differently_sized_target() {
        let target = Target::new("AB").unwrap();
        let longer = Target::new("AAAA").unwrap();
        let a = Chromosome::from_text(&target, "AC").unwrap();
        let b = Chromosome::from_text(&target, "BA").unwrap();
        let mismatch = Err(GaError::LengthMismatch {
            expected: 4,
            actual: 2,
        });
        let mut rng = create_rng(42);

        assert_eq!(a.mate_at(&b, &longer, 1), mismatch);
        assert_eq!(a.mate(&b, &longer, &mut rng), mismatch);
        assert_eq!(a.mutate(&longer, &mut rng), Err(mismatch.unwrap_err()));
    }

    #[test]
    fn test_mate_single_symbol_returns_copies() {
        let target = Target::new("A").unwrap();
        let a = Chromosome::from_text(&target, "B").unwrap();
        let b = Chromosome::from_text(&target, "C").unwrap();
        let mut rng = create_rng(42);
        let (c1, c2) = a.mate(&b, &target, &mut rng).unwrap();
        assert_eq!(c1, a);
        assert_eq!(c2, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_gene_rescored_on_load() {
        let target = Target::new("AB").unwrap();
        let c = Chromosome::from_text(&target, "AC").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"gene":[65,67],"fitness":1}"#);

        #[derive(serde::Deserialize)]
        struct Saved {
            gene: Vec<u8>,
        }
        let saved: Saved = serde_json::from_str(r#"{"gene":[65,66],"fitness":999}"#).unwrap();
        let loaded = Chromosome::from_gene(&target, saved.gene).unwrap();
        assert_eq!(loaded.fitness(), 0);
    }

    #[test]
    fn test_display() {
        let target = Target::new("AB").unwrap();
        let c = Chromosome::from_text(&target, "AC").unwrap();
        assert_eq!(c.to_string(), "AC (1)");
    }
}
