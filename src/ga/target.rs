//! The target string and the symbol alphabet.
//!
//! Genes are stored as symbol codes (`u8`), never as text. [`Target`] is
//! the single conversion boundary between display text and codes, and it
//! must exist before any [`Chromosome`](super::Chromosome) can be built.

use crate::error::{GaError, Result};
use rand::Rng;
use std::fmt;

/// Lowest symbol code produced by random generation and mutation (space).
pub const SYMBOL_MIN: u8 = 32;

/// Highest symbol code produced by random generation and mutation (`z`).
pub const SYMBOL_MAX: u8 = 122;

/// Draws one symbol uniformly from `SYMBOL_MIN..=SYMBOL_MAX`.
pub fn random_symbol<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(SYMBOL_MIN..=SYMBOL_MAX)
}

/// Renders a sequence of symbol codes as text.
pub fn codes_to_string(codes: &[u8]) -> String {
    codes.iter().map(|&c| c as char).collect()
}

/// The string every chromosome is scored against.
///
/// Read-only once built. Cloning is cheap enough for the string sizes this
/// engine is meant for, so populations hold their own copy.
///
/// # Examples
///
/// ```
/// use hello_ga::ga::Target;
///
/// let target = Target::new("Hello, world!").unwrap();
/// assert_eq!(target.len(), 13);
/// assert!(target.is_reachable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Target {
    codes: Vec<u8>,
}

impl Target {
    /// Builds a target from ASCII text.
    ///
    /// Fails with [`GaError::InvalidTarget`] for empty or non-ASCII text.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(GaError::InvalidTarget("target must not be empty".into()));
        }
        if !text.is_ascii() {
            return Err(GaError::InvalidTarget(format!(
                "target must be ASCII, got {text:?}"
            )));
        }
        let target = Self {
            codes: text.as_bytes().to_vec(),
        };
        if !target.is_reachable() {
            log::warn!(
                "target {text:?} contains symbols outside {}..={}; it cannot be matched exactly",
                SYMBOL_MIN,
                SYMBOL_MAX
            );
        }
        Ok(target)
    }

    /// Symbol codes of the target.
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Number of symbols; every gene in a run has this length.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always `false` for a constructed target; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether every target symbol lies inside the mutation alphabet.
    ///
    /// Targets with symbols outside it still score correctly but can never
    /// reach fitness 0.
    pub fn is_reachable(&self) -> bool {
        self.codes
            .iter()
            .all(|c| (SYMBOL_MIN..=SYMBOL_MAX).contains(c))
    }

    /// Converts display text into codes of this target's length.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        if !text.is_ascii() {
            return Err(GaError::InvalidTarget(format!(
                "gene text must be ASCII, got {text:?}"
            )));
        }
        let codes = text.as_bytes().to_vec();
        if codes.len() != self.len() {
            return Err(GaError::LengthMismatch {
                expected: self.len(),
                actual: codes.len(),
            });
        }
        Ok(codes)
    }
}

impl TryFrom<String> for Target {
    type Error = GaError;

    fn try_from(text: String) -> Result<Self> {
        Self::new(&text)
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        target.to_string()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codes_to_string(&self.codes))
    }
}
