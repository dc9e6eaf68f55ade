//! Error types shared by every engine operation.

use thiserror::Error;

/// Errors raised by the evolutionary engine.
///
/// All variants are precondition violations detected at the offending
/// call. None are recoverable inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaError {
    /// A chromosome or population was requested before a target was supplied.
    ///
    /// Every constructor in this crate takes a [`Target`](crate::ga::Target),
    /// so the library itself never returns this; it is for drivers that
    /// assemble their configuration in stages.
    #[error("target string has not been set")]
    TargetNotSet,

    /// Two genes (or a gene and the target) have different lengths.
    #[error("length mismatch: expected {expected} symbols, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The target text cannot be represented as a gene.
    #[error("invalid target: {0}")]
    InvalidTarget(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
