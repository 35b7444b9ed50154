//! Error type for drawing numbers.

use thiserror::Error;

/// Errors raised by a [`RandomSource`](crate::rng::RandomSource) or by a draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The configured range is empty or includes 0, which marks a reset slot.
    #[error("invalid number range {low}..={high}")]
    InvalidRange { low: u32, high: u32 },

    /// The operating system could not provide entropy for seeding.
    #[error("entropy unavailable: {0}")]
    Entropy(String),

    /// A unique draw needs more distinct values than the range holds.
    #[error("range holds {available} distinct values, {needed} needed")]
    RangeTooNarrow { available: u64, needed: usize },

    /// A unique draw kept hitting repeats and gave up.
    #[error("no unique draw after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, DrawError>;
