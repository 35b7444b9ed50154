//! Random sources for lottery draws.
//!
//! [`LottoRng`] uses the `rand` crate with `SmallRng` (xoshiro256++), which is
//! fast and works with WASM. Entropy is sourced from `getrandom` (browser
//! crypto API or the OS).

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{DrawError, Result};

/// Lowest number on the default ticket.
pub const DEFAULT_LOW: u32 = 1;
/// Highest number on the default ticket.
pub const DEFAULT_HIGH: u32 = 49;

/// Produces one bounded number per call.
pub trait RandomSource {
    fn next_number(&mut self) -> Result<u32>;

    /// Count of distinct values this source can produce, if known.
    fn span(&self) -> Option<u64> {
        None
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_number(&mut self) -> Result<u32> {
        (**self).next_number()
    }

    fn span(&self) -> Option<u64> {
        (**self).span()
    }
}

/// A seedable RNG yielding numbers in `low..=high`.
///
/// Can be seeded for deterministic replay, or created from system entropy.
#[derive(Debug, Clone)]
pub struct LottoRng {
    inner: SmallRng,
    low: u32,
    high: u32,
}

impl LottoRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new(low: u32, high: u32) -> Result<Self> {
        check_range(low, high)?;
        let inner = SmallRng::try_from_os_rng().map_err(|e| DrawError::Entropy(e.to_string()))?;
        Ok(Self { inner, low, high })
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn seeded(low: u32, high: u32, seed: u64) -> Result<Self> {
        check_range(low, high)?;
        Ok(Self {
            inner: SmallRng::seed_from_u64(seed),
            low,
            high,
        })
    }

    /// Entropy-seeded source over the default `1..=49` range.
    pub fn standard() -> Result<Self> {
        Self::new(DEFAULT_LOW, DEFAULT_HIGH)
    }

    pub fn range(&self) -> (u32, u32) {
        (self.low, self.high)
    }
}

fn check_range(low: u32, high: u32) -> Result<()> {
    if low == 0 || low > high {
        return Err(DrawError::InvalidRange { low, high });
    }
    Ok(())
}

impl RandomSource for LottoRng {
    #[inline(always)]
    fn next_number(&mut self) -> Result<u32> {
        Ok(self.inner.random_range(self.low..=self.high))
    }

    fn span(&self) -> Option<u64> {
        Some(u64::from(self.high - self.low) + 1)
    }
}
