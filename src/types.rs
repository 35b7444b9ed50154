//! Core data types: the drawn number set and its serializable summary.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use crate::draw::{draw_with_replacement, draw_without_replacement};
use crate::error::Result;
use crate::rng::{LottoRng, RandomSource, DEFAULT_HIGH, DEFAULT_LOW};
use crate::sort::sort;

/// Numbers on one ticket.
pub const SET_SIZE: usize = 6;

/// Six drawn numbers plus the source they are drawn from.
///
/// Starts zeroed. [`draw`](Self::draw) overwrites and sorts the numbers,
/// [`reset`](Self::reset) zeroes them again.
#[derive(Debug, Clone)]
pub struct NumberSet<R = LottoRng> {
    values: [u32; SET_SIZE],
    source: R,
}

impl NumberSet<LottoRng> {
    /// Entropy-seeded set over `1..=49`.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(LottoRng::standard()?))
    }

    /// Deterministic set over `1..=49`.
    pub fn seeded(seed: u64) -> Result<Self> {
        Ok(Self::new(LottoRng::seeded(DEFAULT_LOW, DEFAULT_HIGH, seed)?))
    }
}

impl<R: RandomSource> NumberSet<R> {
    pub fn new(source: R) -> Self {
        Self {
            values: [0; SET_SIZE],
            source,
        }
    }

    /// Fill every slot from the source and sort ascending. Repeats are kept.
    ///
    /// On a source error the current values are left as they were.
    pub fn draw(&mut self) -> Result<()> {
        self.values = draw_with_replacement(&mut self.source)?;
        debug!(numbers = ?self.values, "drew numbers");
        if self.has_duplicates() {
            debug!(numbers = ?self.values, "draw contains repeated numbers");
        }
        Ok(())
    }

    /// Like [`draw`](Self::draw), but every number is distinct.
    pub fn draw_unique(&mut self) -> Result<()> {
        self.values = draw_without_replacement(&mut self.source)?;
        debug!(numbers = ?self.values, "drew unique numbers");
        Ok(())
    }
}

impl<R> NumberSet<R> {
    pub fn reset(&mut self) {
        self.values = [0; SET_SIZE];
    }

    /// Copy of the current numbers.
    pub fn values(&self) -> [u32; SET_SIZE] {
        self.values
    }

    /// Index of the largest number; the lowest index wins ties.
    pub fn max_index(&self) -> usize {
        (1..SET_SIZE).fold(0, |best, i| {
            if self.values[i] > self.values[best] {
                i
            } else {
                best
            }
        })
    }

    pub fn max_value(&self) -> u32 {
        self.values[self.max_index()]
    }

    /// Index of the smallest number; the lowest index wins ties.
    pub fn min_index(&self) -> usize {
        (0..SET_SIZE).fold(0, |best, i| {
            if self.values[i] < self.values[best] {
                i
            } else {
                best
            }
        })
    }

    pub fn min_value(&self) -> u32 {
        self.values[self.min_index()]
    }

    pub fn contains(&self, n: u32) -> bool {
        self.values.iter().any(|&v| v == n)
    }

    pub fn has_duplicates(&self) -> bool {
        let mut sorted = self.values;
        sort(&mut sorted);
        sorted.windows(2).any(|w| w[0] == w[1])
    }

    /// Write the numbers as one `"a, b, c, d, e, f, "` line.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Print the numbers to stdout in the [`write_line`](Self::write_line) format.
    pub fn print(&self) -> io::Result<()> {
        self.write_line(&mut io::stdout().lock())
    }

    pub fn summary(&self) -> DrawSummary {
        DrawSummary {
            numbers: self.values,
            min: self.min_value(),
            max: self.max_value(),
            has_duplicates: self.has_duplicates(),
        }
    }

    pub fn source(&self) -> &R {
        &self.source
    }
}

impl<R> fmt::Display for NumberSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.values {
            write!(f, "{v}, ")?;
        }
        Ok(())
    }
}

/// Serializable snapshot of a drawn set, for JSON and JS consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawSummary {
    pub numbers: [u32; SET_SIZE],
    pub min: u32,
    pub max: u32,
    pub has_duplicates: bool,
}
