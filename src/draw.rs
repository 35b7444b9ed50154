//! Pulling a full ticket of numbers from a [`RandomSource`].

use tracing::trace;

use crate::error::{DrawError, Result};
use crate::rng::RandomSource;
use crate::sort::sort;
use crate::types::SET_SIZE;

/// Upper bound on pulls for a unique draw before giving up.
pub const MAX_UNIQUE_ATTEMPTS: u32 = 100_000;

/// Pull `SET_SIZE` numbers with replacement and sort them.
///
/// Repeats are kept. The first source error aborts the draw.
pub fn draw_with_replacement<R: RandomSource + ?Sized>(source: &mut R) -> Result<[u32; SET_SIZE]> {
    let mut numbers = [0; SET_SIZE];
    for slot in numbers.iter_mut() {
        *slot = source.next_number()?;
    }
    sort(&mut numbers);
    Ok(numbers)
}

/// Pull until `SET_SIZE` distinct numbers are collected, then sort them.
pub fn draw_without_replacement<R: RandomSource + ?Sized>(source: &mut R) -> Result<[u32; SET_SIZE]> {
    if let Some(available) = source.span() {
        if available < SET_SIZE as u64 {
            return Err(DrawError::RangeTooNarrow {
                available,
                needed: SET_SIZE,
            });
        }
    }

    let mut numbers = [0; SET_SIZE];
    let mut placed = 0;
    let mut attempts = 0;

    while placed < SET_SIZE {
        if attempts == MAX_UNIQUE_ATTEMPTS {
            return Err(DrawError::Exhausted { attempts });
        }
        attempts += 1;

        let n = source.next_number()?;
        if numbers[..placed].contains(&n) {
            trace!(number = n, attempts, "rejected repeated number");
            continue;
        }
        numbers[placed] = n;
        placed += 1;
    }

    sort(&mut numbers);
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::LottoRng;

    /// Replays a fixed list, cycling when exhausted.
    struct Replay {
        values: Vec<u32>,
        pos: usize,
    }

    impl Replay {
        fn new(values: &[u32]) -> Self {
            Self { values: values.to_vec(), pos: 0 }
        }
    }

    impl RandomSource for Replay {
        fn next_number(&mut self) -> Result<u32> {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            Ok(v)
        }
    }

    struct Failing;

    impl RandomSource for Failing {
        fn next_number(&mut self) -> Result<u32> {
            Err(DrawError::Entropy("offline".into()))
        }
    }

    #[test]
    fn test_with_replacement_keeps_repeats() {
        let mut src = Replay::new(&[5, 1, 4, 1, 3, 9]);
        assert_eq!(draw_with_replacement(&mut src).unwrap(), [1, 1, 3, 4, 5, 9]);
        assert_eq!(src.pos, SET_SIZE);
    }

    #[test]
    fn test_without_replacement_skips_repeats() {
        let mut src = Replay::new(&[5, 1, 4, 1, 3, 5, 9, 2]);
        assert_eq!(draw_without_replacement(&mut src).unwrap(), [1, 2, 3, 4, 5, 9]);
        assert_eq!(src.pos, 8);
    }

    #[test]
    fn test_source_error_propagates() {
        assert_eq!(
            draw_with_replacement(&mut Failing).unwrap_err(),
            DrawError::Entropy("offline".into())
        );
        assert!(matches!(draw_without_replacement(&mut Failing), Err(DrawError::Entropy(_))));
    }

    #[test]
    fn test_narrow_range_rejected_up_front() {
        let mut rng = LottoRng::seeded(1, 5, 9).unwrap();
        assert_eq!(
            draw_without_replacement(&mut rng).unwrap_err(),
            DrawError::RangeTooNarrow { available: 5, needed: SET_SIZE }
        );
    }

    #[test]
    fn test_unique_draw_gives_up() {
        // No span reported, so only the attempt limit stops it.
        let mut src = Replay::new(&[1, 2, 3]);
        assert_eq!(
            draw_without_replacement(&mut src).unwrap_err(),
            DrawError::Exhausted { attempts: MAX_UNIQUE_ATTEMPTS }
        );
    }

    #[test]
    fn test_exact_span_fills_every_value() {
        let mut rng = LottoRng::seeded(10, 15, 77).unwrap();
        assert_eq!(draw_without_replacement(&mut rng).unwrap(), [10, 11, 12, 13, 14, 15]);
    }
}
