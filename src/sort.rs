//! Ascending sorts over small fixed-size slices.
//!
//! [`sort`] is the one used by draws. The routines in [`reference`] compute
//! the same result with textbook O(n²) algorithms and are checked against it
//! in tests.

/// Canonical ascending sort. Ties carry no identity, so stability is irrelevant.
#[inline]
pub fn sort<T: Ord>(values: &mut [T]) {
    values.sort_unstable();
}

pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

pub mod reference {
    /// Compare every pair `(i, j)` with `i < j` and swap when out of order.
    /// No early exit.
    pub fn pairwise_exchange<T: Ord>(values: &mut [T]) {
        let n = values.len();
        for i in 0..n.saturating_sub(1) {
            for j in i + 1..n {
                if values[i] > values[j] {
                    values.swap(i, j);
                }
            }
        }
    }

    /// Insertion by adjacent swaps, stopping at the first non-inversion.
    pub fn insertion_by_swaps<T: Ord>(values: &mut [T]) {
        for i in 1..values.len() {
            for j in (1..=i).rev() {
                if values[j] >= values[j - 1] {
                    break;
                }
                values.swap(j, j - 1);
            }
        }
    }

    /// Classic insertion sort: hold the value, shift larger predecessors right,
    /// drop it into the gap.
    pub fn insertion_by_shifting<T: Ord + Copy>(values: &mut [T]) {
        for i in 1..values.len() {
            let held = values[i];
            let mut j = i;
            while j > 0 && values[j - 1] > held {
                values[j] = values[j - 1];
                j -= 1;
            }
            values[j] = held;
        }
    }

    /// Two-phase insertion: one backward pass carries the minimum to index 0,
    /// which then bounds every inner loop of the insertion pass from index 2.
    pub fn sentinel_insertion<T: Ord + Copy>(values: &mut [T]) {
        let n = values.len();
        if n < 2 {
            return;
        }
        for i in (1..n).rev() {
            if values[i] < values[i - 1] {
                values.swap(i, i - 1);
            }
        }
        for i in 2..n {
            let held = values[i];
            let mut j = i;
            // values[0] is the minimum, so this stops by j == 1 at the latest.
            while held < values[j - 1] {
                values[j] = values[j - 1];
                j -= 1;
            }
            values[j] = held;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reference::*;
    use super::*;
    use proptest::prelude::*;

    const VARIANTS: [(&str, fn(&mut [u32])); 4] = [
        ("pairwise_exchange", pairwise_exchange::<u32>),
        ("insertion_by_swaps", insertion_by_swaps::<u32>),
        ("insertion_by_shifting", insertion_by_shifting::<u32>),
        ("sentinel_insertion", sentinel_insertion::<u32>),
    ];

    fn sorted_copy(values: &[u32]) -> Vec<u32> {
        let mut v = values.to_vec();
        sort(&mut v);
        v
    }

    #[test]
    fn test_sort_six() {
        let mut v = [5, 1, 4, 1, 3, 9];
        sort(&mut v);
        assert_eq!(v, [1, 1, 3, 4, 5, 9]);
    }

    #[test]
    fn test_variants_on_known_inputs() {
        let inputs: [[u32; 6]; 5] = [
            [5, 1, 4, 1, 3, 9],
            [49, 48, 47, 46, 45, 44],
            [1, 2, 3, 4, 5, 6],
            [7, 7, 7, 7, 7, 7],
            [0, 49, 0, 12, 12, 1],
        ];
        for input in inputs {
            let expected = sorted_copy(&input);
            for (name, variant) in VARIANTS {
                let mut v = input;
                variant(&mut v);
                assert_eq!(v.to_vec(), expected, "{name} on {input:?}");
            }
        }
    }

    #[test]
    fn test_variants_on_tiny_slices() {
        for (name, variant) in VARIANTS {
            let mut empty: [u32; 0] = [];
            variant(&mut empty);
            let mut one = [3];
            variant(&mut one);
            assert_eq!(one, [3], "{name}");
            let mut two = [9, 2];
            variant(&mut two);
            assert_eq!(two, [2, 9], "{name}");
        }
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<u32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    proptest! {
        #[test]
        fn prop_sort_is_ascending_permutation(input in prop::array::uniform6(0u32..60)) {
            let mut v = input;
            sort(&mut v);
            prop_assert!(is_sorted(&v));

            let mut a = input.to_vec();
            let mut b = v.to_vec();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_sort_is_idempotent(input in prop::array::uniform6(any::<u32>())) {
            let mut once = input;
            sort(&mut once);
            let mut twice = once;
            sort(&mut twice);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_variants_agree(input in prop::collection::vec(0u32..20, 0..16)) {
            let expected = sorted_copy(&input);
            for (name, variant) in VARIANTS {
                let mut v = input.clone();
                variant(&mut v);
                prop_assert_eq!(&v, &expected, "{}", name);
            }
        }
    }
}
