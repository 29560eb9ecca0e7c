use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::PatternId;

/// How the session order is permuted at session start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleStyle {
    /// Standard uniform permutation.
    #[default]
    Uniform,
    /// The original quiz's swap loop: every position may swap with any
    /// other position on every step. Approximately but not exactly uniform;
    /// kept for behavioral parity with the original.
    LegacySwap,
}

pub(crate) fn shuffle<R: Rng + ?Sized>(
    order: &mut [PatternId],
    style: ShuffleStyle,
    rng: &mut R,
) {
    match style {
        ShuffleStyle::Uniform => order.shuffle(rng),
        ShuffleStyle::LegacySwap => {
            for i in 0..order.len() {
                let j = rng.random_range(0..order.len());
                order.swap(i, j);
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<PatternId> {
        range.map(PatternId::new).collect()
    }

    fn assert_permutation(order: &[PatternId], range: std::ops::RangeInclusive<u32>) {
        let mut sorted = order.to_vec();
        sorted.sort();
        assert_eq!(sorted, ids(range));
    }

    #[test]
    fn uniform_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut order = ids(1..=23);
            shuffle(&mut order, ShuffleStyle::Uniform, &mut rng);
            assert_permutation(&order, 1..=23);
        }
    }

    #[test]
    fn legacy_swap_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut order = ids(4..=9);
            shuffle(&mut order, ShuffleStyle::LegacySwap, &mut rng);
            assert_permutation(&order, 4..=9);
        }
    }

    #[test]
    fn single_item_order_is_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut order = ids(3..=3);
        shuffle(&mut order, ShuffleStyle::Uniform, &mut rng);
        assert_eq!(order, ids(3..=3));
        shuffle(&mut order, ShuffleStyle::LegacySwap, &mut rng);
        assert_eq!(order, ids(3..=3));
    }
}
