//! Shuffle engine: unbiased in-place permutation.
//!
//! Fisher-Yates gives every permutation equal probability provided the
//! index draw is uniform, which `Rng::gen_range` guarantees. Sorting by a
//! random comparator is not uniform and is never used here.

use rand::Rng;

/// One Fisher-Yates pass over `items`.
///
/// Empty and single-element slices are left unchanged.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Repeat [`shuffle`] `passes` times (at least once).
///
/// Extra passes keep the output uniform; they only mirror the physical
/// habit of riffling a deck several times.
pub fn shuffle_passes<T, R: Rng + ?Sized>(items: &mut [T], passes: u32, rng: &mut R) {
    for _ in 0..passes.max(1) {
        shuffle(items, rng);
    }
}

/// Shuffled copy of `items`, leaving the input untouched.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TarotRng;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = TarotRng::new(42);
        let mut data: Vec<u32> = (0..78).collect();

        shuffle(&mut data, &mut rng);

        assert_eq!(data.len(), 78);
        assert_ne!(data, (0..78).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (0..78).collect::<Vec<_>>());
    }

    #[test]
    fn test_trivial_inputs_unchanged() {
        let mut rng = TarotRng::new(1);

        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle_passes(&mut single, 7, &mut rng);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_same_seed_same_order() {
        let data: Vec<u32> = (0..20).collect();

        let a = shuffled(&data, &mut TarotRng::new(5));
        let b = shuffled(&data, &mut TarotRng::new(5));
        let c = shuffled(&data, &mut TarotRng::new(6));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(data, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_passes_still_shuffles() {
        let mut zero: Vec<u32> = (0..20).collect();
        let mut one: Vec<u32> = (0..20).collect();

        shuffle_passes(&mut zero, 0, &mut TarotRng::new(3));
        shuffle_passes(&mut one, 1, &mut TarotRng::new(3));

        assert_eq!(zero, one);
    }

    #[test]
    fn test_three_element_orders_are_roughly_uniform() {
        // 6 permutations of 3 items; each should get ~1/6 of 6000 shuffles.
        let mut rng = TarotRng::new(2024);
        let mut counts = rustc_hash::FxHashMap::default();

        for _ in 0..6000 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0u32) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (order, count) in counts {
            // mean 1000, sd ~28.9; 5 sd is a comfortable bound
            assert!((855..=1145).contains(&count), "{order:?} seen {count} times");
        }
    }
}
