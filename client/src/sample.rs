//! Random sampling without replacement

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick `count` items uniformly at random without replacement.
///
/// When there are no more than `count` items, all of them are returned in
/// their original order.
pub fn random_items<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    random_items_with(items, count, &mut rand::thread_rng())
}

/// [`random_items`] with a caller-supplied RNG
pub fn random_items_with<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Vec<T> {
    if items.len() <= count {
        return items.to_vec();
    }
    items.choose_multiple(rng, count).cloned().collect()
}
