use rand::{Rng, seq::SliceRandom};

/// All orderings of `0..n` in lexicographic order.
///
/// Yields `n!` permutations; for `n = 0` that is the single empty ordering.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    done: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(item)
    }
}

/// Advance to the next lexicographic permutation; false once the last is reached
fn next_permutation(items: &mut [usize]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    let Some(pivot) = (0..n - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };
    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// A uniformly random ordering of `0..n`
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}
