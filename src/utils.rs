/// Factorials that fit in a u64 (0! through 20!)
pub(crate) const FACTORIAL_LIMIT: usize = 21;
pub(crate) const FACTORIALS: [u64; FACTORIAL_LIMIT] = {
    let mut facts = [1u64; FACTORIAL_LIMIT];
    let mut i = 1;
    while i < FACTORIAL_LIMIT {
        facts[i] = facts[i - 1] * (i as u64);
        i += 1;
    }
    facts
};

/// n! for rosters up to `MAX_PLAYERS`
pub(crate) fn factorial(n: usize) -> f64 {
    debug_assert!(n < FACTORIAL_LIMIT, "{n}! exceeds the factorial table");
    FACTORIALS[n] as f64
}

/// Iterate over every `r`-element subset of `n` bits, as masks in increasing order.
///
/// Uses Gosper's hack to step from one mask to the next with the same popcount.
pub(crate) fn combinations(n: usize, r: usize) -> impl Iterator<Item = u32> {
    let limit: u64 = 1 << n;
    let first: Option<u64> = if r > n {
        None
    } else if r == 0 {
        Some(0)
    } else {
        Some((1u64 << r) - 1)
    };

    std::iter::successors(first, move |&mask| {
        if mask == 0 {
            return None;
        }
        let lowest = mask & mask.wrapping_neg();
        let ripple = mask + lowest;
        let next = (((ripple ^ mask) >> 2) / lowest) | ripple;
        (next < limit).then_some(next)
    })
    .map(|mask| mask as u32)
}
