use crate::{
    cost::CostFunction,
    error::{Result, ShapleyError},
    permutation::{Permutations, random_permutation},
    types::{Allocation, Coalition, MAX_PLAYERS, Players},
    utils::factorial,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Largest roster the permutation enumeration accepts (12! orderings)
pub const MAX_EXACT_PLAYERS: usize = 12;

/// How the sampled estimator turns accumulated marginals into an average
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide by the number of drawn permutations
    #[default]
    SampleCount,
    /// Divide by n!, the size of the permutation space.
    ///
    /// Only matches the Shapley value in expectation when the sample count is n!.
    PermutationSpace,
}

/// Settings for the sampled estimator
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    pub sample_count: usize,
    pub normalization: Normalization,
    /// Fixed seed for reproducible draws; None uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            normalization: Normalization::default(),
            seed: None,
        }
    }
}

impl SamplingConfig {
    pub fn new(sample_count: usize) -> Self {
        Self {
            sample_count,
            ..Self::default()
        }
    }

    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Walk one ordering, crediting each player with its marginal cost
fn accumulate_marginals<C: CostFunction + ?Sized>(order: &[usize], cost: &C, totals: &mut [f64]) {
    let mut prefix = Coalition::EMPTY;
    let mut before = cost.value(prefix);

    for &player in order {
        let extended = prefix.with(player);
        let after = cost.value(extended);
        totals[player] += after - before;
        prefix = extended;
        before = after;
    }
}

/// Exact Shapley values by enumerating every ordering of the players
pub fn exact_shapley<C: CostFunction + ?Sized>(players: &Players, cost: &C) -> Result<Allocation> {
    let n = players.len();
    if n > MAX_EXACT_PLAYERS {
        return Err(ShapleyError::TooManyPlayers {
            count: n,
            limit: MAX_EXACT_PLAYERS,
        });
    }
    if n == 0 {
        return Ok(Allocation::default());
    }

    let mut totals = vec![0.0; n];
    for order in Permutations::new(n) {
        accumulate_marginals(&order, cost, &mut totals);
    }

    // Average over all permutations
    let fact_n = factorial(n);
    let values = totals.into_iter().map(|total| total / fact_n).collect();

    log::debug!("exact shapley over {} permutations of {} players", fact_n, n);
    Ok(Allocation::from_values(players, values))
}

/// Exact Shapley values from the weighted sum over coalitions.
///
/// Each coalition S without player i contributes `|S|! (n - |S| - 1)! / n!`
/// times the marginal cost of adding i to S.
pub fn subset_shapley<C: CostFunction + ?Sized>(players: &Players, cost: &C) -> Result<Allocation> {
    let n = players.len();
    if n > MAX_PLAYERS {
        return Err(ShapleyError::TooManyPlayers {
            count: n,
            limit: MAX_PLAYERS,
        });
    }
    if n == 0 {
        return Ok(Allocation::default());
    }

    // Pre-compute weights per coalition size
    let fact_n = factorial(n);
    let weights: Vec<f64> = (0..n)
        .map(|s| factorial(s) * factorial(n - s - 1) / fact_n)
        .collect();

    let n_coalitions: u32 = 1 << n;
    let coalition_values: Vec<f64> = (0..n_coalitions)
        .map(|mask| cost.value(Coalition::from_mask(mask)))
        .collect();

    let values = (0..n)
        .map(|k| {
            let mut contribution = 0.0;
            for mask in 0..n_coalitions {
                let without = Coalition::from_mask(mask);
                if without.contains(k) {
                    continue;
                }
                let with = without.with(k);
                contribution += weights[without.len()]
                    * (coalition_values[with.mask() as usize] - coalition_values[mask as usize]);
            }
            contribution
        })
        .collect();

    Ok(Allocation::from_values(players, values))
}

/// Monte-Carlo Shapley estimate from `sample_count` random orderings
pub fn sampled_shapley<C: CostFunction + ?Sized>(
    players: &Players,
    cost: &C,
    sample_count: usize,
) -> Result<Allocation> {
    sampled_shapley_with(players, cost, &SamplingConfig::new(sample_count))
}

/// Monte-Carlo Shapley estimate driven by a [`SamplingConfig`]
pub fn sampled_shapley_with<C: CostFunction + ?Sized>(
    players: &Players,
    cost: &C,
    config: &SamplingConfig,
) -> Result<Allocation> {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            sampled_shapley_with_rng(
                players,
                cost,
                config.sample_count,
                config.normalization,
                &mut rng,
            )
        }
        None => sampled_shapley_with_rng(
            players,
            cost,
            config.sample_count,
            config.normalization,
            &mut rand::rng(),
        ),
    }
}

/// Monte-Carlo Shapley estimate using the caller's RNG.
///
/// Orderings are drawn independently and uniformly, with replacement, so the
/// same ordering may be drawn several times and `sample_count` may exceed n!.
pub fn sampled_shapley_with_rng<C, R>(
    players: &Players,
    cost: &C,
    sample_count: usize,
    normalization: Normalization,
    rng: &mut R,
) -> Result<Allocation>
where
    C: CostFunction + ?Sized,
    R: Rng + ?Sized,
{
    let n = players.len();
    if n == 0 {
        return Err(ShapleyError::InvalidArgument(
            "cannot sample orderings of an empty player set".to_string(),
        ));
    }
    if sample_count == 0 {
        return Err(ShapleyError::InvalidArgument(
            "sample count must be at least 1".to_string(),
        ));
    }

    let mut totals = vec![0.0; n];
    for _ in 0..sample_count {
        let order = random_permutation(n, rng);
        accumulate_marginals(&order, cost, &mut totals);
    }

    let divisor = match normalization {
        Normalization::SampleCount => sample_count as f64,
        Normalization::PermutationSpace => factorial(n),
    };
    let values = totals.into_iter().map(|total| total / divisor).collect();

    log::debug!(
        "sampled shapley: {} players, {} samples, {:?} normalization",
        n,
        sample_count,
        normalization
    );
    Ok(Allocation::from_values(players, values))
}
