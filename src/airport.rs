//! Random airport-game instances.
//!
//! A runway is built from `n` consecutive segments. Player `i` needs segments
//! `0..=i`, so later players need a longer runway and share every segment the
//! earlier players use.

use crate::{
    error::{Result, ShapleyError},
    game::Game,
    types::{AtomicCosts, Coalition, MAX_PLAYERS, Players},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// An airport game: runway segment costs plus the players that use them
#[derive(Debug, Clone, PartialEq)]
pub struct AirportInstance {
    players: Players,
    segment_costs: Vec<f64>,
}

impl AirportInstance {
    /// Airport game with given segment costs; player `i` is labelled `'A' + i`
    pub fn new(segment_costs: Vec<f64>) -> Result<Self> {
        let n = segment_costs.len();
        if n > MAX_PLAYERS {
            return Err(ShapleyError::TooManyPlayers {
                count: n,
                limit: MAX_PLAYERS,
            });
        }
        let players = Players::new((0..n).map(player_label))?;

        if let Some((i, &cost)) = segment_costs
            .iter()
            .enumerate()
            .find(|(_, cost)| !cost.is_finite())
        {
            return Err(ShapleyError::InvalidCost {
                player: player_label(i),
                cost,
            });
        }

        Ok(Self {
            players,
            segment_costs,
        })
    }

    /// Segment costs drawn uniformly from `1..=max_cost` with a seeded RNG
    pub fn random(n: usize, seed: u64, max_cost: u32) -> Result<Self> {
        if max_cost == 0 {
            return Err(ShapleyError::InvalidArgument(
                "max_cost must be at least 1".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let segment_costs = (0..n)
            .map(|_| rng.random_range(1..=max_cost) as f64)
            .collect();

        log::info!("generated airport instance: {} players, seed {}", n, seed);
        Self::new(segment_costs)
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn segment_costs(&self) -> &[f64] {
        &self.segment_costs
    }

    /// Each segment's cost split evenly among the players that use it
    pub fn atomic_costs(&self) -> AtomicCosts {
        let n = self.segment_costs.len();
        let mut share = 0.0;

        let entries = self
            .segment_costs
            .iter()
            .enumerate()
            .map(|(j, &cost)| {
                // Players j..n use segment j
                share += cost / (n - j) as f64;
                (player_label(j), share)
            })
            .collect::<Vec<_>>();

        AtomicCosts::new(entries)
    }

    /// Runway cost for a coalition: the segments its most demanding member needs
    pub fn coalition_cost(&self, coalition: Coalition) -> f64 {
        coalition
            .max_member()
            .map_or(0.0, |last| self.segment_costs.iter().take(last + 1).sum())
    }

    /// Game over the split-cost shares, summed per coalition
    pub fn additive_game(&self) -> Result<Game> {
        Game::additive(
            format!("airport-additive-{}", self.players.len()),
            &self.atomic_costs(),
        )
    }

    /// Game over true runway costs
    pub fn airport_game(&self) -> Game {
        Game::from_rule(
            format!("airport-{}", self.players.len()),
            self.players.clone(),
            |coalition| self.coalition_cost(coalition),
        )
    }
}

fn player_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("P{index}")
    }
}
