use crate::{
    error::Result,
    types::{AtomicCosts, Coalition, Players},
    utils::combinations,
};

/// Value of every coalition of a roster, indexed by coalition mask.
///
/// Built once per game and read-only afterwards. For `n` players it holds
/// exactly `2^n` entries, the empty coalition included.
#[derive(Debug, Clone, PartialEq)]
pub struct CoalitionValueTable {
    players: Players,
    values: Vec<f64>,
}

impl CoalitionValueTable {
    /// Additive table: a coalition costs the sum of its members' atomic costs
    pub fn additive(atomic_costs: &AtomicCosts) -> Result<Self> {
        let players = atomic_costs.players()?;
        let costs = atomic_costs.finite_costs()?;

        Ok(Self::from_rule(players, |coalition| {
            coalition.members().map(|index| costs[index]).sum()
        }))
    }

    /// Table filled by an arbitrary deterministic coalition rule
    pub fn from_rule<F>(players: Players, rule: F) -> Self
    where
        F: Fn(Coalition) -> f64,
    {
        let n = players.len();
        let mut values = vec![0.0; 1 << n];

        // Walk subsets by size, then by combination
        for r in 0..=n {
            for mask in combinations(n, r) {
                values[mask as usize] = rule(Coalition::from_mask(mask));
            }
        }

        log::debug!("built coalition value table: {} players, {} entries", n, values.len());

        Self { players, values }
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Stored value, or None for coalitions outside the roster
    pub fn get(&self, coalition: Coalition) -> Option<f64> {
        self.values.get(coalition.mask() as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (coalition, value) pairs in mask order
    pub fn iter(&self) -> impl Iterator<Item = (Coalition, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(mask, &value)| (Coalition::from_mask(mask as u32), value))
    }

    pub fn full_value(&self) -> f64 {
        self.values[self.players.full().mask() as usize]
    }

    pub fn empty_value(&self) -> f64 {
        self.values[0]
    }
}

/// Build the additive coalition value table for a set of atomic costs
pub fn build_value_table(atomic_costs: &AtomicCosts) -> Result<CoalitionValueTable> {
    CoalitionValueTable::additive(atomic_costs)
}
