use crate::{
    coalition_table::CoalitionValueTable,
    cost::TableCost,
    error::Result,
    shapley::{SamplingConfig, exact_shapley, sampled_shapley_with, subset_shapley},
    types::{Allocation, AtomicCosts, Coalition, Players},
};

/// An immutable cooperative game: a roster and the value of every coalition
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    name: String,
    table: CoalitionValueTable,
}

impl Game {
    /// Game whose coalition values are sums of atomic costs
    pub fn additive(name: impl Into<String>, atomic_costs: &AtomicCosts) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            table: CoalitionValueTable::additive(atomic_costs)?,
        })
    }

    /// Game whose coalition values come from a caller-supplied rule
    pub fn from_rule<F>(name: impl Into<String>, players: Players, rule: F) -> Self
    where
        F: Fn(Coalition) -> f64,
    {
        Self {
            name: name.into(),
            table: CoalitionValueTable::from_rule(players, rule),
        }
    }

    pub fn from_table(name: impl Into<String>, table: CoalitionValueTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &Players {
        self.table.players()
    }

    pub fn table(&self) -> &CoalitionValueTable {
        &self.table
    }

    pub fn cost(&self) -> TableCost<'_> {
        TableCost::new(&self.table)
    }

    /// Cost of the grand coalition less the cost of nobody
    pub fn total_cost(&self) -> f64 {
        self.table.full_value() - self.table.empty_value()
    }

    pub fn exact(&self) -> Result<Allocation> {
        exact_shapley(self.players(), &self.cost())
    }

    pub fn exact_by_subsets(&self) -> Result<Allocation> {
        subset_shapley(self.players(), &self.cost())
    }

    /// Sampled estimate; a game without players has an empty allocation
    pub fn sampled(&self, config: &SamplingConfig) -> Result<Allocation> {
        if self.players().is_empty() {
            return Ok(Allocation::default());
        }
        sampled_shapley_with(self.players(), &self.cost(), config)
    }
}
