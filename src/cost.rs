use crate::{coalition_table::CoalitionValueTable, types::Coalition};

/// Value returned for coalitions the table does not know about
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A pure coalition cost function
pub trait CostFunction {
    fn value(&self, coalition: Coalition) -> f64;
}

impl<F> CostFunction for F
where
    F: Fn(Coalition) -> f64,
{
    fn value(&self, coalition: Coalition) -> f64 {
        self(coalition)
    }
}

impl CostFunction for CoalitionValueTable {
    fn value(&self, coalition: Coalition) -> f64 {
        self.get(coalition).unwrap_or(UNREACHABLE)
    }
}

/// Cost function backed by a coalition value table.
///
/// Lookups for coalitions outside the table return [`UNREACHABLE`] rather than
/// failing, so a malformed subset can never look cheaper than a real one.
#[derive(Debug, Clone, Copy)]
pub struct TableCost<'a> {
    table: &'a CoalitionValueTable,
}

impl<'a> TableCost<'a> {
    pub fn new(table: &'a CoalitionValueTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CoalitionValueTable {
        self.table
    }

    /// Lookup by player labels; unknown labels are unreachable
    pub fn value_of<S: AsRef<str>>(&self, labels: &[S]) -> f64 {
        self.table
            .players()
            .coalition_of(labels)
            .map_or(UNREACHABLE, |coalition| self.value(coalition))
    }
}

impl CostFunction for TableCost<'_> {
    fn value(&self, coalition: Coalition) -> f64 {
        self.table.value(coalition)
    }
}
