use crate::error::{Result, ShapleyError};
use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
};

#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

// For clarity
pub type Player = String;

/// Hard cap on roster size; a value table holds 2^n entries
pub const MAX_PLAYERS: usize = 20;

/// A set of players, stored as a bit mask over roster indices.
///
/// Membership is the only thing that matters, so two coalitions built from the
/// same players in different orders are equal and hash identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coalition(u32);

impl Coalition {
    pub const EMPTY: Coalition = Coalition(0);

    pub fn from_mask(mask: u32) -> Self {
        Coalition(mask)
    }

    /// Coalition containing every player of an `n`-player roster
    pub fn full(n: usize) -> Self {
        if n >= 32 {
            Coalition(u32::MAX)
        } else {
            Coalition((1u32 << n) - 1)
        }
    }

    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        indices
            .into_iter()
            .fold(Coalition::EMPTY, |coalition, index| coalition.with(index))
    }

    pub fn mask(self) -> u32 {
        self.0
    }

    /// Add a member; an index past the mask width yields a coalition no table holds
    pub fn with(self, index: usize) -> Self {
        match bit(index) {
            Some(bit) => Coalition(self.0 | bit),
            None => Coalition(u32::MAX),
        }
    }

    pub fn without(self, index: usize) -> Self {
        match bit(index) {
            Some(bit) => Coalition(self.0 & !bit),
            None => self,
        }
    }

    pub fn contains(self, index: usize) -> bool {
        index < 32 && (self.0 >> index) & 1 == 1
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Roster indices of the members, ascending
    pub fn members(self) -> impl Iterator<Item = usize> {
        (0..32).filter(move |&index| self.contains(index))
    }

    /// Highest roster index in the coalition
    pub fn max_member(self) -> Option<usize> {
        (self.0 != 0).then(|| 31 - self.0.leading_zeros() as usize)
    }
}

fn bit(index: usize) -> Option<u32> {
    u32::try_from(index)
        .ok()
        .and_then(|shift| 1u32.checked_shl(shift))
}

/// Ordered, duplicate-free list of player labels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Players {
    labels: Vec<Player>,
    index: HashMap<Player, usize>,
}

impl Players {
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Player>,
    {
        let labels: Vec<Player> = labels.into_iter().map(Into::into).collect();
        if labels.len() > MAX_PLAYERS {
            return Err(ShapleyError::TooManyPlayers {
                count: labels.len(),
                limit: MAX_PLAYERS,
            });
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(ShapleyError::DuplicatePlayer(label.clone()));
            }
        }

        Ok(Self { labels, index })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Player] {
        &self.labels
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn full(&self) -> Coalition {
        Coalition::full(self.len())
    }

    /// Coalition for a set of labels; None if any label is not on the roster
    pub fn coalition_of<S: AsRef<str>>(&self, labels: &[S]) -> Option<Coalition> {
        labels.iter().try_fold(Coalition::EMPTY, |coalition, label| {
            self.index_of(label.as_ref())
                .map(|index| coalition.with(index))
        })
    }

    /// Labels of a coalition's members in roster order
    pub fn labels_in(&self, coalition: Coalition) -> Vec<&str> {
        coalition
            .members()
            .filter_map(|index| self.label(index))
            .collect()
    }

    /// Whether the coalition only refers to players on this roster
    pub fn covers(&self, coalition: Coalition) -> bool {
        coalition.mask() & !self.full().mask() == 0
    }
}

/// Per-player atomic costs, in input order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtomicCosts {
    entries: Vec<(Player, f64)>,
}

impl AtomicCosts {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<Player>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(player, cost)| (player.into(), cost))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(player, cost)| (player.as_str(), *cost))
    }

    pub fn get(&self, player: &str) -> Option<f64> {
        self.iter()
            .find(|(label, _)| *label == player)
            .map(|(_, cost)| cost)
    }

    pub fn players(&self) -> Result<Players> {
        Players::new(self.entries.iter().map(|(player, _)| player.clone()))
    }

    /// Costs in roster order, rejecting NaN and infinities
    pub(crate) fn finite_costs(&self) -> Result<Vec<f64>> {
        self.entries
            .iter()
            .map(|(player, cost)| {
                if cost.is_finite() {
                    Ok(*cost)
                } else {
                    Err(ShapleyError::InvalidCost {
                        player: player.clone(),
                        cost: *cost,
                    })
                }
            })
            .collect()
    }
}

impl Display for AtomicCosts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(player, cost)| format!("{player}: {cost}"))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Individual Shapley value for a player
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
#[derive(Debug, Clone, PartialEq)]
pub struct ShapleyValue {
    pub player: Player,
    pub value: f64,
    #[cfg_attr(feature = "serde", tabled(display = "display_as_percent"))]
    pub proportion: f64,
}

#[cfg(feature = "serde")]
fn display_as_percent(proportion: &f64) -> String {
    format!("{:.2}%", proportion * 100.0)
}

impl Display for ShapleyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: value: {}, proportion: {}",
            self.player, self.value, self.proportion
        )
    }
}

/// Shapley allocation: one value per player, in roster order
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Allocation(Vec<ShapleyValue>);

impl Allocation {
    /// Attach labels and proportions to raw per-player values
    pub(crate) fn from_values(players: &Players, values: Vec<f64>) -> Self {
        let total: f64 = values.iter().map(|v| v.max(0.0)).sum();

        let entries = players
            .labels()
            .iter()
            .zip(values)
            .map(|(player, value)| {
                let proportion = if total > 0.0 {
                    value.max(0.0) / total
                } else {
                    0.0
                };
                ShapleyValue {
                    player: player.clone(),
                    value,
                    proportion,
                }
            })
            .collect();

        Allocation(entries)
    }

    pub fn get(&self, player: &str) -> Option<&ShapleyValue> {
        self.0.iter().find(|sv| sv.player == player)
    }

    /// Shapley value for a player, if allocated
    pub fn value(&self, player: &str) -> Option<f64> {
        self.get(player).map(|sv| sv.value)
    }

    /// Sum of all allocated values
    pub fn total(&self) -> f64 {
        self.0.iter().map(|sv| sv.value).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapleyValue> {
        self.0.iter()
    }
}

impl IntoIterator for Allocation {
    type Item = ShapleyValue;
    type IntoIter = std::vec::IntoIter<ShapleyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Allocation {
    type Item = &'a ShapleyValue;
    type IntoIter = std::slice::Iter<'a, ShapleyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|sv| format!("{}:{}", sv.player, sv.value))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(feature = "serde")]
mod csv_support {
    use super::*;
    use std::path::Path;

    #[derive(Debug, Deserialize)]
    struct AtomicCostRecord {
        #[serde(rename = "Player")]
        player: String,
        #[serde(rename = "Cost")]
        cost: f64,
    }

    impl AtomicCosts {
        /// Read atomic costs from a CSV file with `Player,Cost` columns
        pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
            let reader =
                csv::Reader::from_path(path).map_err(|e| ShapleyError::Input(e.to_string()))?;
            Self::from_csv_reader(reader)
        }

        /// Read atomic costs from any CSV source
        pub fn from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
            let mut entries = Vec::new();
            for result in reader.deserialize() {
                let record: AtomicCostRecord =
                    result.map_err(|e| ShapleyError::Input(e.to_string()))?;
                entries.push((record.player, record.cost));
            }

            Ok(AtomicCosts::new(entries))
        }
    }
}
