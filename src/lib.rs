//! Shapley value cost allocation for cooperative games
//!
//! This library builds coalition value tables for finite games and splits the
//! grand coalition's cost among players, either exactly (every ordering of the
//! players) or approximately (randomly sampled orderings). Random airport-game
//! instances are provided as benchmarks.

pub mod airport;
pub mod coalition_table;
pub mod cost;
pub mod error;
pub mod game;
pub mod permutation;
pub mod shapley;
pub mod types;
mod utils;

// Re-export main types and functions
pub use airport::AirportInstance;
pub use coalition_table::{CoalitionValueTable, build_value_table};
pub use cost::{CostFunction, TableCost, UNREACHABLE};
pub use error::{Result, ShapleyError};
pub use game::Game;
pub use shapley::{
    MAX_EXACT_PLAYERS, Normalization, SamplingConfig, exact_shapley, sampled_shapley,
    sampled_shapley_with, sampled_shapley_with_rng, subset_shapley,
};
pub use types::{Allocation, AtomicCosts, Coalition, MAX_PLAYERS, Player, Players, ShapleyValue};
