use thiserror::Error;

/// Error types for the Shapley computation system
#[derive(Debug, Error)]
pub enum ShapleyError {
    /// Arguments that make the requested computation undefined
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The same label appears twice in a roster
    #[error("Player {0} appears more than once; player labels must be unique.")]
    DuplicatePlayer(String),

    /// Too many players for the requested computation
    #[error("There are too many players ({count}); the limit is {limit}.")]
    TooManyPlayers { count: usize, limit: usize },

    /// Atomic cost is NaN or infinite
    #[error("Player {player} has a non-finite cost: {cost}")]
    InvalidCost { player: String, cost: f64 },

    /// Failure reading game input
    #[error("Input error: {0}")]
    Input(String),
}

/// Result type alias for Shapley operations
pub type Result<T> = std::result::Result<T, ShapleyError>;
