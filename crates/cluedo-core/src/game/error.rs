use crate::belief::DeductionError;
use crate::model::category::Category;
use crate::model::player::PlayerId;
use thiserror::Error;

/// Problems building a game. These abort setup; nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player name '{0}' is reserved for yourself")]
    ReservedName(String),
    #[error("player '{0}' appears more than once")]
    DuplicatePlayer(String),
    #[error("player names cannot be empty")]
    EmptyName,
    #[error("{count} players exceeds the maximum of {max}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("'{0}' is not a card")]
    UnknownCard(String),
    #[error("starting hand has already been set")]
    StartingHandAlreadySet,
    #[error("{0} is not in the roster")]
    UnknownPlayer(PlayerId),
    #[error("starting hand contradicts known facts: {0}")]
    Contradiction(#[from] DeductionError),
}

/// Reasons a turn was rejected. A rejected turn leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("'{name}' is not a {category} card")]
    UnknownCard { category: Category, name: String },
    #[error("{0} is not in the roster")]
    UnknownPlayer(PlayerId),
    #[error("turn contradicts known facts: {0}")]
    Contradiction(#[from] DeductionError),
}
