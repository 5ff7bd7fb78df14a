//! Turn application and the closure pass that follows every turn.

mod analysis;
mod closure;
mod error;
pub mod snapshot;
mod state;

pub use error::{SetupError, TurnError};
pub use snapshot::{CardSnapshot, GameSnapshot, HypothesisSnapshot, PlayerSnapshot};
pub use state::{Game, TurnReport};
