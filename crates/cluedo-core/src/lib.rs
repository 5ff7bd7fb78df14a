#![deny(warnings)]
//! Logical deduction engine for Cluedo.
//!
//! The engine tracks which participant holds each of the 21 cards and which
//! card of every category sits in the case file, using elimination only:
//! - `model`: the fixed card catalogue, categories, roster and question events.
//! - `belief`: per-card knowledge and the link/trilink hypothesis table.
//! - `game`: turn application and the per-turn closure pass.

pub mod belief;
pub mod game;
pub mod model;

pub use belief::{Board, CardState, DeductionError, HypothesisTable, Link, PlayerSet, TriLink};
pub use game::{Game, GameSnapshot, SetupError, TurnError, TurnReport};
pub use model::{Answer, Card, Category, Player, PlayerId, Question, Roster};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "cluedo-assistant"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
