//! Deterministic knowledge about card ownership.
//!
//! This module is composed of:
//! - `card_state`: per-card facts (`CardState`) and the `PlayerSet` mask.
//! - `hypothesis`: the central link/trilink table.
//! - `board`: card states plus hypotheses, and the found-card cascade.
//! - `solution`: per-category case-file deduction on top of the board.

mod board;
mod card_state;
mod hypothesis;
mod solution;

pub use board::{Board, DeductionError};
pub use card_state::{CardState, PlayerSet};
pub use hypothesis::{HypothesisTable, Link, TriLink};
