//! The per-turn closure pass.
//!
//! Runs three phases once, in order. It is not iterated to a fixpoint: a
//! deduction that needs a later phase's output to feed an earlier phase only
//! lands on the next pass.

use crate::belief::{Board, DeductionError, PlayerSet};
use crate::model::card::Card;
use crate::model::category::Category;
use crate::model::player::{PlayerId, Roster};

pub(crate) fn run(board: &mut Board, roster: &Roster) -> Result<(), DeductionError> {
    settle_categories(board, roster)?;
    propagate_non_possessors(board, roster)?;
    complete_hands(board, roster)?;
    Ok(())
}

/// Phase one: last-one-standing per category, then any card nobody can hold.
fn settle_categories(board: &mut Board, roster: &Roster) -> Result<(), DeductionError> {
    for category in Category::ALL {
        board.update_solution_knowledge(category)?;
    }

    let everyone: PlayerSet = roster.ids().collect();
    for card in Card::ALL {
        if board.card(card).non_possessors() == everyone && board.flag_solution(card)? {
            tracing::debug!(
                target: "cluedo_core::game",
                %card,
                "nobody holds card, flagged as case-file card"
            );
        }
    }
    Ok(())
}

/// Phase two: a found or case-file card is held by nobody but its possessor.
fn propagate_non_possessors(board: &mut Board, roster: &Roster) -> Result<(), DeductionError> {
    for card in Card::ALL {
        let state = *board.card(card);
        if !state.found() && !state.is_solution() {
            continue;
        }
        for player in roster.ids() {
            if state.possessor() == Some(player) {
                continue;
            }
            board.add_non_possessor(card, player)?;
        }
    }
    Ok(())
}

/// Phase three: hand-size bookkeeping for every other participant.
fn complete_hands(board: &mut Board, roster: &Roster) -> Result<(), DeductionError> {
    for (player, info) in roster.others() {
        let Some(hand_size) = info.hand_size() else {
            continue;
        };

        let found = board.found_count(player);
        if found == hand_size {
            for card in Card::ALL {
                if board.card(card).possessor() != Some(player) {
                    board.add_non_possessor(card, player)?;
                }
            }
            continue;
        }

        let open = open_cards(board, player);
        if found < hand_size && open.len() == hand_size - found {
            tracing::debug!(
                target: "cluedo_core::game",
                player = info.name(),
                remaining = open.len(),
                "open cards fill the rest of the hand"
            );
            for card in open {
                board.mark_found(card, player, true)?;
            }
        }
    }
    Ok(())
}

/// Cards `player` might still hold: not excluded and not held by anyone.
fn open_cards(board: &Board, player: PlayerId) -> Vec<Card> {
    board
        .iter()
        .filter(|(_, state)| !state.non_possessors().contains(player) && !state.found())
        .map(|(card, _)| card)
        .collect()
}
