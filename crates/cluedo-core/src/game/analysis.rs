use crate::belief::{Board, DeductionError};
use crate::model::card::Card;
use crate::model::player::PlayerId;

/// Records that `answerer` showed one of `cards` to someone else.
///
/// Cards known to belong to another player cannot be the one shown, so the
/// remaining candidates become a found card, a link, or a trilink.
pub(crate) fn apply_unknown_answer(
    board: &mut Board,
    cards: [Card; 3],
    answerer: PlayerId,
) -> Result<(), DeductionError> {
    let states = cards.map(|card| *board.card(card));
    if states.iter().all(|state| state.found()) {
        return Ok(());
    }
    if states
        .iter()
        .any(|state| state.possessor() == Some(answerer))
    {
        return Ok(());
    }

    let candidates: Vec<Card> = cards
        .into_iter()
        .zip(states)
        .filter(|(_, state)| !state.held_by_other_than(answerer))
        .map(|(card, _)| card)
        .collect();

    match candidates[..] {
        [card] => {
            tracing::debug!(
                target: "cluedo_core::game",
                %card,
                %answerer,
                "only one candidate left for the shown card"
            );
            board.mark_found(card, answerer, true)?;
        }
        [a, b] => {
            board.add_link(answerer, a, b);
        }
        [a, b, c] => {
            board.add_trilink(answerer, a, b, c);
        }
        _ => {}
    }
    Ok(())
}
