use super::card_state::CardState;
use super::hypothesis::{HypothesisTable, Link, TriLink};
use crate::model::card::Card;
use crate::model::player::PlayerId;
use std::array;
use std::collections::VecDeque;
use thiserror::Error;

/// Facts that cannot all be true at once. The engine's own deductions are
/// sound, so these only surface when the recorded answers disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeductionError {
    #[error("{card} is already held by {existing}, not {claimed}")]
    ConflictingPossessor {
        card: Card,
        existing: PlayerId,
        claimed: PlayerId,
    },
    #[error("{player} cannot both hold and not hold {card}")]
    ExcludedPossessor { card: Card, player: PlayerId },
    #[error("{card} contradicts the known case-file cards")]
    SolutionConflict { card: Card },
}

/// Per-card knowledge for all 21 cards plus the open hypotheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: [CardState; Card::COUNT],
    hypotheses: HypothesisTable,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cards: array::from_fn(|_| CardState::default()),
            hypotheses: HypothesisTable::new(),
        }
    }

    pub fn card(&self, card: Card) -> &CardState {
        &self.cards[card.index()]
    }

    pub fn hypotheses(&self) -> &HypothesisTable {
        &self.hypotheses
    }

    pub fn iter(&self) -> impl Iterator<Item = (Card, &CardState)> {
        Card::ALL.into_iter().zip(self.cards.iter())
    }

    /// Number of cards known to be held by `player`.
    pub fn found_count(&self, player: PlayerId) -> usize {
        self.cards
            .iter()
            .filter(|state| state.possessor == Some(player))
            .count()
    }

    /// Records that `possessor` holds `card` and settles the hypotheses that
    /// name it.
    ///
    /// Links on the card are resolved only when `cascade_links` is set: a link
    /// owned by someone other than `possessor` forces its other card onto the
    /// link owner, and that follow-up is applied without a further link
    /// cascade. Trilinks are always settled; one owned by someone else shrinks
    /// to a link over its remaining two cards. Settled hypotheses are removed
    /// whichever way they resolve.
    pub fn mark_found(
        &mut self,
        card: Card,
        possessor: PlayerId,
        cascade_links: bool,
    ) -> Result<(), DeductionError> {
        let mut pending = VecDeque::from([(card, possessor, cascade_links)]);

        while let Some((card, possessor, cascade_links)) = pending.pop_front() {
            self.settle(card, possessor)?;

            if cascade_links {
                for link in self.hypotheses.take_links_on(card) {
                    if link.owner() == possessor {
                        continue;
                    }
                    if let Some(other) = link.other(card) {
                        tracing::trace!(
                            target: "cluedo_core::belief",
                            %card,
                            %other,
                            owner = %link.owner(),
                            "link resolved onto remaining card"
                        );
                        pending.push_back((other, link.owner(), false));
                    }
                }
            }

            for trilink in self.hypotheses.take_trilinks_on(card) {
                if trilink.owner() == possessor {
                    continue;
                }
                if let Some([a, b]) = trilink.others(card) {
                    tracing::trace!(
                        target: "cluedo_core::belief",
                        %card,
                        remaining_a = %a,
                        remaining_b = %b,
                        owner = %trilink.owner(),
                        "trilink shrunk to link"
                    );
                    self.hypotheses.add_link(Link::new(trilink.owner(), a, b));
                }
            }
        }

        Ok(())
    }

    fn settle(&mut self, card: Card, possessor: PlayerId) -> Result<(), DeductionError> {
        let state = &mut self.cards[card.index()];
        if let Some(existing) = state.possessor {
            if existing != possessor {
                return Err(DeductionError::ConflictingPossessor {
                    card,
                    existing,
                    claimed: possessor,
                });
            }
        }
        if state.non_possessors.contains(possessor) {
            return Err(DeductionError::ExcludedPossessor {
                card,
                player: possessor,
            });
        }
        if state.is_solution {
            return Err(DeductionError::SolutionConflict { card });
        }
        if state.possessor.is_none() {
            tracing::debug!(target: "cluedo_core::belief", %card, %possessor, "card found");
        }
        state.possessor = Some(possessor);
        Ok(())
    }

    /// Returns `true` when `player` was newly excluded.
    pub fn add_non_possessor(
        &mut self,
        card: Card,
        player: PlayerId,
    ) -> Result<bool, DeductionError> {
        let state = &mut self.cards[card.index()];
        if state.possessor == Some(player) {
            return Err(DeductionError::ExcludedPossessor { card, player });
        }
        Ok(state.non_possessors.insert(player))
    }

    pub fn add_link(&mut self, owner: PlayerId, a: Card, b: Card) -> bool {
        self.hypotheses.add_link(Link::new(owner, a, b))
    }

    pub fn add_trilink(&mut self, owner: PlayerId, a: Card, b: Card, c: Card) -> bool {
        self.hypotheses.add_trilink(TriLink::new(owner, a, b, c))
    }

    /// Marks `card` as its category's case-file card. Returns `true` when the
    /// flag is new.
    pub fn flag_solution(&mut self, card: Card) -> Result<bool, DeductionError> {
        if self.card(card).is_solution {
            return Ok(false);
        }
        if self.card(card).found() {
            return Err(DeductionError::SolutionConflict { card });
        }
        if self.solution(card.category()).is_some() {
            return Err(DeductionError::SolutionConflict { card });
        }
        tracing::debug!(target: "cluedo_core::belief", %card, "case-file card identified");
        self.cards[card.index()].is_solution = true;
        Ok(true)
    }
}
