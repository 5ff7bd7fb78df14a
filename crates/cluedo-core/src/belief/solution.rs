//! Case-file deduction for one category at a time.

use super::board::{Board, DeductionError};
use crate::model::card::Card;
use crate::model::category::Category;
use crate::model::player::PlayerId;

impl Board {
    /// Cards of `category` nobody is known to hold yet.
    pub fn unfound(&self, category: Category) -> impl Iterator<Item = Card> + '_ {
        category
            .cards()
            .iter()
            .copied()
            .filter(|card| !self.card(*card).found())
    }

    /// The flagged case-file card of `category`, if any.
    pub fn solution(&self, category: Category) -> Option<Card> {
        category
            .cards()
            .iter()
            .copied()
            .find(|card| self.card(*card).is_solution())
    }

    /// True iff exactly one card of `category` is still unfound.
    pub fn has_known_solution(&self, category: Category) -> bool {
        self.unfound(category).count() == 1
    }

    /// Flags the last unfound card of `category` as its case-file card.
    /// Does nothing once a card of the category is flagged.
    pub fn update_solution_knowledge(
        &mut self,
        category: Category,
    ) -> Result<Option<Card>, DeductionError> {
        if self.solution(category).is_some() {
            return Ok(None);
        }

        let unfound: Vec<Card> = self.unfound(category).collect();
        let [last] = unfound[..] else {
            return Ok(None);
        };
        self.flag_solution(last)?;
        Ok(Some(last))
    }

    /// Marks the card called `name` in `category` as held by `possessor`,
    /// cascading links. Returns `false` when the category has no such card.
    pub fn find_card(
        &mut self,
        category: Category,
        name: &str,
        possessor: PlayerId,
    ) -> Result<bool, DeductionError> {
        let Some(card) = category.find(name) else {
            return Ok(false);
        };
        self.mark_found(card, possessor, true)?;
        Ok(true)
    }
}
