use crate::model::player::{PlayerId, Roster};

/// Bit-mask of roster members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayerSet(u16);

impl PlayerSet {
    pub const EMPTY: Self = Self(0);

    pub fn contains(self, player: PlayerId) -> bool {
        self.0 & Self::bit(player) != 0
    }

    pub fn with(mut self, player: PlayerId) -> Self {
        self.0 |= Self::bit(player);
        self
    }

    /// Returns `true` when `player` was not already present.
    pub fn insert(&mut self, player: PlayerId) -> bool {
        let before = self.0;
        self.0 |= Self::bit(player);
        before != self.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = PlayerId> {
        (0..Roster::MAX_PLAYERS as u8)
            .map(PlayerId::new)
            .filter(move |player| self.contains(*player))
    }

    fn bit(player: PlayerId) -> u16 {
        assert!(
            player.index() < Roster::MAX_PLAYERS,
            "player index {} outside the roster limit",
            player.index()
        );
        1 << player.index()
    }
}

impl FromIterator<PlayerId> for PlayerSet {
    fn from_iter<I: IntoIterator<Item = PlayerId>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, PlayerSet::with)
    }
}

/// Everything known about a single card.
///
/// A card is found iff it has a possessor; the possessor never appears among
/// the non-possessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub(crate) possessor: Option<PlayerId>,
    pub(crate) non_possessors: PlayerSet,
    pub(crate) is_solution: bool,
}

impl CardState {
    pub fn found(&self) -> bool {
        self.possessor.is_some()
    }

    pub fn possessor(&self) -> Option<PlayerId> {
        self.possessor
    }

    pub fn non_possessors(&self) -> PlayerSet {
        self.non_possessors
    }

    pub fn is_solution(&self) -> bool {
        self.is_solution
    }

    /// Known to be held by somebody other than `player`.
    pub fn held_by_other_than(&self, player: PlayerId) -> bool {
        matches!(self.possessor, Some(owner) if owner != player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_novelty() {
        let mut set = PlayerSet::EMPTY;
        assert!(set.insert(PlayerId::new(3)));
        assert!(!set.insert(PlayerId::new(3)));
        assert!(set.contains(PlayerId::new(3)));
        assert!(!set.contains(PlayerId::new(2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iter_yields_members_in_roster_order() {
        let set: PlayerSet = [PlayerId::new(4), PlayerId::SELF, PlayerId::new(2)]
            .into_iter()
            .collect();
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![PlayerId::SELF, PlayerId::new(2), PlayerId::new(4)]);
    }

    #[test]
    fn found_follows_possessor() {
        let mut state = CardState::default();
        assert!(!state.found());
        state.possessor = Some(PlayerId::new(1));
        assert!(state.found());
        assert!(state.held_by_other_than(PlayerId::new(2)));
        assert!(!state.held_by_other_than(PlayerId::new(1)));
    }

    #[test]
    #[should_panic(expected = "outside the roster limit")]
    fn ids_beyond_the_limit_panic() {
        let _ = PlayerSet::EMPTY.with(PlayerId::new(16));
    }
}
