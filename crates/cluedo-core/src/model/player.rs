use crate::game::SetupError;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Stable roster index. Two players are the same iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The self-participant always occupies the first roster slot.
    pub const SELF: PlayerId = PlayerId(0);

    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_self(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player #{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand_size: Option<usize>,
}

impl Player {
    /// A `hand_size` of zero means the size has not been declared yet.
    pub fn new(name: impl Into<String>, hand_size: usize) -> Self {
        Self {
            name: name.into(),
            hand_size: (hand_size > 0).then_some(hand_size),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand_size(&self) -> Option<usize> {
        self.hand_size
    }

    pub(crate) fn set_hand_size(&mut self, hand_size: usize) {
        self.hand_size = (hand_size > 0).then_some(hand_size);
    }
}

/// Ordered participants; the self-participant is always present at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub const SELF_NAME: &'static str = "me";
    pub const MAX_PLAYERS: usize = 16;

    pub fn new(others: impl IntoIterator<Item = Player>) -> Result<Self, SetupError> {
        let mut players = vec![Player::new(Self::SELF_NAME, 0)];

        for player in others {
            let name = player.name().trim().to_string();
            if name.is_empty() {
                return Err(SetupError::EmptyName);
            }
            if name.eq_ignore_ascii_case(Self::SELF_NAME) {
                return Err(SetupError::ReservedName(name));
            }
            if players
                .iter()
                .any(|existing| existing.name().eq_ignore_ascii_case(&name))
            {
                return Err(SetupError::DuplicatePlayer(name));
            }
            players.push(Player {
                name,
                hand_size: player.hand_size,
            });
        }

        if players.len() > Self::MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers {
                count: players.len(),
                max: Self::MAX_PLAYERS,
            });
        }

        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false, since the self-participant is always seated. Pairs with `len`.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        id.index() < self.players.len()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn name(&self, id: PlayerId) -> Option<&str> {
        self.get(id).map(Player::name)
    }

    /// Resolves a participant by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        let needle = name.trim();
        self.players
            .iter()
            .position(|player| player.name().eq_ignore_ascii_case(needle))
            .map(|index| PlayerId(index as u8))
    }

    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len() as u8).map(PlayerId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, player)| (PlayerId(i as u8), player))
    }

    /// Every participant except the self-participant.
    pub fn others(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.iter().skip(1)
    }

    pub(crate) fn set_hand_size(&mut self, id: PlayerId, hand_size: usize) -> bool {
        match self.players.get_mut(id.index()) {
            Some(player) => {
                player.set_hand_size(hand_size);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new([
            Player::new("alice", 5),
            Player::new("bob", 5),
            Player::new("charlie", 0),
        ])
        .expect("valid roster")
    }

    #[test]
    fn self_participant_is_first() {
        let roster = sample();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.name(PlayerId::SELF), Some(Roster::SELF_NAME));
        assert!(PlayerId::SELF.is_self());
        assert_eq!(roster.find("bob"), Some(PlayerId::new(2)));
        assert_eq!(roster.find("ME"), Some(PlayerId::SELF));
    }

    #[test]
    fn roster_without_opponents_still_seats_self() {
        let roster = Roster::new(Vec::<Player>::new()).expect("valid roster");
        assert_eq!(roster.len(), 1);
        assert!(!roster.is_empty());
        assert!(roster.contains(PlayerId::SELF));
    }

    #[test]
    fn zero_hand_size_is_undeclared() {
        let roster = sample();
        let charlie = roster.find("charlie").unwrap();
        assert_eq!(roster.get(charlie).unwrap().hand_size(), None);
        assert_eq!(roster.get(PlayerId::new(1)).unwrap().hand_size(), Some(5));
    }

    #[test]
    fn rejects_reserved_name() {
        let err = Roster::new([Player::new("Me", 3)]).unwrap_err();
        assert_eq!(err, SetupError::ReservedName("Me".to_string()));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Roster::new([Player::new("alice", 3), Player::new("Alice", 3)]).unwrap_err();
        assert_eq!(err, SetupError::DuplicatePlayer("Alice".to_string()));
    }

    #[test]
    fn rejects_blank_names() {
        let err = Roster::new([Player::new("  ", 3)]).unwrap_err();
        assert_eq!(err, SetupError::EmptyName);
    }

    #[test]
    fn rejects_oversized_roster() {
        let players = (0..Roster::MAX_PLAYERS).map(|i| Player::new(format!("p{i}"), 1));
        let err = Roster::new(players).unwrap_err();
        assert!(matches!(err, SetupError::TooManyPlayers { count: 17, .. }));
    }

    #[test]
    fn unknown_ids_are_not_members() {
        let roster = sample();
        assert!(roster.contains(PlayerId::new(3)));
        assert!(!roster.contains(PlayerId::new(4)));
        assert_eq!(roster.others().count(), 3);
    }
}
