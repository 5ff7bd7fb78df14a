use crate::model::card::Card;
use crate::model::player::PlayerId;

/// `owner` holds at least one of two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    owner: PlayerId,
    cards: [Card; 2],
}

impl Link {
    pub fn new(owner: PlayerId, a: Card, b: Card) -> Self {
        assert_ne!(a, b, "a link needs two distinct cards");
        let mut cards = [a, b];
        cards.sort();
        Self { owner, cards }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn cards(&self) -> [Card; 2] {
        self.cards
    }

    pub fn involves(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The card on the other side of `card`, if `card` is part of this link.
    pub fn other(&self, card: Card) -> Option<Card> {
        match self.cards {
            [a, b] if a == card => Some(b),
            [a, b] if b == card => Some(a),
            _ => None,
        }
    }
}

/// `owner` holds at least one of three cards. Equality ignores the order the
/// cards were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriLink {
    owner: PlayerId,
    cards: [Card; 3],
}

impl TriLink {
    pub fn new(owner: PlayerId, a: Card, b: Card, c: Card) -> Self {
        assert!(
            a != b && b != c && a != c,
            "a trilink needs three distinct cards"
        );
        let mut cards = [a, b, c];
        cards.sort();
        Self { owner, cards }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn cards(&self) -> [Card; 3] {
        self.cards
    }

    pub fn involves(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The remaining pair once `card` is taken out.
    pub fn others(&self, card: Card) -> Option<[Card; 2]> {
        let [a, b, c] = self.cards;
        if card == a {
            Some([b, c])
        } else if card == b {
            Some([a, c])
        } else if card == c {
            Some([a, b])
        } else {
            None
        }
    }
}

/// Every open hypothesis, stored once and shared by all the cards it names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HypothesisTable {
    links: Vec<Link>,
    trilinks: Vec<TriLink>,
}

impl HypothesisTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when an equal link is already recorded.
    pub fn add_link(&mut self, link: Link) -> bool {
        if self.links.contains(&link) {
            return false;
        }
        self.links.push(link);
        true
    }

    /// Returns `false` when an equal trilink is already recorded.
    pub fn add_trilink(&mut self, trilink: TriLink) -> bool {
        if self.trilinks.contains(&trilink) {
            return false;
        }
        self.trilinks.push(trilink);
        true
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn trilinks(&self) -> &[TriLink] {
        &self.trilinks
    }

    pub fn links_on(&self, card: Card) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(move |link| link.involves(card))
    }

    pub fn trilinks_on(&self, card: Card) -> impl Iterator<Item = &TriLink> {
        self.trilinks
            .iter()
            .filter(move |trilink| trilink.involves(card))
    }

    /// Removes and returns every link naming `card`.
    pub fn take_links_on(&mut self, card: Card) -> Vec<Link> {
        let (taken, kept): (Vec<_>, Vec<_>) =
            self.links.drain(..).partition(|link| link.involves(card));
        self.links = kept;
        taken
    }

    /// Removes and returns every trilink naming `card`.
    pub fn take_trilinks_on(&mut self, card: Card) -> Vec<TriLink> {
        let (taken, kept): (Vec<_>, Vec<_>) = self
            .trilinks
            .drain(..)
            .partition(|trilink| trilink.involves(card));
        self.trilinks = kept;
        taken
    }

    pub fn len(&self) -> usize {
        self.links.len() + self.trilinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.trilinks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: PlayerId = PlayerId::new(1);
    const BOB: PlayerId = PlayerId::new(2);

    #[test]
    fn link_is_visible_from_both_cards() {
        let mut table = HypothesisTable::new();
        assert!(table.add_link(Link::new(ALICE, Card::Dagger, Card::Bedroom)));

        let from_dagger: Vec<_> = table.links_on(Card::Dagger).collect();
        let from_bedroom: Vec<_> = table.links_on(Card::Bedroom).collect();
        assert_eq!(from_dagger.len(), 1);
        assert_eq!(from_dagger, from_bedroom);
        assert_eq!(from_dagger[0].other(Card::Dagger), Some(Card::Bedroom));
        assert_eq!(from_dagger[0].other(Card::Bedroom), Some(Card::Dagger));
        assert_eq!(from_dagger[0].other(Card::Green), None);
    }

    #[test]
    fn duplicate_links_are_skipped_regardless_of_order() {
        let mut table = HypothesisTable::new();
        assert!(table.add_link(Link::new(ALICE, Card::Dagger, Card::Bedroom)));
        assert!(!table.add_link(Link::new(ALICE, Card::Bedroom, Card::Dagger)));
        assert!(table.add_link(Link::new(BOB, Card::Bedroom, Card::Dagger)));
        assert_eq!(table.links().len(), 2);
    }

    #[test]
    fn trilink_equality_ignores_order() {
        let a = TriLink::new(ALICE, Card::Green, Card::Dagger, Card::Bedroom);
        let b = TriLink::new(ALICE, Card::Bedroom, Card::Green, Card::Dagger);
        let c = TriLink::new(BOB, Card::Bedroom, Card::Green, Card::Dagger);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut table = HypothesisTable::new();
        assert!(table.add_trilink(a));
        assert!(!table.add_trilink(b));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn trilink_others_drops_one_card() {
        let trilink = TriLink::new(ALICE, Card::Green, Card::Dagger, Card::Bedroom);
        assert_eq!(
            trilink.others(Card::Dagger),
            Some([Card::Green, Card::Bedroom])
        );
        assert_eq!(trilink.others(Card::Rope), None);
    }

    #[test]
    fn take_removes_from_every_side() {
        let mut table = HypothesisTable::new();
        table.add_link(Link::new(ALICE, Card::Dagger, Card::Bedroom));
        table.add_link(Link::new(ALICE, Card::Green, Card::Study));
        table.add_trilink(TriLink::new(BOB, Card::Green, Card::Dagger, Card::Bedroom));

        let taken = table.take_links_on(Card::Bedroom);
        assert_eq!(taken.len(), 1);
        assert_eq!(table.links_on(Card::Dagger).count(), 0);
        assert_eq!(table.links_on(Card::Green).count(), 1);

        let taken = table.take_trilinks_on(Card::Green);
        assert_eq!(taken.len(), 1);
        assert_eq!(table.trilinks_on(Card::Dagger).count(), 0);
        assert_eq!(table.trilinks_on(Card::Bedroom).count(), 0);
    }

    #[test]
    #[should_panic(expected = "two distinct cards")]
    fn self_link_is_rejected() {
        let _ = Link::new(ALICE, Card::Rope, Card::Rope);
    }
}
