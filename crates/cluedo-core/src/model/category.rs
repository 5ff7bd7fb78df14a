use crate::model::card::Card;
use core::fmt;

static WHO_CARDS: [Card; 6] = [
    Card::Green,
    Card::Mustard,
    Card::Peacock,
    Card::Plum,
    Card::Scarlet,
    Card::White,
];

static WHAT_CARDS: [Card; 6] = [
    Card::Wrench,
    Card::Candlestick,
    Card::Dagger,
    Card::Pistol,
    Card::LeadPipe,
    Card::Rope,
];

static WHERE_CARDS: [Card; 9] = [
    Card::Bathroom,
    Card::Study,
    Card::DiningRoom,
    Card::GamesRoom,
    Card::Garage,
    Card::Bedroom,
    Card::LivingRoom,
    Card::Kitchen,
    Card::Courtyard,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Who = 0,
    What = 1,
    Where = 2,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Who, Category::What, Category::Where];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn cards(self) -> &'static [Card] {
        match self {
            Category::Who => &WHO_CARDS,
            Category::What => &WHAT_CARDS,
            Category::Where => &WHERE_CARDS,
        }
    }

    /// Finds a card of this category by name.
    pub fn find(self, name: &str) -> Option<Card> {
        Card::from_name(name).filter(|card| card.category() == self)
    }

    pub fn contains(self, card: Card) -> bool {
        card.category() == self
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Who => "WHO",
            Category::What => "WHAT",
            Category::Where => "WHERE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Category::Who => "who",
            Category::What => "what",
            Category::Where => "where",
        };
        f.write_str(text)
    }
}
