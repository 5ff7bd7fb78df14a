use crate::model::category::Category;
use core::fmt;

/// One of the 21 fixed identifiers, ordered who, what, where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Card {
    Green = 0,
    Mustard = 1,
    Peacock = 2,
    Plum = 3,
    Scarlet = 4,
    White = 5,
    Wrench = 6,
    Candlestick = 7,
    Dagger = 8,
    Pistol = 9,
    LeadPipe = 10,
    Rope = 11,
    Bathroom = 12,
    Study = 13,
    DiningRoom = 14,
    GamesRoom = 15,
    Garage = 16,
    Bedroom = 17,
    LivingRoom = 18,
    Kitchen = 19,
    Courtyard = 20,
}

impl Card {
    pub const COUNT: usize = 21;

    pub const ALL: [Card; Card::COUNT] = [
        Card::Green,
        Card::Mustard,
        Card::Peacock,
        Card::Plum,
        Card::Scarlet,
        Card::White,
        Card::Wrench,
        Card::Candlestick,
        Card::Dagger,
        Card::Pistol,
        Card::LeadPipe,
        Card::Rope,
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

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn category(self) -> Category {
        match self as u8 {
            0..=5 => Category::Who,
            6..=11 => Category::What,
            _ => Category::Where,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Card::Green => "green",
            Card::Mustard => "mustard",
            Card::Peacock => "peacock",
            Card::Plum => "plum",
            Card::Scarlet => "scarlet",
            Card::White => "white",
            Card::Wrench => "wrench",
            Card::Candlestick => "candlestick",
            Card::Dagger => "dagger",
            Card::Pistol => "pistol",
            Card::LeadPipe => "lead pipe",
            Card::Rope => "rope",
            Card::Bathroom => "bathroom",
            Card::Study => "study",
            Card::DiningRoom => "dining room",
            Card::GamesRoom => "games room",
            Card::Garage => "garage",
            Card::Bedroom => "bedroom",
            Card::LivingRoom => "living room",
            Card::Kitchen => "kitchen",
            Card::Courtyard => "courtyard",
        }
    }

    /// Looks a card up by name, ignoring ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|card| card.name().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
