use crate::model::category::Category;
use crate::model::player::PlayerId;
use core::fmt;
use serde::{Deserialize, Serialize};

/// What the answerer did when asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// A card was shown, but not to us.
    Unknown,
    /// The answerer holds none of the three cards.
    No,
    #[serde(rename = "who", alias = "revealed_who")]
    RevealedWho,
    #[serde(rename = "what", alias = "revealed_what")]
    RevealedWhat,
    #[serde(rename = "where", alias = "revealed_where")]
    RevealedWhere,
}

impl Answer {
    pub const fn revealed_category(self) -> Option<Category> {
        match self {
            Answer::RevealedWho => Some(Category::Who),
            Answer::RevealedWhat => Some(Category::What),
            Answer::RevealedWhere => Some(Category::Where),
            Answer::Unknown | Answer::No => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Answer::Unknown => "unknown",
            Answer::No => "no",
            Answer::RevealedWho => "who",
            Answer::RevealedWhat => "what",
            Answer::RevealedWhere => "where",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One suggestion and its answer. Cards are named, not resolved, so the
/// game can tell a malformed question apart from a well-formed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    who: String,
    what: String,
    place: String,
    asker: PlayerId,
    answerer: PlayerId,
    answer: Answer,
}

impl Question {
    pub fn new(
        who: impl Into<String>,
        what: impl Into<String>,
        place: impl Into<String>,
        asker: PlayerId,
        answerer: PlayerId,
        answer: Answer,
    ) -> Self {
        Self {
            who: who.into(),
            what: what.into(),
            place: place.into(),
            asker,
            answerer,
            answer,
        }
    }

    pub fn who(&self) -> &str {
        &self.who
    }

    pub fn what(&self) -> &str {
        &self.what
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    /// The card name given for `category`.
    pub fn named(&self, category: Category) -> &str {
        match category {
            Category::Who => &self.who,
            Category::What => &self.what,
            Category::Where => &self.place,
        }
    }

    pub fn asker(&self) -> PlayerId {
        self.asker
    }

    pub fn answerer(&self) -> PlayerId {
        self.answerer
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }
}
