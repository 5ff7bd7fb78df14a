use super::state::Game;
use crate::model::category::Category;
use crate::model::player::PlayerId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub hand_size: Option<usize>,
    pub found: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CardSnapshot {
    pub name: String,
    pub category: String,
    pub found: bool,
    pub possessor: Option<String>,
    pub non_possessors: Vec<String>,
    pub is_solution: bool,
}

/// An open "holds at least one of" hypothesis.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HypothesisSnapshot {
    pub owner: String,
    pub cards: Vec<String>,
}

/// Read-only export of everything the game knows. There is no restore.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub cards: Vec<CardSnapshot>,
    pub hypotheses: Vec<HypothesisSnapshot>,
    pub solution: Vec<Option<String>>,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let roster = game.roster();
        let board = game.board();
        let name = |id: PlayerId| roster.name(id).unwrap_or_default().to_string();

        let players = roster
            .iter()
            .map(|(id, player)| PlayerSnapshot {
                name: player.name().to_string(),
                hand_size: player.hand_size(),
                found: board.found_count(id),
            })
            .collect();

        let cards = board
            .iter()
            .map(|(card, state)| CardSnapshot {
                name: card.name().to_string(),
                category: card.category().to_string(),
                found: state.found(),
                possessor: state.possessor().map(name),
                non_possessors: state.non_possessors().iter().map(name).collect(),
                is_solution: state.is_solution(),
            })
            .collect();

        let links = board.hypotheses().links().iter().map(|link| HypothesisSnapshot {
            owner: name(link.owner()),
            cards: link.cards().iter().map(|card| card.name().to_string()).collect(),
        });
        let trilinks = board
            .hypotheses()
            .trilinks()
            .iter()
            .map(|trilink| HypothesisSnapshot {
                owner: name(trilink.owner()),
                cards: trilink
                    .cards()
                    .iter()
                    .map(|card| card.name().to_string())
                    .collect(),
            });

        let solution = Category::ALL
            .iter()
            .map(|category| game.solution(*category).map(|card| card.name().to_string()))
            .collect();

        GameSnapshot {
            players,
            cards,
            hypotheses: links.chain(trilinks).collect(),
            solution,
        }
    }

    pub fn to_json(game: &Game) -> serde_json::Result<String> {
        let snapshot = Self::capture(game);
        serde_json::to_string_pretty(&snapshot)
    }
}
