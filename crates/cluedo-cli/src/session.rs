use cluedo_core::model::card::Card;
use cluedo_core::model::player::{Player, PlayerId};
use cluedo_core::model::question::Question;
use cluedo_core::{Game, SetupError, TurnError};
use thiserror::Error;

use crate::config::{SessionConfig, TurnConfig};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("game setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("turn {turn} names unknown player '{name}'")]
    UnknownPlayer { turn: usize, name: String },
    #[error("turn {turn} rejected: {source}")]
    Turn {
        turn: usize,
        #[source]
        source: TurnError,
    },
}

/// Totals for a replayed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub turns_applied: usize,
    pub turns_skipped: usize,
    pub cards_found: usize,
    pub accusation: Option<[Card; 3]>,
}

/// Replays a session file against a fresh game.
pub struct Session {
    game: Game,
    turns: Vec<TurnConfig>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let players = config
            .players
            .iter()
            .map(|player| Player::new(player.name.as_str(), player.hand_size));
        let mut game = Game::new(players)?;
        if !config.hand.is_empty() {
            game.add_starting_hand(&config.hand)?;
        }
        Ok(Self {
            game,
            turns: config.turns,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies every configured turn in order, stopping at the first rejection.
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        let mut turns_applied = 0;
        let mut turns_skipped = 0;

        for (index, turn) in self.turns.iter().enumerate() {
            let number = index + 1;
            let question = Question::new(
                turn.who.as_str(),
                turn.what.as_str(),
                turn.place.as_str(),
                self.resolve(number, &turn.asker)?,
                self.resolve(number, &turn.answerer)?,
                turn.answer,
            );
            let report = self
                .game
                .apply_turn(&question)
                .map_err(|source| SessionError::Turn {
                    turn: number,
                    source,
                })?;

            if report.is_skipped() {
                turns_skipped += 1;
            } else {
                turns_applied += 1;
            }
            for (card, possessor) in report.found() {
                tracing::info!(
                    turn = number,
                    %card,
                    possessor = self.game.roster().name(*possessor).unwrap_or_default(),
                    "card located"
                );
            }
            for card in report.solutions() {
                tracing::info!(turn = number, %card, "case-file card identified");
            }
        }

        let cards_found = self
            .game
            .board()
            .iter()
            .filter(|(_, state)| state.found())
            .count();
        Ok(SessionSummary {
            turns_applied,
            turns_skipped,
            cards_found,
            accusation: self.game.accusation(),
        })
    }

    fn resolve(&self, turn: usize, name: &str) -> Result<PlayerId, SessionError> {
        self.game
            .player(name)
            .ok_or_else(|| SessionError::UnknownPlayer {
                turn,
                name: name.to_string(),
            })
    }
}
