use cluedo_core::model::card::Card;
use cluedo_core::model::category::Category;
use cluedo_core::model::player::Roster;
use cluedo_core::model::question::Answer;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

/// A recorded session: who is playing, our hand, and the turns so far.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionConfig {
    pub players: Vec<PlayerConfig>,
    #[serde(default)]
    pub hand: Vec<String>,
    #[serde(default)]
    pub turns: Vec<TurnConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SessionConfig {
    /// Load a session from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: SessionConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the session without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_players(&self.players)?;
        validate_hand(&self.hand)?;
        for (index, turn) in self.turns.iter().enumerate() {
            turn.validate(index, &self.players)?;
        }
        self.logging.normalize();
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    /// Zero or missing means the hand size is not known.
    #[serde(default)]
    pub hand_size: usize,
}

/// One question and the answer it got. Players are named; `me` is yourself.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TurnConfig {
    pub asker: String,
    pub answerer: String,
    pub who: String,
    pub what: String,
    #[serde(rename = "where")]
    pub place: String,
    pub answer: Answer,
}

impl TurnConfig {
    fn validate(&self, index: usize, players: &[PlayerConfig]) -> Result<(), ValidationError> {
        for (label, name) in [("asker", &self.asker), ("answerer", &self.answerer)] {
            let seated = name.trim().eq_ignore_ascii_case(Roster::SELF_NAME)
                || players
                    .iter()
                    .any(|player| player.name.trim().eq_ignore_ascii_case(name.trim()));
            if !seated {
                return Err(ValidationError::InvalidField {
                    field: format!("turns[{index}].{label}"),
                    message: format!("player '{name}' is not in the players list"),
                });
            }
        }

        for (category, name) in [
            (Category::Who, &self.who),
            (Category::What, &self.what),
            (Category::Where, &self.place),
        ] {
            if category.find(name).is_none() {
                return Err(ValidationError::InvalidField {
                    field: format!("turns[{index}].{category}"),
                    message: format!("'{name}' is not a {category} card"),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_tracing_level", alias = "tracing_level")]
    pub level: String,
    /// Write JSON logs here instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_tracing_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.level.trim().is_empty() {
            self.level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "warn".to_string()
}

fn validate_players(players: &[PlayerConfig]) -> Result<(), ValidationError> {
    if players.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "players".to_string(),
            message: "at least one other player must be listed".to_string(),
        });
    }
    if players.len() >= Roster::MAX_PLAYERS {
        return Err(ValidationError::InvalidField {
            field: "players".to_string(),
            message: format!(
                "at most {} other players are supported",
                Roster::MAX_PLAYERS - 1
            ),
        });
    }

    let mut seen = HashSet::new();
    for player in players {
        let name = player.name.trim();
        if name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "players.name".to_string(),
                message: "player name must not be empty".to_string(),
            });
        }
        if name.eq_ignore_ascii_case(Roster::SELF_NAME) {
            return Err(ValidationError::InvalidField {
                field: format!("players[{name}].name"),
                message: format!("'{}' is reserved for yourself", Roster::SELF_NAME),
            });
        }
        if !seen.insert(name.to_ascii_lowercase()) {
            return Err(ValidationError::InvalidField {
                field: "players".to_string(),
                message: format!("player '{name}' listed more than once"),
            });
        }
    }
    Ok(())
}

fn validate_hand(hand: &[String]) -> Result<(), ValidationError> {
    for name in hand {
        if Card::from_name(name).is_none() {
            return Err(ValidationError::InvalidField {
                field: "hand".to_string(),
                message: format!("'{name}' is not a card"),
            });
        }
    }
    Ok(())
}

/// Errors surfaced when loading session files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read session {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse session {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid session in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
