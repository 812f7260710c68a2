use thiserror::Error;

use crate::shared_luck_game::Phase;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("cannot {action} while {phase:?}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("wheel must have at least one segment")]
    EmptyWheel,

    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
