use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Deck and discard pile are both empty")]
    DeckExhausted,
    #[error("Card source failed: {0}")]
    CardSource(String),
    #[error("Player {chosen} is not a valid target (candidates: {candidates:?})")]
    InvalidTargetSelection {
        chosen: PlayerId,
        candidates: Vec<PlayerId>,
    },
    #[error("At least one player is required")]
    NotEnoughPlayers,
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("Player {0} is seated twice")]
    DuplicatePlayer(PlayerId),
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("No round in progress")]
    NoRoundInProgress,
    #[error("Round has not ended yet")]
    RoundNotEnded,
    #[error("Round already ended")]
    RoundEnded,
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn {
        expected: PlayerId,
        actual: PlayerId,
    },
    #[error("Game already complete")]
    GameComplete,
}

impl GameError {
    /// Whether the error ends the round it happened in.
    pub fn is_fatal_to_round(&self) -> bool {
        matches!(self, GameError::DeckExhausted | GameError::CardSource(_))
    }
}
