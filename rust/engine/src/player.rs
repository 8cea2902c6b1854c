use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::ActionKind;
use crate::deck::Deck;
use crate::hand::PlayerHand;

/// Seat index of a player within a game.
pub type PlayerId = usize;

/// A turn decision.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Draw another card
    Hit,
    /// Bank the current hand and leave the round
    Stay,
}

/// Read-only snapshot of a player handed to decision makers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    /// Banked score before the current round's hand
    pub score: u32,
    pub hand: PlayerHand,
}

/// Strategy that plays a seat: an AI policy or a bridge to a human.
///
/// The round calls into it synchronously and waits for the answer.
pub trait DecisionMaker: Send {
    /// Hit or stay on `hand`, given the live deck and everybody else at the table.
    fn decide(
        &mut self,
        deck: &Deck,
        hand: &PlayerHand,
        score: u32,
        others: &[PlayerView],
    ) -> Decision;

    /// Pick who receives `action`. The answer should be one of `candidates`;
    /// anything else is replaced by the round with the first candidate.
    fn choose_target(
        &mut self,
        action: ActionKind,
        candidates: &[PlayerView],
        me: PlayerId,
    ) -> PlayerId;

    fn name(&self) -> &str;
}

/// A seat at the table: identity, banked score, this round's hand and the
/// strategy that plays it.
pub struct Player {
    id: PlayerId,
    name: String,
    score: u32,
    hand: PlayerHand,
    decider: Box<dyn DecisionMaker>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("score", &self.score)
            .field("hand", &self.hand)
            .field("decider", &self.decider.name())
            .finish()
    }
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, decider: Box<dyn DecisionMaker>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            hand: PlayerHand::new(),
            decider,
        }
    }

    /// Starts the player with an already banked score.
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn hand(&self) -> &PlayerHand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut PlayerHand {
        &mut self.hand
    }
    pub fn decider_name(&self) -> &str {
        self.decider.name()
    }

    /// Replaces the hand with a fresh one and returns the old one.
    pub fn reset_hand(&mut self) -> PlayerHand {
        std::mem::take(&mut self.hand)
    }

    pub fn bank(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            name: self.name.clone(),
            score: self.score,
            hand: self.hand.clone(),
        }
    }

    pub fn decide(&mut self, deck: &Deck, others: &[PlayerView]) -> Decision {
        self.decider.decide(deck, &self.hand, self.score, others)
    }

    pub fn choose_target(&mut self, action: ActionKind, candidates: &[PlayerView]) -> PlayerId {
        self.decider.choose_target(action, candidates, self.id)
    }
}
