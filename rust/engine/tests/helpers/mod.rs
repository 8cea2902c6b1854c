#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use flipseven_engine::cards::{ActionKind, Card};
use flipseven_engine::deck::Deck;
use flipseven_engine::errors::GameError;
use flipseven_engine::flip_three::{CardProcessor, CardSource, RoundProcessor};
use flipseven_engine::hand::PlayerHand;
use flipseven_engine::player::{Decision, DecisionMaker, Player, PlayerId, PlayerView};
use flipseven_engine::round::Round;

/// Target requests seen by a bot: action and candidate ids.
pub type TargetLog = Arc<Mutex<Vec<(ActionKind, Vec<PlayerId>)>>>;

/// Deterministic decision maker: hits until its hand holds `hit_until` cards,
/// then stays. Targets `target` when set (even if not a candidate), otherwise
/// the first candidate.
pub struct Bot {
    hit_until: usize,
    target: Option<PlayerId>,
    log: TargetLog,
}

impl Bot {
    pub fn stayer() -> Self {
        Self::hitter(0)
    }

    pub fn hitter(hit_until: usize) -> Self {
        Self {
            hit_until,
            target: None,
            log: TargetLog::default(),
        }
    }

    pub fn always_hit() -> Self {
        Self::hitter(usize::MAX)
    }

    pub fn targeting(mut self, id: PlayerId) -> Self {
        self.target = Some(id);
        self
    }

    pub fn logging(mut self, log: &TargetLog) -> Self {
        self.log = Arc::clone(log);
        self
    }
}

impl DecisionMaker for Bot {
    fn decide(&mut self, _: &Deck, hand: &PlayerHand, _: u32, _: &[PlayerView]) -> Decision {
        if hand.card_count() < self.hit_until {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }

    fn choose_target(
        &mut self,
        action: ActionKind,
        candidates: &[PlayerView],
        _me: PlayerId,
    ) -> PlayerId {
        self.log
            .lock()
            .unwrap()
            .push((action, candidates.iter().map(|c| c.id).collect()));
        self.target.unwrap_or(candidates[0].id)
    }

    fn name(&self) -> &str {
        "bot"
    }
}

pub fn seat(bots: Vec<Bot>) -> Vec<Player> {
    bots.into_iter()
        .enumerate()
        .map(|(id, bot)| Player::new(id, format!("p{}", id), Box::new(bot)))
        .collect()
}

/// Round 1 with dealer 0 over a stacked deck and an empty discard pile.
pub fn stacked_round(cards: Vec<Card>, bots: Vec<Bot>) -> Round {
    Round::new(1, seat(bots), 0, Deck::from_cards(cards, 0), Vec::new()).unwrap()
}

/// Card source replaying a fixed script; fails once it runs out.
pub struct Script {
    pub cards: VecDeque<Card>,
}

impl Script {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl CardSource for Script {
    fn next_card(&mut self, _: &mut Round, _: usize, _: PlayerId) -> Result<Card, GameError> {
        self.cards
            .pop_front()
            .ok_or_else(|| GameError::CardSource("script exhausted".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Immediate(Card),
    /// Queued card plus the target's card count when it was resolved
    Queued(Card, usize),
}

/// Records every call and delegates to the round's own pipeline.
#[derive(Default)]
pub struct Recorder {
    pub steps: Vec<Step>,
}

impl CardProcessor for Recorder {
    fn process_immediate(
        &mut self,
        round: &mut Round,
        target: PlayerId,
        card: Card,
    ) -> Result<(), GameError> {
        self.steps.push(Step::Immediate(card));
        RoundProcessor.process_immediate(round, target, card)
    }

    fn process_queued(
        &mut self,
        round: &mut Round,
        target: PlayerId,
        card: Card,
    ) -> Result<(), GameError> {
        let count = round.player(target)?.hand().card_count();
        self.steps.push(Step::Queued(card, count));
        RoundProcessor.process_queued(round, target, card)
    }
}

pub fn numbers(values: &[u8]) -> Vec<Card> {
    values.iter().map(|&v| Card::Number(v)).collect()
}
