//! Flip Three resolution.
//!
//! The target draws three cards one at a time. Numbers, modifiers and Second
//! Chance cards take effect as they are drawn; Freeze and Flip Three cards are
//! put in the target's hand and only resolved, in draw order, once the three
//! draws are done and the target is still in the round. A queued Flip Three
//! runs this same executor again against whoever its holder picks.

use crate::cards::{ActionKind, Card};
use crate::errors::GameError;
use crate::player::PlayerId;
use crate::round::Round;

/// Cards forced on the target of a Flip Three.
pub const FLIP_THREE_DRAWS: usize = 3;

/// Where forced draws come from. Retrying is up to the implementation; an
/// error returned here aborts the round.
pub trait CardSource {
    fn next_card(
        &mut self,
        round: &mut Round,
        index: usize,
        target: PlayerId,
    ) -> Result<Card, GameError>;
}

/// Feeds drawn cards back into the round's normal card pipeline.
pub trait CardProcessor {
    /// Applies a card the moment it is drawn.
    fn process_immediate(
        &mut self,
        round: &mut Round,
        target: PlayerId,
        card: Card,
    ) -> Result<(), GameError>;

    /// Resolves a deferred action card already recorded in `target`'s hand.
    fn process_queued(
        &mut self,
        round: &mut Round,
        target: PlayerId,
        card: Card,
    ) -> Result<(), GameError>;
}

/// Draws from the round's deck, reshuffling the discard pile when needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeckSource;

impl CardSource for DeckSource {
    fn next_card(
        &mut self,
        round: &mut Round,
        _index: usize,
        _target: PlayerId,
    ) -> Result<Card, GameError> {
        round.draw_card()
    }
}

/// The round's own pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundProcessor;

impl CardProcessor for RoundProcessor {
    fn process_immediate(
        &mut self,
        round: &mut Round,
        target: PlayerId,
        card: Card,
    ) -> Result<(), GameError> {
        round.apply_card(target, card)
    }

    fn process_queued(
        &mut self,
        round: &mut Round,
        target: PlayerId,
        card: Card,
    ) -> Result<(), GameError> {
        match card {
            Card::Action(kind) => round.resolve_action(target, kind),
            other => round.apply_card(target, other),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FlipThreeExecutor;

impl FlipThreeExecutor {
    /// Forces `target` to draw three cards. Returns whether the round has ended.
    ///
    /// The draw loop stops early once the target leaves the round or the round
    /// ends; queued actions left over at that point stay in the hand unresolved.
    pub fn execute(
        round: &mut Round,
        target: PlayerId,
        source: &mut dyn CardSource,
        processor: &mut dyn CardProcessor,
    ) -> Result<bool, GameError> {
        let mut queued: Vec<Card> = Vec::new();
        for index in 0..FLIP_THREE_DRAWS {
            if round.is_ended() || !round.is_active(target) {
                break;
            }
            let card = match source.next_card(round, index, target) {
                Ok(card) => card,
                Err(err) => {
                    round.abort(&err);
                    return Err(err);
                }
            };
            tracing::debug!(target, index, %card, "forced draw");
            match card {
                Card::Action(ActionKind::SecondChance) => {
                    processor.process_immediate(round, target, card)?;
                }
                Card::Action(kind) => {
                    queued.push(card);
                    if round.push_action(target, kind)? {
                        break;
                    }
                }
                _ => processor.process_immediate(round, target, card)?,
            }
        }

        for card in queued {
            if round.is_ended() || !round.is_active(target) {
                break;
            }
            processor.process_queued(round, target, card)?;
        }
        Ok(round.is_ended())
    }
}
