//! Second Chance hand-off.
//!
//! A player may hold one unused Second Chance. Drawing another passes it to an
//! active opponent who has none; with no such opponent it is discarded.

use crate::cards::{ActionKind, Card};
use crate::errors::GameError;
use crate::player::PlayerId;
use crate::round::Round;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SecondChanceOutcome {
    /// The drawer had none and keeps it
    Kept,
    /// Given to another active player
    Passed(PlayerId),
    /// Nobody could take it
    Discarded,
}

/// Resolves a Second Chance drawn by `drawer`.
///
/// A recipient is re-checked for Flip 7 since the card counts toward their
/// seven.
pub fn resolve(round: &mut Round, drawer: PlayerId) -> Result<SecondChanceOutcome, GameError> {
    let card = Card::Action(ActionKind::SecondChance);
    if !round.player(drawer)?.hand().has_second_chance() {
        round.add_to_hand(drawer, card)?;
        return Ok(SecondChanceOutcome::Kept);
    }

    let candidates: Vec<PlayerId> = round
        .active_players()
        .iter()
        .copied()
        .filter(|&id| id != drawer)
        .filter(|&id| {
            round
                .player(id)
                .map(|p| !p.hand().has_second_chance())
                .unwrap_or(false)
        })
        .collect();

    match round.select_target(drawer, ActionKind::SecondChance, &candidates)? {
        Some(recipient) => {
            tracing::debug!(drawer, recipient, "second chance passed");
            round.push_action(recipient, ActionKind::SecondChance)?;
            Ok(SecondChanceOutcome::Passed(recipient))
        }
        None => {
            tracing::debug!(drawer, "second chance discarded");
            round.discard(card);
            Ok(SecondChanceOutcome::Discarded)
        }
    }
}
