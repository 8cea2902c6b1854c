//! Hand scoring.
//!
//! `total = (number sum + additive modifiers) * 2^(x2 cards) + bonus`, where the
//! bonus is [`FLIP_SEVEN_BONUS`] for seven or more distinct number values. A
//! busted hand scores nothing.

use serde::{Deserialize, Serialize};

use crate::hand::{HandStatus, PlayerHand, FLIP_SEVEN_CARDS};

pub const FLIP_SEVEN_BONUS: u32 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_sum: u32,
    pub additive: u32,
    pub multiplier: u32,
    pub bonus: u32,
    pub total: u32,
}

/// Scores a hand.
///
/// ```
/// use flipseven_engine::cards::{Card, ModifierKind};
/// use flipseven_engine::hand::PlayerHand;
/// use flipseven_engine::scoring::compute;
///
/// let mut hand = PlayerHand::new();
/// for c in [
///     Card::Number(5),
///     Card::Number(8),
///     Card::Number(9),
///     Card::Modifier(ModifierKind::Plus4),
///     Card::Modifier(ModifierKind::Times2),
/// ] {
///     hand.add_card(c);
/// }
/// assert_eq!(compute(&hand).total, 52);
/// ```
pub fn compute(hand: &PlayerHand) -> ScoreBreakdown {
    if hand.status() == HandStatus::Busted {
        return ScoreBreakdown::default();
    }
    let base_sum: u32 = hand.numbers().iter().map(|&v| u32::from(v)).sum();
    let additive: u32 = hand.modifiers().iter().map(|m| m.additive_value()).sum();
    let doublings = hand.modifiers().iter().filter(|m| m.is_multiplier()).count() as u32;
    let multiplier = 1u32.checked_shl(doublings).unwrap_or(u32::MAX);
    let bonus = if hand.number_values().len() >= FLIP_SEVEN_CARDS {
        FLIP_SEVEN_BONUS
    } else {
        0
    };
    ScoreBreakdown {
        base_sum,
        additive,
        multiplier,
        bonus,
        total: base_sum
            .saturating_add(additive)
            .saturating_mul(multiplier)
            .saturating_add(bonus),
    }
}
