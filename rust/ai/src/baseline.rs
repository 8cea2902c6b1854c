//! Baseline AI for Flip 7.
//!
//! A simple threshold player used for simulations and as the reference
//! opponent. It never looks further ahead than the next card.

use std::cmp::Reverse;

use flipseven_engine::cards::ActionKind;
use flipseven_engine::deck::Deck;
use flipseven_engine::game::WINNING_SCORE;
use flipseven_engine::hand::PlayerHand;
use flipseven_engine::player::{Decision, DecisionMaker, PlayerId, PlayerView};
use flipseven_engine::scoring;

/// Bust chance the `"baseline"` preset is willing to take.
pub const DEFAULT_TOLERANCE: f64 = 0.30;

/// Threshold-based decision maker.
///
/// # Strategy
///
/// **Hit or stay:**
/// - Stay when banking the hand would reach the target score
/// - Hit while holding an unused Second Chance (the next card cannot bust)
/// - Otherwise hit only while the chance that the next card busts is below
///   `tolerance`, or is zero
///
/// **Targets:**
/// - Freeze: the opponent furthest ahead counting their current hand
/// - Flip Three: the opponent holding the most distinct numbers; itself only
///   when no opponent can be chosen
/// - Second Chance: the lowest banked score
///
/// # Example
///
/// ```rust
/// use flipseven_ai::baseline::BaselineAI;
/// use flipseven_engine::deck::Deck;
/// use flipseven_engine::hand::PlayerHand;
/// use flipseven_engine::player::{Decision, DecisionMaker};
///
/// let mut ai = BaselineAI::new();
/// let deck = Deck::shuffled(3);
/// assert_eq!(ai.decide(&deck, &PlayerHand::new(), 0, &[]), Decision::Hit);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    name: String,
    tolerance: f64,
    target_score: u32,
}

impl BaselineAI {
    pub fn new() -> Self {
        Self::with_tolerance("baseline", DEFAULT_TOLERANCE)
    }

    /// A named variant with its own risk tolerance, clamped to `0.0..=1.0`.
    pub fn with_tolerance(name: impl Into<String>, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            tolerance: tolerance.clamp(0.0, 1.0),
            target_score: WINNING_SCORE,
        }
    }

    /// Score at which the AI stops pushing because banking already wins.
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    fn standing(view: &PlayerView) -> u32 {
        view.score + scoring::compute(&view.hand).total
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionMaker for BaselineAI {
    fn decide(
        &mut self,
        deck: &Deck,
        hand: &PlayerHand,
        score: u32,
        _others: &[PlayerView],
    ) -> Decision {
        let points = scoring::compute(hand).total;
        if hand.card_count() > 0 && score + points >= self.target_score {
            tracing::trace!(ai = %self.name, score, points, "stays on a winning bank");
            return Decision::Stay;
        }
        if hand.has_second_chance() {
            return Decision::Hit;
        }
        let risk = deck.estimate_hit_risk(hand.number_values());
        tracing::trace!(ai = %self.name, risk, tolerance = self.tolerance, "hit risk");
        if risk <= 0.0 || risk < self.tolerance {
            Decision::Hit
        } else {
            Decision::Stay
        }
    }

    fn choose_target(
        &mut self,
        action: ActionKind,
        candidates: &[PlayerView],
        me: PlayerId,
    ) -> PlayerId {
        let opponents = || candidates.iter().filter(move |c| c.id != me);
        // min_by_key over Reverse keeps the earliest of equal maxima
        let pick = match action {
            ActionKind::Freeze => opponents().min_by_key(|c| Reverse(Self::standing(c))),
            ActionKind::FlipThree => {
                opponents().min_by_key(|c| Reverse(c.hand.number_values().len()))
            }
            ActionKind::SecondChance => candidates.iter().min_by_key(|c| c.score),
        };
        pick.or_else(|| candidates.first())
            .map(|c| c.id)
            .unwrap_or(me)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
