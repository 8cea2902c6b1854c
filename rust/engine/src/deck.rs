use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, ActionKind, Card, MAX_NUMBER};
use crate::errors::GameError;

/// Simulated draw sequences used by [`Deck::estimate_flip_three_risk`].
pub const FLIP_THREE_TRIALS: usize = 1000;

/// Draw pile for a round.
///
/// Cards are drawn front to back starting at `position`. The per-value count
/// of remaining number cards is always derived from the undrawn slice, so it
/// cannot drift from the pile it describes.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// A full standard deck, shuffled with `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    /// A stacked deck that deals `cards` in the given order.
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Restores the full 100-card deck and shuffles it.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    /// Takes the next card. An exhausted deck stays exhausted until
    /// [`Deck::reshuffle_from`] is called.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        match self.cards.get(self.position) {
            Some(&c) => {
                self.position += 1;
                Ok(c)
            }
            None => Err(GameError::DeckEmpty),
        }
    }

    /// Replaces the draw pile with `pile`, shuffled. Undrawn cards are
    /// dropped, so callers merge them into `pile` first if they should stay.
    pub fn reshuffle_from(&mut self, mut pile: Vec<Card>) {
        pile.shuffle(&mut self.rng);
        self.cards = pile;
        self.position = 0;
        tracing::debug!(cards = self.cards.len(), "deck rebuilt from discard pile");
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Undrawn cards in draw order.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    /// Remaining copies of each number value, indexed by value.
    pub fn remaining_number_counts(&self) -> [usize; MAX_NUMBER as usize + 1] {
        let mut counts = [0usize; MAX_NUMBER as usize + 1];
        for card in self.remaining_cards() {
            if let Card::Number(v) = *card {
                if let Some(slot) = counts.get_mut(v as usize) {
                    *slot += 1;
                }
            }
        }
        counts
    }

    pub fn remaining_numbers(&self) -> usize {
        self.remaining_number_counts().iter().sum()
    }

    /// Probability that the next number card drawn duplicates a held value.
    ///
    /// Computed as matching remaining number cards over all remaining number
    /// cards. Returns 0.0 when no number cards remain.
    pub fn estimate_hit_risk(&self, held: &BTreeSet<u8>) -> f64 {
        let counts = self.remaining_number_counts();
        let total: usize = counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let matching: usize = held
            .iter()
            .filter_map(|&v| counts.get(v as usize))
            .sum();
        matching as f64 / total as f64
    }

    /// Estimated probability of busting during a forced three-card draw.
    ///
    /// Runs [`FLIP_THREE_TRIALS`] simulated sequences over a scratch copy of the
    /// remaining cards; the live pile and its shuffle stream are untouched. A
    /// held Second Chance absorbs one duplicate per trial, and one drawn during
    /// the sequence protects the cards after it.
    pub fn estimate_flip_three_risk<R: Rng + ?Sized>(
        &self,
        held: &BTreeSet<u8>,
        has_second_chance: bool,
        rng: &mut R,
    ) -> f64 {
        let mut scratch = self.remaining_cards().to_vec();
        if scratch.is_empty() {
            return 0.0;
        }
        let draws = scratch.len().min(3);
        let mut busts = 0usize;
        for _ in 0..FLIP_THREE_TRIALS {
            let (drawn, _) = scratch.partial_shuffle(rng, draws);
            if simulate_busts(drawn, held, has_second_chance) {
                busts += 1;
            }
        }
        busts as f64 / FLIP_THREE_TRIALS as f64
    }
}

fn simulate_busts(drawn: &[Card], held: &BTreeSet<u8>, has_second_chance: bool) -> bool {
    let mut seen = [false; MAX_NUMBER as usize + 1];
    for &v in held {
        if let Some(slot) = seen.get_mut(v as usize) {
            *slot = true;
        }
    }
    let mut shield = has_second_chance;
    for card in drawn {
        match *card {
            Card::Number(v) => {
                let Some(slot) = seen.get_mut(v as usize) else {
                    continue;
                };
                if *slot {
                    if shield {
                        shield = false;
                    } else {
                        return true;
                    }
                } else {
                    *slot = true;
                }
            }
            Card::Action(ActionKind::SecondChance) => shield = true,
            _ => {}
        }
    }
    false
}
