use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, ModifierKind};

/// Total cards (numbers, modifiers and actions) that end the round as a Flip 7.
pub const FLIP_SEVEN_CARDS: usize = 7;

/// Lifecycle of a hand within one round. Everything but `Active` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandStatus {
    Active,
    Stayed,
    Busted,
    Frozen,
}

/// Result of [`PlayerHand::add_card`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// The card duplicated a held number and no Second Chance was available
    pub busted: bool,
    /// The hand reached [`FLIP_SEVEN_CARDS`] while still active
    pub flip7: bool,
    /// Cards that left play instead of entering the hand
    pub discarded: Vec<Card>,
}

/// Cards a player has accumulated during one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    number_values: BTreeSet<u8>,
    numbers: Vec<u8>,
    modifiers: Vec<ModifierKind>,
    actions: Vec<ActionKind>,
    second_chance_used: bool,
    status: HandStatus,
}

impl Default for PlayerHand {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerHand {
    pub fn new() -> Self {
        Self {
            number_values: BTreeSet::new(),
            numbers: Vec::new(),
            modifiers: Vec::new(),
            actions: Vec::new(),
            second_chance_used: false,
            status: HandStatus::Active,
        }
    }

    pub fn status(&self) -> HandStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Distinct number values held.
    pub fn number_values(&self) -> &BTreeSet<u8> {
        &self.number_values
    }

    /// Number cards in the order they arrived, including a busting duplicate.
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn modifiers(&self) -> &[ModifierKind] {
        &self.modifiers
    }

    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }

    pub fn second_chance_used(&self) -> bool {
        self.second_chance_used
    }

    pub fn has_second_chance(&self) -> bool {
        self.actions.contains(&ActionKind::SecondChance)
    }

    pub fn card_count(&self) -> usize {
        self.numbers.len() + self.modifiers.len() + self.actions.len()
    }

    fn reached_flip_seven(&self) -> bool {
        self.is_active() && self.card_count() >= FLIP_SEVEN_CARDS
    }

    /// Applies a drawn card to the hand.
    ///
    /// Terminal hands ignore the card. A duplicate number busts the hand unless
    /// a Second Chance is held, in which case both cards are discarded. Action
    /// cards are only recorded; resolving them is the round's job.
    ///
    /// ```
    /// use flipseven_engine::cards::{ActionKind, Card};
    /// use flipseven_engine::hand::{HandStatus, PlayerHand};
    ///
    /// let mut hand = PlayerHand::new();
    /// hand.add_card(Card::Number(4));
    /// hand.add_card(Card::Action(ActionKind::SecondChance));
    /// let saved = hand.add_card(Card::Number(4));
    /// assert!(!saved.busted);
    /// assert_eq!(saved.discarded.len(), 2);
    ///
    /// let bust = hand.add_card(Card::Number(4));
    /// assert!(bust.busted);
    /// assert_eq!(hand.status(), HandStatus::Busted);
    /// ```
    pub fn add_card(&mut self, card: Card) -> AddOutcome {
        let mut outcome = AddOutcome::default();
        if !self.is_active() {
            return outcome;
        }
        match card {
            Card::Number(v) if self.number_values.contains(&v) => {
                if self.consume_second_chance() {
                    outcome.discarded = vec![Card::Action(ActionKind::SecondChance), card];
                } else {
                    self.numbers.push(v);
                    self.status = HandStatus::Busted;
                    outcome.busted = true;
                }
                return outcome;
            }
            Card::Number(v) => {
                self.number_values.insert(v);
                self.numbers.push(v);
            }
            Card::Modifier(m) => self.modifiers.push(m),
            Card::Action(a) => self.actions.push(a),
        }
        outcome.flip7 = self.reached_flip_seven();
        outcome
    }

    /// Records an action card without running the number/bust path.
    ///
    /// Returns whether the hand now meets the Flip 7 threshold.
    pub fn push_action(&mut self, kind: ActionKind) -> bool {
        if !self.is_active() {
            return false;
        }
        self.actions.push(kind);
        self.reached_flip_seven()
    }

    fn consume_second_chance(&mut self) -> bool {
        match self
            .actions
            .iter()
            .position(|&a| a == ActionKind::SecondChance)
        {
            Some(idx) => {
                self.actions.remove(idx);
                self.second_chance_used = true;
                true
            }
            None => false,
        }
    }

    pub fn stay(&mut self) -> bool {
        self.finish(HandStatus::Stayed)
    }

    pub fn freeze(&mut self) -> bool {
        self.finish(HandStatus::Frozen)
    }

    fn finish(&mut self, status: HandStatus) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = status;
        true
    }

    /// Every card physically held, for returning to the discard pile.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.card_count());
        cards.extend(self.numbers.iter().map(|&v| Card::Number(v)));
        cards.extend(self.modifiers.iter().map(|&m| Card::Modifier(m)));
        cards.extend(self.actions.iter().map(|&a| Card::Action(a)));
        cards
    }
}
