use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest face value printed on a number card.
pub const MAX_NUMBER: u8 = 12;

/// Score modifiers. The additive kinds add their face value once, `Times2`
/// doubles the hand (compounding when several are held).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ModifierKind {
    /// +2 points
    Plus2,
    /// +4 points
    Plus4,
    /// +6 points
    Plus6,
    /// +8 points
    Plus8,
    /// +10 points
    Plus10,
    /// Doubles the number sum plus additive modifiers
    Times2,
}

impl ModifierKind {
    /// Points added by an additive modifier, 0 for the multiplier.
    pub fn additive_value(self) -> u32 {
        match self {
            ModifierKind::Plus2 => 2,
            ModifierKind::Plus4 => 4,
            ModifierKind::Plus6 => 6,
            ModifierKind::Plus8 => 8,
            ModifierKind::Plus10 => 10,
            ModifierKind::Times2 => 0,
        }
    }

    pub fn is_multiplier(self) -> bool {
        self == ModifierKind::Times2
    }
}

/// Action cards. Their effect is resolved by the round, never by the hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ActionKind {
    /// Banks and deactivates the chosen target
    Freeze,
    /// Forces the chosen target to draw three cards
    FlipThree,
    /// Saves the holder from one duplicate number
    SecondChance,
}

/// A single card. Cards are plain values; the deck and hands own copies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Card {
    /// Number card, face value 0 through 12
    Number(u8),
    /// Score modifier
    Modifier(ModifierKind),
    /// Action card
    Action(ActionKind),
}

impl Card {
    pub fn number_value(self) -> Option<u8> {
        match self {
            Card::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_number(self) -> bool {
        matches!(self, Card::Number(_))
    }

    pub fn is_action(self) -> bool {
        matches!(self, Card::Action(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(v) => write!(f, "{}", v),
            Card::Modifier(ModifierKind::Times2) => write!(f, "x2"),
            Card::Modifier(m) => write!(f, "+{}", m.additive_value()),
            Card::Action(ActionKind::Freeze) => write!(f, "Freeze"),
            Card::Action(ActionKind::FlipThree) => write!(f, "Flip Three"),
            Card::Action(ActionKind::SecondChance) => write!(f, "Second Chance"),
        }
    }
}

pub fn all_modifiers() -> [ModifierKind; 6] {
    [
        ModifierKind::Plus2,
        ModifierKind::Plus4,
        ModifierKind::Plus6,
        ModifierKind::Plus8,
        ModifierKind::Plus10,
        ModifierKind::Times2,
    ]
}

pub fn all_actions() -> [ActionKind; 3] {
    [
        ActionKind::Freeze,
        ActionKind::FlipThree,
        ActionKind::SecondChance,
    ]
}

/// Number of copies of `value` in a standard deck: one zero, otherwise `value` copies.
pub fn copies_of_number(value: u8) -> usize {
    if value == 0 {
        1
    } else {
        value as usize
    }
}

/// The 100-card standard deck in canonical (unshuffled) order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(100);
    for value in 0..=MAX_NUMBER {
        for _ in 0..copies_of_number(value) {
            v.push(Card::Number(value));
        }
    }
    for &m in &all_modifiers() {
        for _ in 0..2 {
            v.push(Card::Modifier(m));
        }
    }
    for &a in &all_actions() {
        for _ in 0..3 {
            v.push(Card::Action(a));
        }
    }
    v
}
