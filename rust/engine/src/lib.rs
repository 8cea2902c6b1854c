//! # flipseven-engine: Flip 7 Rules Engine
//!
//! A deterministic rules engine for the press-your-luck card game Flip 7.
//! Applies drawn cards to hands, detects busts and Flip 7, resolves action
//! cards (including nested Flip Three draws) and runs rounds and whole games
//! against pluggable decision makers.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card taxonomy and the 100-card deck composition
//! - [`deck`] - Seeded draw pile, reshuffle and bust-risk estimates
//! - [`hand`] - Per-round hand state machine
//! - [`scoring`] - Hand to points
//! - [`player`] - Players and the [`player::DecisionMaker`] interface
//! - [`second_chance`] - Passing surplus Second Chance cards
//! - [`flip_three`] - Forced three-card draws with deferred actions
//! - [`round`] - Turn order, active roster and round termination
//! - [`game`] - Multi-round session, dealer rotation and winners
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use flipseven_engine::cards::{Card, ModifierKind};
//! use flipseven_engine::hand::PlayerHand;
//! use flipseven_engine::scoring::compute;
//!
//! let mut hand = PlayerHand::new();
//! hand.add_card(Card::Number(12));
//! hand.add_card(Card::Number(3));
//! hand.add_card(Card::Modifier(ModifierKind::Plus10));
//! assert_eq!(compute(&hand).total, 25);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Every shuffle comes from a seeded ChaCha20 stream and risk estimates take
//! an explicit generator:
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use flipseven_engine::deck::Deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut a = Deck::shuffled(42);
//! let mut b = Deck::shuffled(42);
//! assert_eq!(a.draw(), b.draw());
//!
//! let held: BTreeSet<u8> = [11, 12].into_iter().collect();
//! let r1 = a.estimate_flip_three_risk(&held, false, &mut ChaCha8Rng::seed_from_u64(7));
//! let r2 = b.estimate_flip_three_risk(&held, false, &mut ChaCha8Rng::seed_from_u64(7));
//! assert_eq!(r1, r2);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod flip_three;
pub mod game;
pub mod hand;
pub mod player;
pub mod round;
pub mod scoring;
pub mod second_chance;
