//! Bust-risk calculator.
//!
//! Reports, for a set of held number values, the chance that the next card
//! busts and the chance that a forced Flip Three busts, both against a fresh
//! shuffled deck.

use std::collections::BTreeSet;
use std::io::Write;

use flipseven_engine::cards::MAX_NUMBER;
use flipseven_engine::deck::{Deck, FLIP_THREE_TRIALS};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::CliError;
use crate::ui;

/// Handle the risk command.
///
/// The seed drives both the deck shuffle and the Flip Three trials, so the
/// same arguments always print the same numbers.
pub fn handle_risk_command(
    held: &[u8],
    second_chance: bool,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(bad) = held.iter().find(|&&v| v > MAX_NUMBER) {
        return Err(CliError::InvalidInput(format!(
            "held value {} is not a card number (0-{})",
            bad, MAX_NUMBER
        )));
    }
    let held: BTreeSet<u8> = held.iter().copied().collect();
    let seed = seed.unwrap_or_else(rand::random);
    let deck = Deck::shuffled(seed);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let hit = deck.estimate_hit_risk(&held);
    let flip_three = deck.estimate_flip_three_risk(&held, second_chance, &mut rng);
    tracing::debug!(seed, hit, flip_three, "risk estimated");

    let listed = if held.is_empty() {
        "none".to_string()
    } else {
        held.iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(out, "Held: {}", listed)?;
    writeln!(
        out,
        "Second Chance: {}",
        if second_chance { "yes" } else { "no" }
    )?;
    if second_chance {
        writeln!(
            out,
            "Hit risk: {} (a duplicate would spend the Second Chance)",
            ui::percent(hit)
        )?;
    } else {
        writeln!(out, "Hit risk: {}", ui::percent(hit))?;
    }
    writeln!(
        out,
        "Flip Three risk: {} ({} trials, seed {})",
        ui::percent(flip_three),
        FLIP_THREE_TRIALS,
        seed
    )?;
    Ok(())
}
