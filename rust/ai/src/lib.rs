//! # flipseven-ai: Decision Makers for Flip 7
//!
//! Provides AI players for the Flip 7 rules engine. Every AI implements the
//! engine's [`DecisionMaker`] interface, so the round can ask it to hit or
//! stay and to pick targets for action cards.
//!
//! ## Core Components
//!
//! - [`baseline`] - Risk-threshold policy used for simulations
//! - [`create_ai`] - Factory building an AI from its name
//!
//! ## Quick Start
//!
//! ```rust
//! use flipseven_ai::create_ai;
//! use flipseven_engine::game::Game;
//! use flipseven_engine::player::Player;
//!
//! let players = vec![
//!     Player::new(0, "ann", create_ai("baseline").unwrap()),
//!     Player::new(1, "bob", create_ai("reckless").unwrap()),
//! ];
//! let mut game = Game::new(players, 42).unwrap();
//! let report = game.play_round().unwrap();
//! assert_eq!(report.results.len(), 2);
//! ```
//!
//! ## AI Types
//!
//! - `"baseline"` - hits while the bust chance is under 30%
//! - `"cautious"` - same policy, stops at 15%
//! - `"reckless"` - same policy, pushes on up to 60%

use flipseven_engine::player::DecisionMaker;
use thiserror::Error;

pub mod baseline;

pub use baseline::BaselineAI;

/// Names accepted by [`create_ai`].
pub const AI_NAMES: [&str; 3] = ["baseline", "cautious", "reckless"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown AI type: {0} (expected one of: baseline, cautious, reckless)")]
pub struct UnknownAi(pub String);

/// Looks up a preset by name without boxing it, so callers can tune it
/// further (e.g. [`BaselineAI::with_target_score`]).
pub fn preset(ai_type: &str) -> Result<BaselineAI, UnknownAi> {
    let tolerance = match ai_type {
        "baseline" => baseline::DEFAULT_TOLERANCE,
        "cautious" => 0.15,
        "reckless" => 0.60,
        other => return Err(UnknownAi(other.to_string())),
    };
    Ok(BaselineAI::with_tolerance(ai_type, tolerance))
}

/// Factory function to create AI players by type string.
///
/// # Example
///
/// ```rust
/// use flipseven_ai::create_ai;
///
/// let ai = create_ai("cautious").unwrap();
/// assert_eq!(ai.name(), "cautious");
/// assert!(create_ai("oracle").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn DecisionMaker>, UnknownAi> {
    Ok(Box::new(preset(ai_type)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in AI_NAMES {
            let ai = create_ai(name).unwrap();
            assert_eq!(ai.name(), name);
        }
    }

    #[test]
    fn presets_differ_only_in_tolerance() {
        let cautious = preset("cautious").unwrap();
        let baseline = preset("baseline").unwrap();
        let reckless = preset("reckless").unwrap();
        assert!(cautious.tolerance() < baseline.tolerance());
        assert!(baseline.tolerance() < reckless.tolerance());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = preset("oracle").unwrap_err();
        assert_eq!(err, UnknownAi("oracle".to_string()));
        assert!(err.to_string().contains("oracle"));
    }
}
