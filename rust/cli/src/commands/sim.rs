//! Simulation command: full games between AI players.
//!
//! Every seat is played by the same AI preset. Game `N` (counting from zero)
//! is shuffled from `seed + N`, so a run is reproducible from its base seed,
//! which is always printed.
//!
//! # Examples
//!
//! ```no_run
//! use flipseven_cli::commands::{handle_sim_command, SimArgs};
//! use std::io;
//!
//! let args = SimArgs {
//!     games: 10,
//!     seed: Some(42),
//!     ..SimArgs::default()
//! };
//! handle_sim_command(args, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;

use flipseven_ai::BaselineAI;
use flipseven_engine::errors::GameError;
use flipseven_engine::game::Game;
use flipseven_engine::player::{Player, PlayerId};
use flipseven_engine::round::RoundEndReason;
use serde::Serialize;

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Rounds after which an undecided game is abandoned.
pub const MAX_ROUNDS: u32 = 1_000;

/// Arguments of the `sim` command. `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct SimArgs {
    pub games: u32,
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
    pub target: Option<u32>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GameResult {
    game: u32,
    seed: u64,
    rounds: u32,
    flip7_rounds: usize,
    winners: Vec<String>,
    scores: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aborted: Option<String>,
}

#[derive(Debug, Serialize)]
struct SeatWins {
    player: String,
    wins: u32,
}

#[derive(Debug, Serialize)]
struct SimSummary {
    games: u32,
    players: usize,
    ai: String,
    target_score: u32,
    seed: u64,
    wins: Vec<SeatWins>,
    aborted: u32,
    results: Vec<GameResult>,
}

/// Handle the sim command.
///
/// Flags override the layered configuration (`FLIPSEVEN_*`). A game that
/// aborts (the cards ran out mid-round) is reported as a warning and counted
/// separately; the run carries on.
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let resolved = config::load_with_sources()?;
    let cfg = &resolved.config;
    let players = args.players.unwrap_or(cfg.players);
    config::validate_players(players).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let target = args.target.unwrap_or(cfg.target_score);
    config::validate_target(target).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let ai_name = args.ai.unwrap_or_else(|| cfg.ai.clone());
    let mut ai = flipseven_ai::preset(&ai_name)?;
    if let Some(tolerance) = resolved.tolerance_override() {
        ai = BaselineAI::with_tolerance(ai_name.clone(), tolerance);
    }
    let ai = ai.with_target_score(target);
    let base_seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut wins = vec![0u32; players];
    let mut aborted = 0u32;
    let mut results = Vec::with_capacity(args.games as usize);
    for g in 0..args.games {
        let seed = base_seed.wrapping_add(u64::from(g));
        let (result, winner_ids) = play_one(g + 1, seed, players, &ai, target)?;
        for id in winner_ids {
            wins[id] += 1;
        }
        if let Some(reason) = &result.aborted {
            aborted += 1;
            ui::display_warning(err, &format!("game {} aborted: {}", result.game, reason))?;
        }
        if !args.json {
            writeln!(out, "{}", describe(&result))?;
        }
        results.push(result);
    }
    tracing::info!(games = args.games, seed = base_seed, aborted, "simulation finished");

    let summary = SimSummary {
        games: args.games,
        players,
        ai: ai_name,
        target_score: target,
        seed: base_seed,
        wins: wins
            .iter()
            .enumerate()
            .map(|(id, &w)| SeatWins {
                player: ui::seat_label(id),
                wins: w,
            })
            .collect(),
        aborted,
        results,
    };

    if args.json {
        let json_str = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        write_text_summary(&summary, out)?;
    }
    Ok(())
}

fn play_one(
    game_no: u32,
    seed: u64,
    players: usize,
    ai: &BaselineAI,
    target: u32,
) -> Result<(GameResult, Vec<PlayerId>), CliError> {
    let seats: Vec<Player> = (0..players)
        .map(|id| Player::new(id, ui::seat_label(id), Box::new(ai.clone())))
        .collect();
    let mut game = Game::new(seats, seed)?.with_target_score(target);

    let outcome = game.play(Some(MAX_ROUNDS));
    let aborted = match outcome {
        Ok(_) => None,
        Err(e) if e.is_fatal_to_round() => Some(e),
        Err(e) => return Err(e.into()),
    };
    tracing::debug!(game = game_no, seed, rounds = game.round_number(), "game finished");

    let winners = game.winners().to_vec();
    let result = GameResult {
        game: game_no,
        seed,
        rounds: game.round_number(),
        flip7_rounds: game
            .history()
            .iter()
            .filter(|r| r.reason == RoundEndReason::Flip7Achieved)
            .count(),
        winners: winners.iter().map(|&id| ui::seat_label(id)).collect(),
        scores: game.players().iter().map(Player::score).collect(),
        aborted: aborted.as_ref().map(GameError::to_string),
    };
    Ok((result, winners))
}

fn describe(result: &GameResult) -> String {
    if let Some(reason) = &result.aborted {
        return format!(
            "Game {}: aborted after {} rounds ({})",
            result.game, result.rounds, reason
        );
    }
    let best = result.scores.iter().copied().max().unwrap_or(0);
    match result.winners.as_slice() {
        [] => format!(
            "Game {}: no winner after {} rounds",
            result.game, result.rounds
        ),
        [one] => format!(
            "Game {}: {} wins with {} after {} rounds",
            result.game, one, best, result.rounds
        ),
        many => format!(
            "Game {}: {} tie with {} after {} rounds",
            result.game,
            many.join(", "),
            best,
            result.rounds
        ),
    }
}

fn write_text_summary(summary: &SimSummary, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "Simulated: {} games ({} players, ai {}, target {}, seed {})",
        summary.games, summary.players, summary.ai, summary.target_score, summary.seed
    )?;
    let wins: Vec<String> = summary
        .wins
        .iter()
        .map(|w| format!("{}={}", w.player, w.wins))
        .collect();
    writeln!(out, "Wins: {}", wins.join(" "))?;
    let rounds: u32 = summary.results.iter().map(|r| r.rounds).sum();
    let flip7: usize = summary.results.iter().map(|r| r.flip7_rounds).sum();
    writeln!(out, "Rounds: {} total, {} ended by Flip 7", rounds, flip7)?;
    if summary.aborted > 0 {
        writeln!(out, "Aborted: {}", summary.aborted)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(winners: &[&str], scores: &[u32], aborted: Option<&str>) -> GameResult {
        GameResult {
            game: 4,
            seed: 1,
            rounds: 9,
            flip7_rounds: 1,
            winners: winners.iter().map(|s| s.to_string()).collect(),
            scores: scores.to_vec(),
            aborted: aborted.map(str::to_string),
        }
    }

    #[test]
    fn describes_single_winner() {
        let r = result(&["P2"], &[150, 214, 90], None);
        assert_eq!(describe(&r), "Game 4: P2 wins with 214 after 9 rounds");
    }

    #[test]
    fn describes_ties_and_aborts() {
        let r = result(&["P1", "P3"], &[205, 100, 205], None);
        assert_eq!(describe(&r), "Game 4: P1, P3 tie with 205 after 9 rounds");

        let r = result(&[], &[10, 20], Some("Deck is empty"));
        assert_eq!(
            describe(&r),
            "Game 4: aborted after 9 rounds (Deck is empty)"
        );

        let r = result(&[], &[10, 20], None);
        assert_eq!(describe(&r), "Game 4: no winner after 9 rounds");
    }

    #[test]
    fn one_game_is_played_to_a_winner() {
        let ai = flipseven_ai::preset("baseline").unwrap().with_target_score(60);
        let (r, winners) = play_one(1, 5, 3, &ai, 60).unwrap();
        assert!(r.aborted.is_none());
        assert!(!winners.is_empty());
        assert_eq!(r.winners.len(), winners.len());
        assert!(r.scores.iter().any(|&s| s >= 60));
        assert!(r.flip7_rounds as u32 <= r.rounds);
    }
}
