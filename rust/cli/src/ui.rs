//! UI helper functions for terminal output formatting.

use std::io::Write;

use flipseven_engine::player::PlayerId;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Seat label shown to users: player 0 is "P1".
pub fn seat_label(id: PlayerId) -> String {
    format!("P{}", id + 1)
}

/// Formats a probability as a percentage with two decimals.
pub fn percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}
