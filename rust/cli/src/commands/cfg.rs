//! Configuration command handler.
//!
//! Prints every setting with its source (`default`, `file` or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": 3,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Loads the layered configuration and writes it as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if the file or an environment value is invalid.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "target_score": {
            "value": config.target_score,
            "source": sources.target_score,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        },
        "risk_tolerance": {
            "value": config.risk_tolerance,
            "source": sources.risk_tolerance,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
