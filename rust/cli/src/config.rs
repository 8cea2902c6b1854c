//! Layered configuration: built-in defaults, then the TOML file named by
//! `FLIPSEVEN_CONFIG`, then `FLIPSEVEN_*` environment variables. Command-line
//! flags are applied on top by each command.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

use flipseven_ai::{baseline::DEFAULT_TOLERANCE, AI_NAMES};
use flipseven_engine::game::WINNING_SCORE;

pub const CONFIG_ENV: &str = "FLIPSEVEN_CONFIG";
pub const MAX_PLAYERS: usize = 18;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub target_score: u32,
    pub seed: Option<u64>,
    pub ai: String,
    pub risk_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 3,
            target_score: WINNING_SCORE,
            seed: None,
            ai: "baseline".into(),
            risk_tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub target_score: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub risk_tolerance: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            target_score: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            risk_tolerance: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Risk tolerance the user asked for explicitly, if any. A default value
    /// leaves the AI preset's own tolerance in place.
    pub fn tolerance_override(&self) -> Option<f64> {
        match self.sources.risk_tolerance {
            ValueSource::Default => None,
            _ => Some(self.config.risk_tolerance),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    target_score: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    risk_tolerance: Option<f64>,
}

/// Non-empty value of an environment variable.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", name, raw)))
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env_value(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.target_score {
            cfg.target_score = v;
            sources.target_score = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.risk_tolerance {
            cfg.risk_tolerance = v;
            sources.risk_tolerance = ValueSource::File;
        }
    }

    if let Some(v) = env_value("FLIPSEVEN_PLAYERS") {
        cfg.players = parse_env("FLIPSEVEN_PLAYERS", &v)?;
        sources.players = ValueSource::Env;
    }
    if let Some(v) = env_value("FLIPSEVEN_TARGET_SCORE") {
        cfg.target_score = parse_env("FLIPSEVEN_TARGET_SCORE", &v)?;
        sources.target_score = ValueSource::Env;
    }
    if let Some(v) = env_value("FLIPSEVEN_SEED") {
        cfg.seed = Some(parse_env("FLIPSEVEN_SEED", &v)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("FLIPSEVEN_AI") {
        cfg.ai = v.trim().to_string();
        sources.ai = ValueSource::Env;
    }
    if let Some(v) = env_value("FLIPSEVEN_RISK_TOLERANCE") {
        cfg.risk_tolerance = parse_env("FLIPSEVEN_RISK_TOLERANCE", &v)?;
        sources.risk_tolerance = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

pub fn validate_players(players: usize) -> Result<(), ConfigError> {
    if players == 0 || players > MAX_PLAYERS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between 1 and {}",
            MAX_PLAYERS
        )));
    }
    Ok(())
}

pub fn validate_target(target: u32) -> Result<(), ConfigError> {
    if target == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: target_score must be >0".into(),
        ));
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_players(cfg.players)?;
    validate_target(cfg.target_score)?;
    if !AI_NAMES.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai {:?} (expected one of: {})",
            cfg.ai,
            AI_NAMES.join(", ")
        )));
    }
    if !(0.0..=1.0).contains(&cfg.risk_tolerance) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: risk_tolerance must be between 0.0 and 1.0".into(),
        ));
    }
    Ok(())
}
