//! Configuration management with validation and defaults
//!
//! Every constant the demo runs on (starting balance, bet limits, animation
//! timings, odds, surface fallbacks) lives here so the simulator can be driven
//! at full speed in tests and simulations.

use crate::errors::{CasinoResult, ConfigurationError};
use crate::games::types::GameMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete demo configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CasinoConfig {
    pub session: SessionConfig,
    pub timing: TimingConfig,
    pub odds: OddsConfig,
    pub surface: SurfaceConfig,
    pub monitoring: MonitoringConfig,
}

/// Session defaults and bet limits
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub starting_balance: u64,
    pub default_bet: u64,
    pub min_bet: u64,
    pub max_bet: u64,
    pub starting_game: GameMode,
    /// Resolved rounds kept in memory
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            default_bet: 10,
            min_bet: 1,
            max_bet: 100,
            starting_game: GameMode::Slot,
            history_capacity: 100,
        }
    }
}

/// Animation choreography, all in milliseconds
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    pub reel_stagger_ms: u64,
    pub spin_duration_ms: u64,
    pub card_stagger_ms: u64,
    pub card_face_swap_ms: u64,
    pub card_flip_duration_ms: u64,
    pub deal_duration_ms: u64,
    pub reset_pulse_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            reel_stagger_ms: 200,
            spin_duration_ms: 3000,
            card_stagger_ms: 400,
            card_face_swap_ms: 300,
            card_flip_duration_ms: 1200,
            deal_duration_ms: 2500,
            reset_pulse_ms: 100,
        }
    }
}

/// Win probabilities and payout multiplier range
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OddsConfig {
    pub spin_win_probability: f64,
    pub deal_win_probability: f64,
    /// Inclusive lower bound of the payout multiplier
    pub min_multiplier: f64,
    /// Exclusive upper bound of the payout multiplier
    pub max_multiplier: f64,
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            spin_win_probability: 0.4,
            deal_win_probability: 0.5,
            min_multiplier: 1.0,
            max_multiplier: 4.0,
        }
    }
}

/// Drawing surface and animation backend settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Used when the container measures zero wide
    pub fallback_width: f64,
    /// Used when the container measures zero high
    pub fallback_height: f64,
    pub state_machine: String,
    pub autoplay: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            fallback_width: 600.0,
            fallback_height: 400.0,
            state_machine: "State Machine 1".to_string(),
            autoplay: true,
        }
    }
}

/// Logging configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MonitoringConfig {
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
        }
    }
}

impl CasinoConfig {
    /// Zero-delay choreography for tests and batch simulation
    pub fn instant() -> Self {
        Self {
            timing: TimingConfig {
                reel_stagger_ms: 0,
                spin_duration_ms: 0,
                card_stagger_ms: 0,
                card_face_swap_ms: 0,
                card_flip_duration_ms: 0,
                deal_duration_ms: 0,
                reset_pulse_ms: 0,
            },
            monitoring: MonitoringConfig {
                log_level: LogLevel::Warn,
            },
            ..Default::default()
        }
    }

    /// Validate configuration for logical consistency
    pub fn validate(&self) -> CasinoResult<()> {
        let session = &self.session;

        if session.min_bet == 0 {
            return Err(invalid("session.min_bet", "0", "Minimum bet must be at least 1"));
        }

        if session.min_bet > session.max_bet {
            return Err(ConfigurationError::ValidationFailed(format!(
                "min_bet {} exceeds max_bet {}",
                session.min_bet, session.max_bet
            ))
            .into());
        }

        if session.default_bet < session.min_bet || session.default_bet > session.max_bet {
            return Err(invalid(
                "session.default_bet",
                &session.default_bet.to_string(),
                "Default bet must lie within [min_bet, max_bet]",
            ));
        }

        if session.history_capacity == 0 {
            return Err(invalid("session.history_capacity", "0", "History capacity cannot be zero"));
        }

        for (field, p) in [
            ("odds.spin_win_probability", self.odds.spin_win_probability),
            ("odds.deal_win_probability", self.odds.deal_win_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(field, &p.to_string(), "Probability must lie within [0, 1]"));
            }
        }

        if self.odds.min_multiplier < 0.0 || self.odds.min_multiplier > self.odds.max_multiplier {
            return Err(ConfigurationError::ValidationFailed(format!(
                "multiplier range [{}, {}) is empty or negative",
                self.odds.min_multiplier, self.odds.max_multiplier
            ))
            .into());
        }

        if self.surface.fallback_width <= 0.0 || self.surface.fallback_height <= 0.0 {
            return Err(invalid(
                "surface.fallback_*",
                &format!("{}x{}", self.surface.fallback_width, self.surface.fallback_height),
                "Fallback dimensions must be positive",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, value: &str, reason: &str) -> crate::errors::CasinoError {
    ConfigurationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Configuration loader with environment variable support
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_string_lossy().to_string());
        self
    }

    /// Load configuration from file and environment variables
    pub fn load(&self) -> CasinoResult<CasinoConfig> {
        let mut config = if let Some(ref path) = self.config_path {
            self.load_from_file(path)?
        } else {
            CasinoConfig::default()
        };

        apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    fn load_from_file(&self, path: &str) -> CasinoResult<CasinoConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigurationError::LoadFailed(format!("Failed to read {}: {}", path, e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigurationError::LoadFailed(format!("Failed to parse TOML: {}", e)).into())
    }

    /// Save configuration to file
    pub fn save(&self, config: &CasinoConfig, path: &str) -> CasinoResult<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| ConfigurationError::LoadFailed(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

/// Apply `CASINO_*` overrides looked up through `lookup`
pub fn apply_overrides<F>(config: &mut CasinoConfig, lookup: F) -> CasinoResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(balance) = lookup("CASINO_STARTING_BALANCE") {
        config.session.starting_balance = parse_field("CASINO_STARTING_BALANCE", balance)?;
    }
    if let Some(bet) = lookup("CASINO_DEFAULT_BET") {
        config.session.default_bet = parse_field("CASINO_DEFAULT_BET", bet)?;
    }
    if let Some(game) = lookup("CASINO_STARTING_GAME") {
        config.session.starting_game = parse_field("CASINO_STARTING_GAME", game)?;
    }
    if let Some(p) = lookup("CASINO_SPIN_WIN_PROBABILITY") {
        config.odds.spin_win_probability = parse_field("CASINO_SPIN_WIN_PROBABILITY", p)?;
    }
    if let Some(p) = lookup("CASINO_DEAL_WIN_PROBABILITY") {
        config.odds.deal_win_probability = parse_field("CASINO_DEAL_WIN_PROBABILITY", p)?;
    }
    if let Some(level) = lookup("CASINO_LOG_LEVEL") {
        config.monitoring.log_level = parse_field("CASINO_LOG_LEVEL", level)?;
    }

    Ok(())
}

fn parse_field<T: std::str::FromStr>(field: &str, value: String) -> CasinoResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigurationError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "Unparseable value".to_string(),
        }
        .into()
    })
}
