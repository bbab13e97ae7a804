//! Error types for the casino demo
//!
//! Every fallible operation returns a `CasinoResult`. The only error a player
//! ever sees is an insufficient balance; the rest surface at startup.

use std::fmt;
use std::error::Error as StdError;

/// Root error type for all casino demo operations
#[derive(Debug)]
pub enum CasinoError {
    /// Configuration related errors
    Configuration(ConfigurationError),

    /// Rejected bets
    Bet(BetError),

    /// Document binding errors
    Binding(BindingError),

    /// Scene and animation backend errors
    Render(RenderError),
}

/// Configuration and validation errors
#[derive(Debug)]
pub enum ConfigurationError {
    ValidationFailed(String),
    InvalidValue { field: String, value: String, reason: String },
    LoadFailed(String),
}

/// Bet placement errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetError {
    InsufficientBalance { balance: u64, bet: u64 },
}

/// Document contract errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    MissingElement(String),
}

/// Animation backend errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    BackendUnavailable(String),
}

impl fmt::Display for CasinoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasinoError::Configuration(e) => write!(f, "Configuration error: {}", e),
            CasinoError::Bet(e) => write!(f, "Bet error: {}", e),
            CasinoError::Binding(e) => write!(f, "Binding error: {}", e),
            CasinoError::Render(e) => write!(f, "Render error: {}", e),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
            ConfigurationError::InvalidValue { field, value, reason } => {
                write!(f, "Invalid value for {}: '{}' ({})", field, value, reason)
            }
            ConfigurationError::LoadFailed(msg) => write!(f, "Failed to load configuration: {}", msg),
        }
    }
}

impl fmt::Display for BetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetError::InsufficientBalance { balance, bet } => {
                write!(f, "Not enough balance! (balance {}, bet {})", balance, bet)
            }
        }
    }
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::MissingElement(id) => write!(f, "Missing element: #{}", id),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::BackendUnavailable(msg) => write!(f, "Animation backend unavailable: {}", msg),
        }
    }
}

impl StdError for CasinoError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CasinoError::Configuration(e) => Some(e),
            CasinoError::Bet(e) => Some(e),
            CasinoError::Binding(e) => Some(e),
            CasinoError::Render(e) => Some(e),
        }
    }
}

impl StdError for ConfigurationError {}
impl StdError for BetError {}
impl StdError for BindingError {}
impl StdError for RenderError {}

impl From<ConfigurationError> for CasinoError {
    fn from(e: ConfigurationError) -> Self {
        CasinoError::Configuration(e)
    }
}

impl From<BetError> for CasinoError {
    fn from(e: BetError) -> Self {
        CasinoError::Bet(e)
    }
}

impl From<BindingError> for CasinoError {
    fn from(e: BindingError) -> Self {
        CasinoError::Binding(e)
    }
}

impl From<RenderError> for CasinoError {
    fn from(e: RenderError) -> Self {
        CasinoError::Render(e)
    }
}

impl From<toml::de::Error> for CasinoError {
    fn from(e: toml::de::Error) -> Self {
        CasinoError::Configuration(ConfigurationError::LoadFailed(e.to_string()))
    }
}

impl From<std::io::Error> for CasinoError {
    fn from(e: std::io::Error) -> Self {
        CasinoError::Configuration(ConfigurationError::LoadFailed(e.to_string()))
    }
}

// Convenience type alias for Results
pub type CasinoResult<T> = Result<T, CasinoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_error = ConfigurationError::ValidationFailed("test".to_string());
        let casino_error = CasinoError::Configuration(config_error);

        assert!(casino_error.to_string().contains("Configuration error"));
        assert!(casino_error.to_string().contains("test"));
    }

    #[test]
    fn test_bet_error_details() {
        let bet_error = BetError::InsufficientBalance { balance: 5, bet: 10 };

        assert!(bet_error.to_string().starts_with("Not enough balance!"));
        assert!(bet_error.to_string().contains("balance 5"));
        assert!(bet_error.to_string().contains("bet 10"));
    }

    #[test]
    fn test_error_conversion() {
        let casino_error: CasinoError = BindingError::MissingElement("spin-button".to_string()).into();

        match casino_error {
            CasinoError::Binding(BindingError::MissingElement(id)) => assert_eq!(id, "spin-button"),
            _ => panic!("Expected binding error"),
        }
    }

    #[test]
    fn test_error_source() {
        let casino_error = CasinoError::Render(RenderError::BackendUnavailable("test".to_string()));

        assert!(casino_error.source().is_some());
    }
}
