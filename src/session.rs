//! Per-session player state

use crate::config::SessionConfig;
use crate::errors::BetError;
use crate::games::types::GameMode;
use serde::{Deserialize, Serialize};

/// Balance, bet and mode for the running session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_game: GameMode,
    pub balance: u64,
    pub last_win: u64,
    pub bet_amount: u64,
    /// Re-entrancy guard while a spin or deal is in flight
    pub is_animating: bool,
}

impl SessionState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            current_game: config.starting_game,
            balance: config.starting_balance,
            last_win: 0,
            bet_amount: config.default_bet,
            is_animating: false,
        }
    }

    /// Restore balance, last win and bet. Mode and the animation guard are
    /// left alone.
    pub fn reset(&mut self, config: &SessionConfig) {
        self.balance = config.starting_balance;
        self.last_win = 0;
        self.bet_amount = config.default_bet;
    }

    /// Apply an edit of the bet field and return the clamped bet
    pub fn set_bet_from_input(&mut self, input: &str, config: &SessionConfig) -> u64 {
        self.bet_amount = parse_bet(input, config);
        self.bet_amount
    }

    /// Take the current bet off the balance
    pub fn place_bet(&mut self) -> Result<u64, BetError> {
        if self.balance < self.bet_amount {
            return Err(BetError::InsufficientBalance {
                balance: self.balance,
                bet: self.bet_amount,
            });
        }
        self.balance -= self.bet_amount;
        Ok(self.bet_amount)
    }

    /// Record the payout of a settled round (zero on a loss)
    pub fn settle(&mut self, payout: u64) {
        self.last_win = payout;
        self.balance = self.balance.saturating_add(payout);
    }
}

/// Leading-integer parse of the bet field.
///
/// Leading whitespace and one sign are accepted and trailing garbage is
/// ignored ("12abc" is 12). A `0x` prefix switches to hexadecimal ("0x1A" is
/// 26). Input without digits, or a zero, falls back to the default bet. The
/// result is clamped to the configured bet range.
pub fn parse_bet(input: &str, config: &SessionConfig) -> u64 {
    let value = match parse_leading_int(input) {
        Some(v) if v != 0 => v,
        _ => config.default_bet as i64,
    };

    let min = config.min_bet as i64;
    let max = config.max_bet as i64;
    value.clamp(min, max) as u64
}

fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let run = &digits[..end];
    if run.is_empty() {
        return None;
    }

    // Saturate absurdly long inputs; they clamp to the bet range anyway
    let magnitude = i64::from_str_radix(run, radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
