use crate::config::OddsConfig;
use crate::games::draws::DrawSource;
use crate::games::types::{ActionKind, CardFace, CardValue, GameOutcome, SlotSymbol, Suit};

/// Result of the win/loss draw for one round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub outcome: GameOutcome,
    pub payout: u64,
    pub multiplier: Option<f64>,
}

impl Resolution {
    pub fn loss() -> Self {
        Self {
            outcome: GameOutcome::Loss,
            payout: 0,
            multiplier: None,
        }
    }
}

/// Decides a round independently of whatever the reels or cards display
pub struct OutcomeResolver {
    odds: OddsConfig,
}

impl OutcomeResolver {
    pub fn new(odds: OddsConfig) -> Self {
        Self { odds }
    }

    pub fn win_probability(&self, action: ActionKind) -> f64 {
        match action {
            ActionKind::Spin => self.odds.spin_win_probability,
            ActionKind::Deal => self.odds.deal_win_probability,
        }
    }

    /// Draw the outcome, then the multiplier on a win
    pub fn resolve<D: DrawSource>(&self, action: ActionKind, bet: u64, draws: &mut D) -> Resolution {
        if draws.unit() >= self.win_probability(action) {
            return Resolution::loss();
        }

        let multiplier = self.multiplier(draws.unit());
        Resolution {
            outcome: GameOutcome::Win,
            payout: payout_for(bet, multiplier),
            multiplier: Some(multiplier),
        }
    }

    /// Map a unit draw onto `[min_multiplier, max_multiplier)`
    pub fn multiplier(&self, unit: f64) -> f64 {
        let span = self.odds.max_multiplier - self.odds.min_multiplier;
        self.odds.min_multiplier + unit * span
    }
}

/// `floor(bet * multiplier)`
pub fn payout_for(bet: u64, multiplier: f64) -> u64 {
    (bet as f64 * multiplier).floor() as u64
}

/// Symbol a reel shows after it stops spinning
pub fn reroll_reel<D: DrawSource>(draws: &mut D) -> SlotSymbol {
    draws.pick(&SlotSymbol::REEL)
}

/// Face a card shows after it flips
pub fn reroll_card<D: DrawSource>(draws: &mut D) -> CardFace {
    let suit = draws.pick(&Suit::ALL);
    let value = draws.pick(&CardValue::ALL);
    CardFace { value, suit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::draws::{RngDraws, ScriptedDraws};

    #[test]
    fn test_forced_win_payout_range() {
        let resolver = OutcomeResolver::new(OddsConfig::default());

        let low = resolver.resolve(ActionKind::Spin, 10, &mut ScriptedDraws::new([0.0, 0.0]));
        assert_eq!(low.outcome, GameOutcome::Win);
        assert_eq!(low.payout, 10);

        let high = resolver.resolve(ActionKind::Spin, 10, &mut ScriptedDraws::new([0.0, 0.9999]));
        assert_eq!(high.payout, 39);
    }

    #[test]
    fn test_spin_and_deal_thresholds() {
        let resolver = OutcomeResolver::new(OddsConfig::default());

        let spin = resolver.resolve(ActionKind::Spin, 10, &mut ScriptedDraws::new([0.45]));
        assert_eq!(spin, Resolution::loss());

        let deal = resolver.resolve(ActionKind::Deal, 10, &mut ScriptedDraws::new([0.45, 0.5]));
        assert_eq!(deal.outcome, GameOutcome::Win);
        assert_eq!(deal.multiplier, Some(2.5));
        assert_eq!(deal.payout, 25);
    }

    #[test]
    fn test_payout_is_floored_multiple() {
        let resolver = OutcomeResolver::new(OddsConfig::default());
        let mut draws = RngDraws::seeded(99);

        for bet in 1..=100u64 {
            let resolution = resolver.resolve(ActionKind::Deal, bet, &mut draws);
            match resolution.outcome {
                GameOutcome::Loss => assert_eq!(resolution.payout, 0),
                GameOutcome::Win => {
                    let m = resolution.multiplier.unwrap();
                    assert!((1.0..4.0).contains(&m));
                    assert_eq!(resolution.payout, (bet as f64 * m).floor() as u64);
                    assert!(resolution.payout >= bet && resolution.payout < bet * 4);
                }
            }
        }
    }

    #[test]
    fn test_rerolls_cover_tables() {
        let mut draws = ScriptedDraws::new([0.0, 0.99, 0.3, 0.0]);
        assert_eq!(reroll_reel(&mut draws), SlotSymbol::Seven);
        assert_eq!(reroll_reel(&mut draws), SlotSymbol::Bar);

        let face = reroll_card(&mut draws);
        assert_eq!(face.suit, Suit::Hearts);
        assert_eq!(face.value, CardValue::Ace);
    }
}
