use crate::games::types::{DisplayedSymbols, GameMode};
use crate::session::SessionState;
use crate::ui::bindings::ControlId;
use serde::Serialize;
use std::fmt::Write as _;

/// Snapshot of what the page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub game: GameMode,
    pub balance_text: String,
    pub win_text: String,
    pub bet_text: String,
    pub spin_visible: bool,
    pub deal_visible: bool,
    /// Exactly one selector carries the active state
    #[serde(skip)]
    pub active_selector: ControlId,
    pub is_animating: bool,
    pub displayed: DisplayedSymbols,
}

impl ViewModel {
    pub fn from_state(state: &SessionState, displayed: DisplayedSymbols) -> Self {
        let game = state.current_game;
        Self {
            game,
            balance_text: state.balance.to_string(),
            win_text: state.last_win.to_string(),
            bet_text: state.bet_amount.to_string(),
            spin_visible: matches!(game, GameMode::Slot | GameMode::Roulette),
            deal_visible: game == GameMode::Card,
            active_selector: ControlId::selector(game),
            is_animating: state.is_animating,
            displayed,
        }
    }

    /// Whether a click on `control` reaches its handler
    pub fn is_clickable(&self, control: ControlId) -> bool {
        match control {
            ControlId::SpinButton => self.spin_visible,
            ControlId::DealButton => self.deal_visible,
            _ => true,
        }
    }

    /// One-screen text rendering for terminal hosts
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let selectors: Vec<String> = GameMode::ALL
            .iter()
            .map(|mode| {
                if ControlId::selector(*mode) == self.active_selector {
                    format!("[{}]", mode)
                } else {
                    format!(" {} ", mode)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", selectors.join(" "));

        let _ = writeln!(out, "{}", self.game.title());
        match &self.displayed {
            DisplayedSymbols::Reels { symbols } => {
                let cells: Vec<String> = symbols.iter().map(|s| format!("[{:^3}]", s.glyph())).collect();
                let _ = writeln!(out, "  {}", cells.join(" "));
            }
            DisplayedSymbols::Cards { faces } => {
                let cells: Vec<String> = faces.iter().map(|f| format!("[{:^3}]", f.to_string())).collect();
                let _ = writeln!(out, "  {}", cells.join(" "));
            }
            DisplayedSymbols::Wheel => {
                let _ = writeln!(out, "  {}", if self.is_animating { "(( spinning ))" } else { "(( wheel ))" });
            }
            DisplayedSymbols::Nothing => {}
        }

        let _ = writeln!(
            out,
            "Balance: {}  Win: {}  Bet: {}",
            self.balance_text, self.win_text, self.bet_text
        );

        let mut actions = Vec::new();
        if self.spin_visible {
            actions.push("spin");
        }
        if self.deal_visible {
            actions.push("deal");
        }
        actions.push("reset");
        let _ = write!(out, "Actions: {}", actions.join(" | "));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    #[test]
    fn test_visibility_per_mode() {
        let mut state = SessionState::new(&SessionConfig::default());

        for (mode, spin, deal) in [
            (GameMode::Slot, true, false),
            (GameMode::Roulette, true, false),
            (GameMode::Card, false, true),
        ] {
            state.current_game = mode;
            let view = ViewModel::from_state(&state, DisplayedSymbols::Nothing);
            assert_eq!(view.spin_visible, spin);
            assert_eq!(view.deal_visible, deal);
            assert_eq!(view.active_selector, ControlId::selector(mode));
            assert_eq!(view.is_clickable(ControlId::DealButton), deal);
        }
    }

    #[test]
    fn test_render_text() {
        let state = SessionState::new(&SessionConfig::default());
        let view = ViewModel::from_state(&state, DisplayedSymbols::Wheel);
        let text = view.render_text();

        assert!(text.contains("[slot]"));
        assert!(text.contains("Balance: 1000  Win: 0  Bet: 10"));
        assert!(text.ends_with("Actions: spin | reset"));
    }
}
