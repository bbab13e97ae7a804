//! Batch simulation of many rounds
//!
//! Drives a full controller on the zero-delay timeline so statistics reflect
//! exactly what a player would see, choreography included.

use crate::animation::UnavailableBackend;
use crate::config::CasinoConfig;
use crate::controller::{ActionStatus, CasinoController};
use crate::errors::CasinoResult;
use crate::games::draws::DrawSource;
use crate::games::types::{ActionKind, GameMode, GameOutcome};
use crate::ui::{AlertLog, StaticDocument};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::info;

/// Aggregate results of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub game: GameMode,
    pub bet: u64,
    pub rounds_requested: usize,
    pub rounds_played: usize,
    pub wins: usize,
    pub total_wagered: u64,
    pub total_paid: u64,
    pub win_rate: f64,
    /// Paid out per unit wagered
    pub return_to_player: f64,
    pub biggest_win: u64,
    pub starting_balance: u64,
    pub final_balance: u64,
    /// Ran out of balance before finishing
    pub stopped_early: bool,
    pub execution_time: Duration,
}

pub struct SimulationRunner {
    config: CasinoConfig,
}

impl SimulationRunner {
    /// Uses `config`'s odds and session limits; timings are zeroed
    pub fn new(config: CasinoConfig) -> Self {
        let mut config = config;
        config.timing = CasinoConfig::instant().timing;
        Self { config }
    }

    pub fn run<D: DrawSource>(
        &self,
        game: GameMode,
        bet_input: &str,
        rounds: usize,
        draws: D,
    ) -> CasinoResult<SimulationReport> {
        let started = Instant::now();
        let mut session = self.config.session.clone();
        session.starting_game = game;
        let config = CasinoConfig {
            session,
            ..self.config.clone()
        };

        let mut controller = CasinoController::bind(
            &StaticDocument::complete(),
            config,
            UnavailableBackend,
            draws,
            AlertLog::default(),
        )?;
        let bet = controller.change_bet(bet_input);
        let starting_balance = controller.state().balance;

        let mut report = SimulationReport {
            game,
            bet,
            rounds_requested: rounds,
            rounds_played: 0,
            wins: 0,
            total_wagered: 0,
            total_paid: 0,
            win_rate: 0.0,
            return_to_player: 0.0,
            biggest_win: 0,
            starting_balance,
            final_balance: starting_balance,
            stopped_early: false,
            execution_time: Duration::ZERO,
        };

        for _ in 0..rounds {
            let status = match game.action() {
                ActionKind::Spin => controller.spin(),
                ActionKind::Deal => controller.deal(),
            };

            match status {
                Ok(ActionStatus::Started { .. }) => {}
                // The timeline is drained after every round
                Ok(ActionStatus::Ignored) => break,
                Err(_) => {
                    report.stopped_early = true;
                    break;
                }
            }
            controller.run_until_idle();

            if let Some(record) = controller.history().latest() {
                report.rounds_played += 1;
                report.total_wagered += record.bet;
                report.total_paid += record.payout;
                report.biggest_win = report.biggest_win.max(record.payout);
                if record.outcome == GameOutcome::Win {
                    report.wins += 1;
                }
            }
        }

        report.final_balance = controller.state().balance;
        if report.rounds_played > 0 {
            report.win_rate = report.wins as f64 / report.rounds_played as f64;
        }
        if report.total_wagered > 0 {
            report.return_to_player = report.total_paid as f64 / report.total_wagered as f64;
        }
        report.execution_time = started.elapsed();

        info!(
            game = %game,
            rounds = report.rounds_played,
            win_rate = report.win_rate,
            rtp = report.return_to_player,
            "simulation complete"
        );

        Ok(report)
    }
}
