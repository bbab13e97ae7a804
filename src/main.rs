//! Casino Demo terminal host
//!
//! Runs the casino page headlessly: commands typed on stdin stand in for
//! button clicks and the animation timeline is replayed in real time.

use casino_demo::{
    config::{CasinoConfig, ConfigLoader},
    controller::DispatchOutcome,
    games::{GameMode, RngDraws, SimulationReport, SimulationRunner},
    ui::{bindings::CANVAS_CONTAINER, Notifier, StaticDocument, UiEvent},
    CasinoController, LiveController, UnavailableBackend,
};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::{debug, warn};

/// Casino Demo CLI
#[derive(Parser)]
#[command(name = "casino-demo")]
#[command(about = "Slot machine, roulette and card game UI simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Measured width of the game container (0 uses the fallback)
        #[arg(long, default_value = "0")]
        width: f64,

        /// Measured height of the game container (0 uses the fallback)
        #[arg(long, default_value = "0")]
        height: f64,

        /// Seed for reproducible outcomes
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play many rounds instantly and report statistics
    Simulate {
        /// Game to simulate: slot, roulette or card
        #[arg(short, long, default_value = "slot")]
        game: GameMode,

        /// Bet per round (clamped like the bet field)
        #[arg(short, long, default_value = "10")]
        bet: String,

        /// Rounds to play
        #[arg(short, long, default_value = "1000")]
        rounds: usize,

        /// Seed for reproducible outcomes
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

/// Prints alerts inline
struct TerminalAlerts;

impl Notifier for TerminalAlerts {
    fn alert(&mut self, message: &str) {
        println!("⚠️  {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_path(path);
    }
    let config = loader.load()?;

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.monitoring.log_level.as_directive()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("casino_demo={}", default_level).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play { width, height, seed } => play(config, width, height, seed).await?,
        Commands::Simulate { game, bet, rounds, seed, json } => {
            let draws = match seed {
                Some(seed) => RngDraws::seeded(seed),
                None => RngDraws::from_entropy(),
            };
            let report = SimulationRunner::new(config).run(game, &bet, rounds, draws)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::ShowConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn play(
    config: CasinoConfig,
    width: f64,
    height: f64,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = StaticDocument::complete().with_size(CANVAS_CONTAINER, width, height);
    let draws = match seed {
        Some(seed) => RngDraws::seeded(seed),
        None => RngDraws::from_entropy(),
    };
    let mut controller: LiveController<TerminalAlerts> =
        CasinoController::bind(&document, config, UnavailableBackend, draws, TerminalAlerts)?;

    println!("🎰 Casino Demo");
    println!("Commands: slot | roulette | card | spin | deal | bet <n> | reset | history | quit");
    println!("{}\n", controller.view().render_text());

    let started = Instant::now();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let mut last_reported = None;

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        controller.advance_to(now_ms);

        // Rounds can also settle while a command catches the clock up
        if let Some(record) = controller.history().latest() {
            if last_reported != Some(record.round_id) {
                last_reported = Some(record.round_id);
                if record.payout > 0 {
                    println!("🎉 You won {}!", record.payout);
                } else {
                    println!("No win this time.");
                }
                println!("{}\n", controller.view().render_text());
            }
        }

        let wait = controller
            .next_due_ms()
            .map(|due| Duration::from_millis(due.saturating_sub(now_ms)));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let now_ms = started.elapsed().as_millis() as u64;
                if !handle_line(&mut controller, now_ms, line.trim()) {
                    break;
                }
            }
            _ = wait_for(wait) => {}
        }
    }

    Ok(())
}

/// Returns false when the player asked to quit. `now_ms` is the wall-clock
/// time the line arrived.
fn handle_line(controller: &mut LiveController<TerminalAlerts>, now_ms: u64, line: &str) -> bool {
    match line {
        "" => return true,
        "quit" | "exit" => return false,
        "history" => {
            match controller.history().to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => warn!(error = %e, "failed to export history"),
            }
            return true;
        }
        "status" => {
            println!("{}\n", controller.view().render_text());
            return true;
        }
        _ => {}
    }

    let event = match UiEvent::parse_command(line) {
        Ok(event) => event,
        Err(e) => {
            println!("{}", e);
            return true;
        }
    };

    let outcome = controller.dispatch_at(now_ms, event);
    debug!(outcome = ?outcome, "dispatched");
    match outcome {
        DispatchOutcome::Hidden(control) => println!("{} is not available in this game", control),
        DispatchOutcome::Rejected(_) => {}
        DispatchOutcome::Action(casino_demo::ActionStatus::Ignored) => {
            println!("Still spinning...");
        }
        _ => println!("{}\n", controller.view().render_text()),
    }
    true
}

async fn wait_for(duration: Option<Duration>) {
    match duration {
        Some(duration) => tokio::time::sleep(duration).await,
        None => std::future::pending::<()>().await,
    }
}

fn print_report(report: &SimulationReport) {
    println!("📊 Simulation: {} x{} at bet {}", report.game, report.rounds_requested, report.bet);
    println!("============================================");
    println!("Rounds played:    {}", report.rounds_played);
    println!("Wins:             {} ({:.1}%)", report.wins, report.win_rate * 100.0);
    println!("Total wagered:    {}", report.total_wagered);
    println!("Total paid:       {}", report.total_paid);
    println!("Return to player: {:.3}", report.return_to_player);
    println!("Biggest win:      {}", report.biggest_win);
    println!("Balance:          {} -> {}", report.starting_balance, report.final_balance);
    if report.stopped_early {
        println!("Stopped early: balance could not cover the bet");
    }
    println!("Elapsed:          {:?}", report.execution_time);
}
