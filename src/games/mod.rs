pub mod types;
pub mod draws;
pub mod outcome;
pub mod history;
pub mod simulation;

pub use types::*;
pub use draws::{DrawSource, RngDraws, ScriptedDraws};
pub use outcome::{OutcomeResolver, Resolution};
pub use history::RoundHistory;
pub use simulation::{SimulationReport, SimulationRunner};
