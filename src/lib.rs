//! Casino Demo - slot machine, roulette and card game UI simulator
//!
//! Headless model of a three-game casino page: a game selector, placeholder
//! scenes drawn onto a recorded 2D surface, and an outcome simulator that
//! takes a bet, plays a timed animation and settles a random win or loss
//! against an in-memory balance.

pub mod config;
pub mod errors;
pub mod games;
pub mod scene;
pub mod animation;
pub mod timeline;
pub mod session;
pub mod ui;
pub mod controller;

pub use animation::{AnimationBackend, SceneLoader, UnavailableBackend};
pub use config::{CasinoConfig, ConfigLoader};
pub use controller::{ActionStatus, CasinoController, DispatchOutcome, SessionEvent};
pub use errors::{CasinoError, CasinoResult};
pub use games::{GameMode, RngDraws, ScriptedDraws, SimulationRunner};
pub use session::SessionState;
pub use ui::{AlertLog, Notifier, StaticDocument, UiEvent, ViewModel};

/// Controller wired the way the terminal host runs it
pub type LiveController<N> = CasinoController<UnavailableBackend, RngDraws<rand::rngs::StdRng>, N>;
