//! Document contract: the element ids the controller binds to at startup

use crate::errors::BindingError;
use crate::games::types::GameMode;
use std::collections::{HashMap, HashSet};
use std::fmt;

pub const CANVAS_CONTAINER: &str = "rive-canvas";
pub const BALANCE_DISPLAY: &str = "balance-amount";
pub const WIN_DISPLAY: &str = "win-amount";
pub const BET_INPUT: &str = "bet-amount";

/// Clickable controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    SlotButton,
    RouletteButton,
    CardButton,
    SpinButton,
    DealButton,
    ResetButton,
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::SlotButton,
        ControlId::RouletteButton,
        ControlId::CardButton,
        ControlId::SpinButton,
        ControlId::DealButton,
        ControlId::ResetButton,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ControlId::SlotButton => "slot-button",
            ControlId::RouletteButton => "roulette-button",
            ControlId::CardButton => "card-button",
            ControlId::SpinButton => "spin-button",
            ControlId::DealButton => "deal-button",
            ControlId::ResetButton => "reset-button",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.element_id() == id)
    }

    /// Selector button for a game mode
    pub fn selector(mode: GameMode) -> Self {
        match mode {
            GameMode::Slot => ControlId::SlotButton,
            GameMode::Roulette => ControlId::RouletteButton,
            GameMode::Card => ControlId::CardButton,
        }
    }

    /// Game mode a selector button switches to
    pub fn selected_mode(&self) -> Option<GameMode> {
        match self {
            ControlId::SlotButton => Some(GameMode::Slot),
            ControlId::RouletteButton => Some(GameMode::Roulette),
            ControlId::CardButton => Some(GameMode::Card),
            _ => None,
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Every id the controller requires, in lookup order
pub fn required_ids() -> Vec<&'static str> {
    let mut ids = vec![CANVAS_CONTAINER, BALANCE_DISPLAY, WIN_DISPLAY, BET_INPUT];
    ids.extend(ControlId::ALL.iter().map(|c| c.element_id()));
    ids
}

/// Host document the demo is mounted into
pub trait Document {
    fn has_element(&self, id: &str) -> bool;

    /// Measured client size of an element; zero when not laid out
    fn client_size(&self, id: &str) -> (f64, f64);
}

/// In-memory document for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    ids: HashSet<String>,
    sizes: HashMap<String, (f64, f64)>,
}

impl StaticDocument {
    /// A document carrying every required id, with an unmeasured container
    pub fn complete() -> Self {
        let mut doc = Self::default();
        for id in required_ids() {
            doc.ids.insert(id.to_string());
        }
        doc
    }

    pub fn with_size(mut self, id: &str, width: f64, height: f64) -> Self {
        self.sizes.insert(id.to_string(), (width, height));
        self
    }

    pub fn without(mut self, id: &str) -> Self {
        self.ids.remove(id);
        self
    }
}

impl Document for StaticDocument {
    fn has_element(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn client_size(&self, id: &str) -> (f64, f64) {
        self.sizes.get(id).copied().unwrap_or((0.0, 0.0))
    }
}

/// Verified element bindings plus the container measurement taken at bind time
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
    pub container_size: (f64, f64),
}

impl Bindings {
    /// Fails on the first required id the document lacks
    pub fn bind<D: Document + ?Sized>(document: &D) -> Result<Self, BindingError> {
        if let Some(missing) = required_ids().into_iter().find(|id| !document.has_element(id)) {
            return Err(BindingError::MissingElement(missing.to_string()));
        }

        Ok(Self {
            container_size: document.client_size(CANVAS_CONTAINER),
        })
    }
}
