//! Host-facing surface: document bindings, input events, alerts and the view

pub mod bindings;
pub mod events;
pub mod view;

pub use bindings::{Bindings, ControlId, Document, StaticDocument};
pub use events::{CommandError, UiEvent};
pub use view::ViewModel;

/// Blocking user-facing alerts
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Collects alerts instead of showing them
#[derive(Debug, Clone, Default)]
pub struct AlertLog {
    pub messages: Vec<String>,
}

impl Notifier for AlertLog {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
