use crate::ui::bindings::ControlId;

/// User input arriving from the host document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(ControlId),
    /// Bet field committed with raw text
    BetChanged(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
}

impl UiEvent {
    /// Parse a terminal command such as `spin`, `card` or `bet 25`
    pub fn parse_command(line: &str) -> Result<Self, CommandError> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let event = match command.as_str() {
            "slot" => UiEvent::Click(ControlId::SlotButton),
            "roulette" => UiEvent::Click(ControlId::RouletteButton),
            "card" => UiEvent::Click(ControlId::CardButton),
            "spin" => UiEvent::Click(ControlId::SpinButton),
            "deal" => UiEvent::Click(ControlId::DealButton),
            "reset" => UiEvent::Click(ControlId::ResetButton),
            "bet" => UiEvent::BetChanged(parts.collect::<Vec<_>>().join(" ")),
            _ => return Err(CommandError::Unknown(command)),
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(UiEvent::parse_command("SPIN"), Ok(UiEvent::Click(ControlId::SpinButton)));
        assert_eq!(UiEvent::parse_command("  card "), Ok(UiEvent::Click(ControlId::CardButton)));
        assert_eq!(UiEvent::parse_command("bet 25"), Ok(UiEvent::BetChanged("25".to_string())));
        assert_eq!(UiEvent::parse_command("bet"), Ok(UiEvent::BetChanged(String::new())));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            UiEvent::parse_command("Jackpot"),
            Err(CommandError::Unknown("jackpot".to_string()))
        );
        assert_eq!(UiEvent::parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            CommandError::Unknown("jackpot".to_string()).to_string(),
            "Unknown command 'jackpot'"
        );
    }
}
