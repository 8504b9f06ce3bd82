use std::fmt;

/// A rejected command. Every rejection is recoverable and leaves all game
/// state exactly as it was; the caller decides whether to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    InsufficientFunds { needed: u32, available: u32 },
    InvalidRosterSlot(usize),
    InvalidMarketIndex(usize),
    EmptySelection,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InsufficientFunds { needed, available } => {
                write!(f, "not enough money: need ${needed}, have ${available}")
            }
            CommandError::InvalidRosterSlot(slot) => {
                write!(f, "no roster slot {}", slot + 1)
            }
            CommandError::InvalidMarketIndex(index) => {
                write!(f, "no market listing {}", index + 1)
            }
            CommandError::EmptySelection => write!(f, "nothing selected"),
        }
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_one_based_positions() {
        assert_eq!(
            CommandError::InvalidRosterSlot(0).to_string(),
            "no roster slot 1"
        );
        assert_eq!(
            CommandError::InvalidMarketIndex(4).to_string(),
            "no market listing 5"
        );
    }

    #[test]
    fn test_display_reports_amounts() {
        let error = CommandError::InsufficientFunds {
            needed: 1000,
            available: 250,
        };
        assert_eq!(error.to_string(), "not enough money: need $1000, have $250");
    }
}
