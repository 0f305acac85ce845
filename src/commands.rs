use std::fmt;

/// Commands a player can issue at the table prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Set the bet for the next hand.
    Bet(u64),
    /// Take another card.
    Hit,
    /// Stand on the current hand.
    Stand,
    /// Show all tables and the players at them.
    Tables,
    /// Leave the table and return to the lobby.
    Leave,
    /// Show the available commands.
    Help,
    /// Log out and exit.
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid bet amount (not a valid number).
    InvalidBetAmount(String),
    /// Bet command missing an amount.
    BetMissingAmount,
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBetAmount(value) => write!(
                f,
                "Invalid bet amount '{}'. Must be a positive number (e.g., 'bet 50')",
                value
            ),
            Self::BetMissingAmount => {
                write!(f, "Bet requires an amount (e.g., 'bet 50')")
            }
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a PlayerCommand.
///
/// # Arguments
///
/// * `input` - The raw command string from user input
///
/// # Returns
///
/// * `Ok(PlayerCommand)` - Successfully parsed command
/// * `Err(ParseError)` - Parse error with descriptive message
///
/// # Examples
///
/// ```
/// use bj_client::commands::{PlayerCommand, parse_command};
///
/// // Single-word commands
/// assert!(matches!(parse_command("hit"), Ok(PlayerCommand::Hit)));
/// assert!(matches!(parse_command("stand"), Ok(PlayerCommand::Stand)));
///
/// // Multi-word commands
/// assert!(matches!(parse_command("bet 50"), Ok(PlayerCommand::Bet(50))));
/// ```
pub fn parse_command(input: &str) -> Result<PlayerCommand, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed {
        "hit" => return Ok(PlayerCommand::Hit),
        "stand" => return Ok(PlayerCommand::Stand),
        "tables" => return Ok(PlayerCommand::Tables),
        "leave" => return Ok(PlayerCommand::Leave),
        "help" => return Ok(PlayerCommand::Help),
        "quit" => return Ok(PlayerCommand::Quit),
        _ => {}
    }

    // Parse multi-word commands
    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"bet") => parse_bet_command(&parts),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Parse a bet command: "bet AMOUNT"
fn parse_bet_command(parts: &[&str]) -> Result<PlayerCommand, ParseError> {
    match parts.get(1) {
        Some(value) => {
            let amount = value
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidBetAmount(value.to_string()))?;
            Ok(PlayerCommand::Bet(amount))
        }
        None => Err(ParseError::BetMissingAmount),
    }
}
