//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    MyId,
    Subscribe,
    Alpha,
    Broadcast,
    Market,
    SmartMoney,
    /// Arguments are optional; the router applies configured defaults.
    NewTokens {
        chain: Option<String>,
        /// `None` when the argument is missing or not numeric, which
        /// silently falls back to the default lookback.
        hours: Option<i64>,
    },
    /// 1-based index into the caller's last `/newtokens` result. `None`
    /// when missing or not numeric.
    TopTraders { index: Option<i64> },
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
pub fn parse_command(text: &str) -> Result<Command, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(Command::Start),
        "/help" => Ok(Command::Help),
        "/myid" => Ok(Command::MyId),
        "/subscribe" => Ok(Command::Subscribe),
        "/alpha" => Ok(Command::Alpha),
        "/broadcast" => Ok(Command::Broadcast),
        "/market" => Ok(Command::Market),
        "/smartmoney" => Ok(Command::SmartMoney),
        "/newtokens" => Ok(Command::NewTokens {
            chain: parts.next().map(str::to_string),
            hours: parts.next().and_then(|raw| raw.parse().ok()),
        }),
        "/toptraders" => Ok(Command::TopTraders {
            index: parts.next().and_then(|raw| raw.parse().ok()),
        }),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text returned by `/help`.
#[must_use]
pub const fn command_help() -> &'static str {
    "Available commands:\n\n\
    /start - Welcome message\n\
    /alpha - Get current alpha insight\n\
    /subscribe - Subscribe to premium features\n\
    /broadcast - Broadcast alpha insight to all subscribers\n\
    /market - Get top 5 gainers in the last 24h\n\
    /smartmoney - Scan for smart money wallets\n\
    /newtokens - Get new tokens on a specific chain and time\n\
    /toptraders - Get top traders for a selected token\n\
    /myid - Show your Telegram user ID\n\
    /help - Show this help message"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Welcome message"),
        ("alpha", "Get current alpha insight"),
        ("subscribe", "Subscribe to premium features"),
        ("broadcast", "Broadcast alpha insight to all subscribers"),
        ("market", "Get top 5 gainers in the last 24h"),
        ("smartmoney", "Scan for smart money wallets"),
        ("newtokens", "Get new tokens on a specific chain and time"),
        ("toptraders", "Get top traders for a selected token"),
        ("myid", "Show your Telegram user ID"),
        ("help", "Show all commands"),
    ]
}
