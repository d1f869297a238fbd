//! Chat command parsing

/// A recognised chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Send today's reading; `None` means the default language
    Gospel(Option<String>),
    /// Send the list of common language codes
    Languages,
}

impl BotCommand {
    /// Parses a chat message. Matching is case-insensitive; anything that is
    /// not a command yields `None` and should be ignored.
    pub fn parse(message: &str) -> Option<Self> {
        let command = message.trim().to_lowercase();
        let mut words = command.split_whitespace();

        match words.next()? {
            "!gospel" => Some(BotCommand::Gospel(words.next().map(str::to_string))),
            "!languages" if words.next().is_none() => Some(BotCommand::Languages),
            _ => None,
        }
    }
}
