//! Bot commands.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать новый запрос расстояния")]
    Start,
    #[command(description = "отменить текущий запрос")]
    Cancel,
}

/// Parses `text` as one of our commands. `/cmd@botname` matches only when `bot_username` is known and equal.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Command> {
    Command::parse(text.trim(), bot_username.unwrap_or("")).ok()
}

/// True when `text` is a single well-formed Telegram bot command (`/name` or `/name@bot`, Latin
/// letters, digits and `_`). Text like `/Чик` is not a command for Telegram and stays user input.
pub fn is_bot_command(text: &str) -> bool {
    let Some(rest) = text.trim().strip_prefix('/') else {
        return false;
    };
    let (name, bot) = match rest.split_once('@') {
        Some((name, bot)) => (name, Some(bot)),
        None => (rest, None),
    };
    let is_word = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word(name) && bot.map_or(true, is_word)
}
