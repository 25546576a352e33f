//! Chat command table.

use super::message::{ABOUT_BUTTON, RATE_BUTTON};

/// Commands the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Greeting with the main menu.
    Start,
    /// Current tiered price table.
    CurrentRate,
    /// Static office information.
    About,
}

/// Exact message text for each command. Matching is case-sensitive and the
/// text is not trimmed.
pub const COMMAND_TABLE: &[(&str, Command)] = &[
    ("/start", Command::Start),
    (RATE_BUTTON, Command::CurrentRate),
    (ABOUT_BUTTON, Command::About),
];

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`. The other
/// commands are reached through the reply menu, not the "/" menu.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![("start", "Главное меню")]
}
