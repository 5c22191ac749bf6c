//! `:` command line vocabulary.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit`, `q!` | Quit without selecting |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `mode <substring\|prefix>` | Change how queries match keys |
//! | `empty <none\|all>` | What an empty query shows |
//! | `limit <n>` | Cap the result count; `0` removes the cap |

use crate::{app::AppState, theme::Theme};
use docseek_core::{EmptyQuery, MatchMode};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Mode(MatchMode),
    Empty(EmptyQuery),
    Limit(usize),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "mode" => rest
                .parse::<MatchMode>()
                .map(Command::Mode)
                .map_err(|_| "usage: mode <substring|prefix>".to_string()),
            "empty" => rest
                .parse::<EmptyQuery>()
                .map(Command::Empty)
                .map_err(|_| "usage: empty <none|all>".to_string()),
            "limit" => rest
                .parse::<usize>()
                .map(Command::Limit)
                .map_err(|_| "usage: limit <n>".to_string()),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Mode(mode) => {
            s.matcher.mode = mode;
            s.refresh();
        }
        Command::Empty(policy) => {
            s.matcher.empty_query = policy;
            s.refresh();
        }
        Command::Limit(n) => {
            s.matcher.max_results = n;
            s.refresh();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
