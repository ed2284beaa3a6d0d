//! Line-oriented stand-in host used by the `playerdb start` binary.
//!
//! Each stdin line is one event:
//!
//! ```text
//! Alice: +set Bob          chat from player Alice
//! @join Alice              Alice spawns for the first time
//! @respawn Alice           Alice respawns (no auto-registration)
//! @entity zombie: +list    chat from a non-player entity
//! @quit                    stop the host
//! ```
use log::warn;

use crate::host::{Actor, Outbound, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Chat { sender: Actor, text: String },
    Spawn { actor: Actor, initial_spawn: bool },
    Quit,
    Blank,
    Invalid(String),
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ConsoleInput::Blank;
        }
        if let Some(directive) = line.strip_prefix('@') {
            let (word, rest) = directive
                .split_once(char::is_whitespace)
                .map(|(w, r)| (w, r.trim()))
                .unwrap_or((directive, ""));
            return match word.to_ascii_lowercase().as_str() {
                "quit" => ConsoleInput::Quit,
                "join" | "respawn" if !rest.is_empty() => ConsoleInput::Spawn {
                    actor: Actor::player(rest),
                    initial_spawn: word.eq_ignore_ascii_case("join"),
                },
                "entity" => match rest.split_once(':') {
                    Some((type_id, text)) if !type_id.trim().is_empty() => ConsoleInput::Chat {
                        sender: Actor::Entity {
                            type_id: type_id.trim().to_string(),
                        },
                        text: text.trim().to_string(),
                    },
                    _ => ConsoleInput::Invalid(line.to_string()),
                },
                _ => ConsoleInput::Invalid(line.to_string()),
            };
        }
        match line.split_once(':') {
            Some((name, text)) if !name.trim().is_empty() => ConsoleInput::Chat {
                sender: Actor::player(name.trim()),
                text: text.trim().to_string(),
            },
            _ => ConsoleInput::Invalid(line.to_string()),
        }
    }
}

/// Direct messages go to stdout; console output goes to the log on target `console`.
#[derive(Debug, Default)]
pub struct ConsoleOutbound;

impl Outbound for ConsoleOutbound {
    fn send_direct(&mut self, player: &Player, text: &str) {
        for line in text.lines() {
            println!("[to {}] {}", player.name, line);
        }
    }

    fn console(&mut self, text: &str) {
        warn!(target: "console", "{}", text);
    }
}
