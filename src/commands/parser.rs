//! Chat line parser for registry commands.
//!
//! A line is a command only when its first non-blank character is the trigger
//! (`+` unless configured otherwise). The verb (case-insensitive) runs from the
//! trigger to the first whitespace, so `+ clear` has an empty verb. The rest is
//! split on whitespace into arguments passed through untouched. There is no
//! quoting, so a name containing spaces cannot be addressed.
use log::{trace, warn};

pub const DEFAULT_TRIGGER: char = '+';

/// Triggers an operator may choose from. Anything else falls back to the default.
pub const ALLOWED_TRIGGERS: &[char] = &['+', '!', '^', '$', '/', '>'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Set(String),
    Get(String),
    Del(String),
    List,
    Clear,
    Json,
    /// A name-taking verb arrived without a name; carries the verb.
    MissingName(&'static str),
    /// Unrecognized verb (lowercased; empty when nothing follows the trigger directly).
    Unknown(String),
}

impl Command {
    /// Whether running this command may rewrite the registry slot.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Set(_) | Command::Del(_) | Command::Clear)
    }
}

#[derive(Debug, Clone)]
pub struct CommandParser {
    trigger: char,
}

impl CommandParser {
    pub fn new() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER,
        }
    }

    /// Build a parser from a configured trigger string. It must be exactly one
    /// character from [`ALLOWED_TRIGGERS`].
    pub fn new_with_prefix(prefix: Option<String>) -> Self {
        let Some(raw) = prefix else {
            return Self::new();
        };
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if ALLOWED_TRIGGERS.contains(&c) => Self { trigger: c },
            _ => {
                warn!(
                    "Invalid command prefix '{}'; falling back to '{}'",
                    raw, DEFAULT_TRIGGER
                );
                Self::new()
            }
        }
    }

    pub fn trigger(&self) -> char {
        self.trigger
    }

    /// Parse a raw chat line. `None` means the line is ordinary chat.
    pub fn parse(&self, raw: &str) -> Option<Command> {
        let body = raw.trim().strip_prefix(self.trigger)?;
        // The verb must touch the trigger; "+ clear" has an empty verb.
        let (verb, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
        let verb = verb.to_lowercase();
        let name = rest.split_whitespace().next().map(str::to_string);
        trace!("Parsed verb '{}' (name: {:?}) from '{}'", verb, name, raw);

        let cmd = match verb.as_str() {
            "help" => Command::Help,
            "list" => Command::List,
            "clear" => Command::Clear,
            "json" => Command::Json,
            "set" => name.map_or(Command::MissingName("set"), Command::Set),
            "get" => name.map_or(Command::MissingName("get"), Command::Get),
            "del" => name.map_or(Command::MissingName("del"), Command::Del),
            _ => Command::Unknown(verb),
        };
        Some(cmd)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
