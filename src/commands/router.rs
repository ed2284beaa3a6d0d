//! Dispatch of parsed commands onto the registry store.
//!
//! Routing is stateless: each command reads or mutates the store and yields a
//! [`Response`]. The reply always goes back to the actor who typed the command; the
//! optional console text goes to the shared diagnostic channel.
use log::{debug, info};

use crate::commands::parser::{Command, CommandParser};
use crate::logutil::preview;
use crate::registry::{DynamicProperties, RegistryStore};

pub const MSG_EMPTY_LIST: &str = "No players in the registry";
pub const MSG_CLEARED: &str = "Cleared all players from the registry";
pub const MSG_JSON_SENT: &str = "Registry JSON has been written to the console";
pub const MSG_UNKNOWN: &str = "Command not found";
pub const MSG_DEL_NOT_FOUND: &str = "Player not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub reply: String,
    pub console: Option<String>,
}

impl Response {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            console: None,
        }
    }
}

pub struct CommandRouter {
    parser: CommandParser,
}

impl CommandRouter {
    pub fn new(parser: CommandParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    pub fn help_text(&self) -> String {
        let p = self.parser.trigger();
        format!(
            "[DB COMMANDS]\n\
             {p}set <player>     - add a player\n\
             {p}get <player>     - check a player\n\
             {p}del <player>     - remove a player\n\
             {p}list             - list all players\n\
             {p}clear            - remove everyone\n\
             {p}json             - dump the registry JSON to the console"
        )
    }

    /// Parse `line` and run it. `None` means the line is not a command and should be
    /// delivered as ordinary chat.
    pub fn route<P: DynamicProperties>(
        &self,
        store: &mut RegistryStore<P>,
        line: &str,
    ) -> Option<Response> {
        let cmd = self.parser.parse(line)?;
        Some(self.execute(store, cmd))
    }

    pub fn execute<P: DynamicProperties>(
        &self,
        store: &mut RegistryStore<P>,
        cmd: Command,
    ) -> Response {
        if cmd.is_mutating() {
            debug!("Executing mutating command {:?}", cmd);
        }
        match cmd {
            Command::Help => Response::reply(self.help_text()),
            Command::Set(name) => {
                if store.has(&name) {
                    Response::reply(format!("Player {name} is already registered"))
                } else {
                    store.add(&name);
                    info!("Registered player '{}'", preview(&name));
                    Response::reply(format!("Added player {name}"))
                }
            }
            Command::Get(name) => {
                if store.has(&name) {
                    Response::reply(format!("Found player {name}"))
                } else {
                    Response::reply(format!("Player {name} not found"))
                }
            }
            Command::Del(name) => {
                if store.has(&name) {
                    store.delete(&name);
                    info!("Removed player '{}'", preview(&name));
                    Response::reply(format!("Deleted player {name}"))
                } else {
                    Response::reply(MSG_DEL_NOT_FOUND)
                }
            }
            Command::List => {
                let names = store.list();
                if names.is_empty() {
                    Response::reply(MSG_EMPTY_LIST)
                } else {
                    Response::reply(format!("All players: {}", names.join(", ")))
                }
            }
            Command::Clear => {
                store.clear();
                info!("Registry cleared");
                Response::reply(MSG_CLEARED)
            }
            Command::Json => Response {
                reply: MSG_JSON_SENT.to_string(),
                console: Some(format!("Registry JSON: {}", store.to_json_pretty())),
            },
            Command::MissingName(verb) => Response::reply(format!(
                "Usage: {}{} <player>",
                self.parser.trigger(),
                verb
            )),
            Command::Unknown(verb) => {
                debug!("Unknown verb '{}'", preview(&verb));
                Response::reply(MSG_UNKNOWN)
            }
        }
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new(CommandParser::new())
    }
}
