//! # Host bridge
//!
//! The scripting host owns chat transport, player sessions and event delivery. This
//! module describes the slice of it the registry depends on:
//!
//! - inbound [`HostEvent`]s (chat before delivery, player spawn, startup sweep)
//! - the [`Outbound`] capability for direct messages and the diagnostic console
//! - [`service::RegistryService`], which consumes events strictly one at a time
//!
//! ```text
//! host ──HostEvent──▶ mpsc ──▶ RegistryService ──▶ CommandRouter / hooks
//!                                     │                   │
//!                                     ◀──── Outbound ◀────┘
//! ```

pub mod console;
pub mod service;

use thiserror::Error;
use tokio::sync::oneshot;

pub use console::{ConsoleInput, ConsoleOutbound};
pub use service::{start_service, RegistryService, ServiceHandle};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Whoever sent a chat line or spawned. Only players take part in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Player(Player),
    Entity { type_id: String },
}

impl Actor {
    pub fn player(name: impl Into<String>) -> Self {
        Actor::Player(Player::new(name))
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Actor::Player(p) => Some(p),
            Actor::Entity { .. } => None,
        }
    }
}

/// What the host should do with a chat line after the registry has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatDecision {
    Deliver,
    /// The line was a command; hide it from other observers.
    Cancel,
}

#[derive(Debug)]
pub enum HostEvent {
    ChatSend {
        sender: Actor,
        message: String,
        decision: oneshot::Sender<ChatDecision>,
    },
    PlayerSpawn {
        actor: Actor,
        initial_spawn: bool,
    },
    Startup {
        players: Vec<Actor>,
    },
    Shutdown(oneshot::Sender<()>),
}

/// Returned by [`ServiceHandle`] calls once the service loop has stopped.
#[derive(Debug, Error)]
#[error("registry service is not running")]
pub struct ServiceClosed;

pub trait Outbound {
    fn send_direct(&mut self, player: &Player, text: &str);
    fn console(&mut self, text: &str);
}
