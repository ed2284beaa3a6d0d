//! Automatic registration of players as they join.
//!
//! Two entry points: a player's first spawn in the session, and a one-time sweep
//! over everyone already connected when the service starts. Respawns and
//! non-player entities are ignored. Each newly registered player gets exactly one
//! [`Greeting`].
use log::info;

use crate::host::{Actor, Player};
use crate::logutil::preview;
use crate::registry::{DynamicProperties, RegistryStore};

pub const MSG_STARTUP_ADDED: &str = "You have been added to the registry";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub player: Player,
    pub text: String,
}

pub fn spawn_welcome(name: &str) -> String {
    format!("Welcome {name} to the registry")
}

fn register_if_new<P: DynamicProperties>(store: &mut RegistryStore<P>, player: &Player) -> bool {
    if store.has(&player.name) {
        return false;
    }
    store.add(&player.name);
    info!("Auto-registered player '{}'", preview(&player.name));
    true
}

pub fn on_player_spawn<P: DynamicProperties>(
    store: &mut RegistryStore<P>,
    actor: &Actor,
    initial_spawn: bool,
) -> Option<Greeting> {
    if !initial_spawn {
        return None;
    }
    let player = actor.as_player()?;
    register_if_new(store, player).then(|| Greeting {
        player: player.clone(),
        text: spawn_welcome(&player.name),
    })
}

pub fn startup_sweep<P: DynamicProperties>(
    store: &mut RegistryStore<P>,
    actors: &[Actor],
) -> Vec<Greeting> {
    let mut greetings = Vec::new();
    for player in actors.iter().filter_map(Actor::as_player) {
        if register_if_new(store, player) {
            greetings.push(Greeting {
                player: player.clone(),
                text: MSG_STARTUP_ADDED.to_string(),
            });
        }
    }
    info!(
        "Startup sweep checked {} actors, registered {}",
        actors.len(),
        greetings.len()
    );
    greetings
}
